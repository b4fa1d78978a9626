//! VTK Lagrange cells
//!
//! VTK numbers the nodes of its high-order Lagrange cells hierarchically: the
//! vertices first, then the nodes inside each edge, then inside each face, then
//! inside the cell. On simplices the interior nodes are numbered recursively as
//! a smaller simplex of the same kind.

pub mod indexing;
pub mod nodes;
pub mod transforms;

pub use indexing::{
    VtkLagrangeHexahedron, VtkLagrangeQuadrilateral, VtkLagrangeTetra, VtkLagrangeTriangle,
    VtkLagrangeWedge,
};
