//! ndreorder
//!
//! Permutations between the node ordering of a Lagrange finite element and
//! the node ordering used by VTK's high-order Lagrange cells.
//!
//! The node coordinates of both conventions are generated on the reference
//! cell and matched against each other. The result of a reorder function is a
//! permutation `perm` such that the VTK node `i` is the element node `perm[i]`,
//! so data given in element order is converted to VTK order by reading
//! `data[perm[i]]`.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod element;
pub mod permutation;
pub mod reorder;
pub mod traits;
pub mod types;
pub mod vtk;

pub use permutation::{apply_permutation, invert, MatchOptions};
pub use reorder::{
    vtk_lagrange_hexahedron_reorder, vtk_lagrange_interval_reorder,
    vtk_lagrange_quadrilateral_reorder, vtk_lagrange_tetrahedron_reorder,
    vtk_lagrange_triangle_reorder, vtk_lagrange_wedge_reorder,
};
pub use types::{Degree, NodeList, Permutation, ReferenceCellType, ReorderError, Result};
