//! Finite element definitions

use crate::types::{Degree, NodeList, RealScalar, ReferenceCellType};

pub trait NodalElement {
    //! A finite element whose degrees of freedom are point evaluations
    //!
    //! This is the interface used to read the native node ordering of a
    //! finite element library.

    /// The scalar type of the node coordinates
    type T: RealScalar;

    /// The reference cell type
    fn cell_type(&self) -> ReferenceCellType;

    /// The polynomial degree
    fn degree(&self) -> &Degree;

    /// The number of basis functions
    fn dim(&self) -> usize;

    /// The coordinates of the nodes on the reference cell, in the element's native order
    ///
    /// There must be exactly one point per degree of freedom.
    fn node_coordinates(&self) -> NodeList<Self::T>;

    /// The DOFs that are associated with a subentity of the reference cell
    fn entity_dofs(&self, entity_dim: usize, entity_number: usize) -> Option<&[usize]>;
}

pub trait ElementFamily {
    //! A family of finite elements defined on every supported cell type

    /// The element type
    type FiniteElement: NodalElement;

    /// Get the element of this family on the given cell
    fn element(&self, cell_type: ReferenceCellType) -> crate::types::Result<Self::FiniteElement>;
}
