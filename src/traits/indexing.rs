//! Node numbering of high-order visualisation cells

pub trait SimplexIndexing {
    //! Numbering of the nodes of a high-order simplex

    /// The barycentric multi-index of the node with the given number
    ///
    /// The result has one entry per vertex of the simplex and its entries sum
    /// to `order`. The first entries correspond to the vertices at the unit
    /// points along each axis and the last entry to the vertex at the origin.
    fn barycentric_index(&self, index: usize, order: usize) -> Vec<usize>;
}

pub trait TensorIndexing {
    //! Numbering of the nodes of a high-order tensor-product cell

    /// The node number of the point with multi-index `ijk`
    ///
    /// `orders` has one entry per axis. Returns `None` if `ijk` does not lie
    /// in the cell.
    fn point_index_from_ijk(&self, ijk: &[usize], orders: &[usize]) -> Option<usize>;
}
