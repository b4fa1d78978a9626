//! Reordering the nodes of Lagrange elements for VTK
//!
//! Each function takes an element defined on one cell type, generates the
//! nodes of the VTK Lagrange cell of the same degree, and matches them against
//! the element's nodes. The permutation `perm` returned satisfies
//! `vtk_nodes[i] == element_nodes[perm[i]]`.
//!
//! The `*_reorder_with` functions take the VTK node numbering as an argument,
//! so that a different implementation of [SimplexIndexing] or [TensorIndexing]
//! can be used.

use crate::permutation::{invert_with_options, MatchOptions};
use crate::traits::{NodalElement, SimplexIndexing, TensorIndexing};
use crate::types::{NodeList, Permutation, ReferenceCellType, ReorderError, Result};
use crate::vtk::indexing::{
    VtkLagrangeHexahedron, VtkLagrangeQuadrilateral, VtkLagrangeTetra, VtkLagrangeTriangle,
    VtkLagrangeWedge,
};
use crate::vtk::nodes;
use log::debug;

fn check_cell(element: &impl NodalElement, expected: ReferenceCellType) -> Result<()> {
    let found = element.cell_type();
    if found == expected {
        Ok(())
    } else {
        Err(ReorderError::CellMismatch { expected, found })
    }
}

/// The element's degree along each of `naxes` axes, all of which must be positive
fn axis_degrees(element: &impl NodalElement, naxes: usize) -> Result<Vec<usize>> {
    element
        .degree()
        .axis_degrees(naxes)
        .filter(|degrees| !degrees.contains(&0))
        .ok_or_else(|| ReorderError::InvalidDegree {
            cell: element.cell_type(),
            degree: element.degree().clone(),
        })
}

fn match_nodes<E: NodalElement>(
    element: &E,
    vtk_nodes: NodeList<E::T>,
    options: &MatchOptions,
) -> Result<Permutation> {
    debug!(
        "Reordering {} nodes of a degree {} {}",
        vtk_nodes.len(),
        element.degree(),
        element.cell_type()
    );
    let element_nodes = element.node_coordinates();
    invert_with_options(&vtk_nodes, &element_nodes, options)
}

/// Permutation from the nodes of a Lagrange element on an interval to a VTK Lagrange curve
pub fn vtk_lagrange_interval_reorder<E: NodalElement>(element: &E) -> Result<Permutation> {
    vtk_lagrange_interval_reorder_with_options(element, &MatchOptions::default())
}

/// Permutation from the nodes of a Lagrange element on an interval to a VTK Lagrange curve
pub fn vtk_lagrange_interval_reorder_with_options<E: NodalElement>(
    element: &E,
    options: &MatchOptions,
) -> Result<Permutation> {
    check_cell(element, ReferenceCellType::Interval)?;
    let order = axis_degrees(element, 1)?[0];
    match_nodes(element, nodes::interval_nodes(order)?, options)
}

/// Permutation from the nodes of a Lagrange element on a triangle to a VTK Lagrange triangle
pub fn vtk_lagrange_triangle_reorder<E: NodalElement>(element: &E) -> Result<Permutation> {
    vtk_lagrange_triangle_reorder_with(element, &VtkLagrangeTriangle, &MatchOptions::default())
}

/// Permutation from the nodes of a Lagrange element on a triangle to a VTK Lagrange triangle
pub fn vtk_lagrange_triangle_reorder_with_options<E: NodalElement>(
    element: &E,
    options: &MatchOptions,
) -> Result<Permutation> {
    vtk_lagrange_triangle_reorder_with(element, &VtkLagrangeTriangle, options)
}

/// Permutation from the nodes of a Lagrange element on a triangle to a triangle numbered by `indexing`
pub fn vtk_lagrange_triangle_reorder_with<E: NodalElement>(
    element: &E,
    indexing: &impl SimplexIndexing,
    options: &MatchOptions,
) -> Result<Permutation> {
    check_cell(element, ReferenceCellType::Triangle)?;
    let order = axis_degrees(element, 1)?[0];
    match_nodes(element, nodes::triangle_nodes(indexing, order)?, options)
}

/// Permutation from the nodes of a Lagrange element on a quadrilateral to a VTK Lagrange quadrilateral
pub fn vtk_lagrange_quadrilateral_reorder<E: NodalElement>(element: &E) -> Result<Permutation> {
    vtk_lagrange_quadrilateral_reorder_with(
        element,
        &VtkLagrangeQuadrilateral,
        &MatchOptions::default(),
    )
}

/// Permutation from the nodes of a Lagrange element on a quadrilateral to a VTK Lagrange quadrilateral
pub fn vtk_lagrange_quadrilateral_reorder_with_options<E: NodalElement>(
    element: &E,
    options: &MatchOptions,
) -> Result<Permutation> {
    vtk_lagrange_quadrilateral_reorder_with(element, &VtkLagrangeQuadrilateral, options)
}

/// Permutation from the nodes of a Lagrange element on a quadrilateral to a quadrilateral numbered by `indexing`
///
/// The degrees along the two axes may differ.
pub fn vtk_lagrange_quadrilateral_reorder_with<E: NodalElement>(
    element: &E,
    indexing: &impl TensorIndexing,
    options: &MatchOptions,
) -> Result<Permutation> {
    check_cell(element, ReferenceCellType::Quadrilateral)?;
    let degrees = axis_degrees(element, 2)?;
    let orders = [degrees[0], degrees[1]];
    match_nodes(element, nodes::quadrilateral_nodes(indexing, orders)?, options)
}

/// Permutation from the nodes of a Lagrange element on a tetrahedron to a VTK Lagrange tetrahedron
pub fn vtk_lagrange_tetrahedron_reorder<E: NodalElement>(element: &E) -> Result<Permutation> {
    vtk_lagrange_tetrahedron_reorder_with(element, &VtkLagrangeTetra, &MatchOptions::default())
}

/// Permutation from the nodes of a Lagrange element on a tetrahedron to a VTK Lagrange tetrahedron
pub fn vtk_lagrange_tetrahedron_reorder_with_options<E: NodalElement>(
    element: &E,
    options: &MatchOptions,
) -> Result<Permutation> {
    vtk_lagrange_tetrahedron_reorder_with(element, &VtkLagrangeTetra, options)
}

/// Permutation from the nodes of a Lagrange element on a tetrahedron to a tetrahedron numbered by `indexing`
pub fn vtk_lagrange_tetrahedron_reorder_with<E: NodalElement>(
    element: &E,
    indexing: &impl SimplexIndexing,
    options: &MatchOptions,
) -> Result<Permutation> {
    check_cell(element, ReferenceCellType::Tetrahedron)?;
    let order = axis_degrees(element, 1)?[0];
    match_nodes(element, nodes::tetrahedron_nodes(indexing, order)?, options)
}

/// Permutation from the nodes of a Lagrange element on a prism to a VTK Lagrange wedge
pub fn vtk_lagrange_wedge_reorder<E: NodalElement>(element: &E) -> Result<Permutation> {
    vtk_lagrange_wedge_reorder_with(element, &VtkLagrangeWedge, &MatchOptions::default())
}

/// Permutation from the nodes of a Lagrange element on a prism to a VTK Lagrange wedge
pub fn vtk_lagrange_wedge_reorder_with_options<E: NodalElement>(
    element: &E,
    options: &MatchOptions,
) -> Result<Permutation> {
    vtk_lagrange_wedge_reorder_with(element, &VtkLagrangeWedge, options)
}

/// Permutation from the nodes of a Lagrange element on a prism to a wedge numbered by `indexing`
///
/// The element's degree is either uniform, or a degree for the triangular
/// cross-section followed by a degree for the extrusion.
pub fn vtk_lagrange_wedge_reorder_with<E: NodalElement>(
    element: &E,
    indexing: &impl TensorIndexing,
    options: &MatchOptions,
) -> Result<Permutation> {
    check_cell(element, ReferenceCellType::Prism)?;
    let degrees = axis_degrees(element, 2)?;
    let orders = [degrees[0], degrees[1]];
    match_nodes(element, nodes::wedge_nodes(indexing, orders)?, options)
}

/// Permutation from the nodes of a Lagrange element on a hexahedron to a VTK Lagrange hexahedron
pub fn vtk_lagrange_hexahedron_reorder<E: NodalElement>(element: &E) -> Result<Permutation> {
    vtk_lagrange_hexahedron_reorder_with(
        element,
        &VtkLagrangeHexahedron,
        &MatchOptions::default(),
    )
}

/// Permutation from the nodes of a Lagrange element on a hexahedron to a VTK Lagrange hexahedron
pub fn vtk_lagrange_hexahedron_reorder_with_options<E: NodalElement>(
    element: &E,
    options: &MatchOptions,
) -> Result<Permutation> {
    vtk_lagrange_hexahedron_reorder_with(element, &VtkLagrangeHexahedron, options)
}

/// Permutation from the nodes of a Lagrange element on a hexahedron to a hexahedron numbered by `indexing`
///
/// The degree must be the same along all three axes.
pub fn vtk_lagrange_hexahedron_reorder_with<E: NodalElement>(
    element: &E,
    indexing: &impl TensorIndexing,
    options: &MatchOptions,
) -> Result<Permutation> {
    check_cell(element, ReferenceCellType::Hexahedron)?;
    let degrees = axis_degrees(element, 3)?;
    if degrees.iter().any(|d| *d != degrees[0]) {
        return Err(ReorderError::NonUniformDegree(degrees));
    }
    let orders = [degrees[0], degrees[1], degrees[2]];
    match_nodes(element, nodes::hexahedron_nodes(indexing, orders)?, options)
}
