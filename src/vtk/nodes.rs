//! Reference coordinates of the nodes of VTK Lagrange cells, in VTK order

use crate::traits::{SimplexIndexing, TensorIndexing};
use crate::types::{Degree, NodeList, RealScalar, ReferenceCellType, ReorderError, Result};
use crate::vtk::indexing::{tetrahedron_node_count, triangle_node_count};
use crate::vtk::transforms::{
    barycentric_to_cartesian_2d, barycentric_to_cartesian_3d, interval_coordinate,
    tensor_to_cartesian, to_scalar,
};
use itertools::Itertools;

fn check_order(cell: ReferenceCellType, orders: &[usize]) -> Result<()> {
    if orders.contains(&0) {
        Err(ReorderError::InvalidDegree {
            cell,
            degree: Degree::PerAxis(orders.to_vec()),
        })
    } else {
        Ok(())
    }
}

fn check_barycentric(bindex: &[usize], size: usize, order: usize) -> Result<()> {
    if bindex.len() != size || bindex.iter().sum::<usize>() != order {
        Err(ReorderError::IndexingFailure(bindex.to_vec()))
    } else {
        Ok(())
    }
}

/// Place each multi-index's point at the position given by the indexing
///
/// The node numbers of tensor-product cells are not lexicographic in the
/// multi-index, so points are written to their node number rather than appended.
fn scatter<T: RealScalar>(
    indexing: &impl TensorIndexing,
    multi_indices: impl Iterator<Item = Vec<usize>>,
    orders: &[usize],
    count: usize,
) -> Result<NodeList<T>> {
    let mut nodes: Vec<Option<Vec<T>>> = vec![None; count];
    for ijk in multi_indices {
        let slot = indexing
            .point_index_from_ijk(&ijk, orders)
            .and_then(|index| nodes.get_mut(index))
            .filter(|slot| slot.is_none())
            .ok_or_else(|| ReorderError::IndexingFailure(ijk.clone()))?;
        *slot = Some(tensor_to_cartesian(&ijk, orders));
    }
    nodes
        .into_iter()
        .collect::<Option<NodeList<T>>>()
        .ok_or_else(|| ReorderError::IndexingFailure(orders.to_vec()))
}

/// The nodes of a VTK Lagrange curve
pub fn interval_nodes<T: RealScalar>(order: usize) -> Result<NodeList<T>> {
    check_order(ReferenceCellType::Interval, &[order])?;
    Ok((0..=order)
        .map(|i| vec![interval_coordinate(i, order)])
        .collect())
}

/// The nodes of a VTK Lagrange triangle
pub fn triangle_nodes<T: RealScalar>(
    indexing: &impl SimplexIndexing,
    order: usize,
) -> Result<NodeList<T>> {
    check_order(ReferenceCellType::Triangle, &[order])?;
    let scale = T::from(order).unwrap();
    (0..triangle_node_count(order))
        .map(|index| -> Result<Vec<T>> {
            let bindex = indexing.barycentric_index(index, order);
            check_barycentric(&bindex, 3, order)?;
            let cart = barycentric_to_cartesian_2d::<T>(&to_scalar(&bindex));
            Ok(cart.iter().map(|c| *c / scale).collect())
        })
        .collect()
}

/// The nodes of a VTK Lagrange tetrahedron
pub fn tetrahedron_nodes<T: RealScalar>(
    indexing: &impl SimplexIndexing,
    order: usize,
) -> Result<NodeList<T>> {
    check_order(ReferenceCellType::Tetrahedron, &[order])?;
    let scale = T::from(order).unwrap();
    (0..tetrahedron_node_count(order))
        .map(|index| -> Result<Vec<T>> {
            let bindex = indexing.barycentric_index(index, order);
            check_barycentric(&bindex, 4, order)?;
            let mut bar: [T; 4] = to_scalar(&bindex);
            for b in bar.iter_mut() {
                *b = *b / scale;
            }
            Ok(barycentric_to_cartesian_3d(&bar).to_vec())
        })
        .collect()
}

/// The nodes of a VTK Lagrange quadrilateral with the given order along each axis
pub fn quadrilateral_nodes<T: RealScalar>(
    indexing: &impl TensorIndexing,
    orders: [usize; 2],
) -> Result<NodeList<T>> {
    check_order(ReferenceCellType::Quadrilateral, &orders)?;
    let count = orders.iter().map(|o| o + 1).product();
    let multi_indices = orders.iter().map(|o| 0..=*o).multi_cartesian_product();
    scatter(indexing, multi_indices, &orders, count)
}

/// The nodes of a VTK Lagrange hexahedron with the given order along each axis
pub fn hexahedron_nodes<T: RealScalar>(
    indexing: &impl TensorIndexing,
    orders: [usize; 3],
) -> Result<NodeList<T>> {
    check_order(ReferenceCellType::Hexahedron, &orders)?;
    let count = orders.iter().map(|o| o + 1).product();
    let multi_indices = orders.iter().map(|o| 0..=*o).multi_cartesian_product();
    scatter(indexing, multi_indices, &orders, count)
}

/// The nodes of a VTK Lagrange wedge
///
/// `orders` holds the order of the triangular cross-section and the order of
/// the extrusion. Multi-indices `(i, j, k)` with `i + j` greater than the
/// triangle order lie outside the wedge and are skipped.
pub fn wedge_nodes<T: RealScalar>(
    indexing: &impl TensorIndexing,
    orders: [usize; 2],
) -> Result<NodeList<T>> {
    check_order(ReferenceCellType::Prism, &orders)?;
    let [tri, ext] = orders;
    let full_orders = [tri, tri, ext];
    let count = triangle_node_count(tri) * (ext + 1);
    let multi_indices = full_orders
        .iter()
        .map(|o| 0..=*o)
        .multi_cartesian_product()
        .filter(|ijk| ijk[0] + ijk[1] <= tri);
    scatter(indexing, multi_indices, &full_orders, count)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vtk::indexing::{
        VtkLagrangeHexahedron, VtkLagrangeQuadrilateral, VtkLagrangeTetra, VtkLagrangeTriangle,
        VtkLagrangeWedge,
    };
    use approx::assert_relative_eq;

    /// Numbers the nodes of a quadrilateral in reverse lexicographic order
    struct ReversedQuadrilateral;

    impl TensorIndexing for ReversedQuadrilateral {
        fn point_index_from_ijk(&self, ijk: &[usize], orders: &[usize]) -> Option<usize> {
            let count = (orders[0] + 1) * (orders[1] + 1);
            Some(count - 1 - (ijk[0] * (orders[1] + 1) + ijk[1]))
        }
    }

    /// Numbers the nodes of a triangle in the opposite direction to VTK
    struct ReversedTriangle;

    impl SimplexIndexing for ReversedTriangle {
        fn barycentric_index(&self, index: usize, order: usize) -> Vec<usize> {
            VtkLagrangeTriangle.barycentric_index(triangle_node_count(order) - 1 - index, order)
        }
    }

    /// Maps every multi-index to node 0
    struct Collapsing;

    impl TensorIndexing for Collapsing {
        fn point_index_from_ijk(&self, _ijk: &[usize], _orders: &[usize]) -> Option<usize> {
            Some(0)
        }
    }

    #[test]
    fn test_interval_3() {
        let nodes = interval_nodes::<f64>(3).unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0][0], 0.0);
        assert_relative_eq!(nodes[1][0], 1.0 / 3.0);
        assert_relative_eq!(nodes[2][0], 2.0 / 3.0);
        assert_eq!(nodes[3][0], 1.0);
    }

    #[test]
    fn test_node_counts() {
        for order in 1..7 {
            assert_eq!(interval_nodes::<f64>(order).unwrap().len(), order + 1);
            assert_eq!(
                triangle_nodes::<f64>(&VtkLagrangeTriangle, order)
                    .unwrap()
                    .len(),
                (order + 1) * (order + 2) / 2
            );
            assert_eq!(
                tetrahedron_nodes::<f64>(&VtkLagrangeTetra, order)
                    .unwrap()
                    .len(),
                (order + 1) * (order + 2) * (order + 3) / 6
            );
            assert_eq!(
                quadrilateral_nodes::<f64>(&VtkLagrangeQuadrilateral, [order, order + 1])
                    .unwrap()
                    .len(),
                (order + 1) * (order + 2)
            );
            assert_eq!(
                hexahedron_nodes::<f64>(&VtkLagrangeHexahedron, [order; 3])
                    .unwrap()
                    .len(),
                (order + 1).pow(3)
            );
            assert_eq!(
                wedge_nodes::<f64>(&VtkLagrangeWedge, [order, 2])
                    .unwrap()
                    .len(),
                (order + 1) * (order + 2) / 2 * 3
            );
        }
    }

    #[test]
    fn test_triangle_1() {
        let expected = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let nodes = triangle_nodes::<f64>(&VtkLagrangeTriangle, 1).unwrap();
        for (n, e) in nodes.iter().zip(&expected) {
            assert_eq!(n, e);
        }

        // The same set of points, whatever the numbering
        let nodes = triangle_nodes::<f64>(&ReversedTriangle, 1).unwrap();
        assert_eq!(nodes.len(), 3);
        for e in &expected {
            assert!(nodes.iter().any(|n| n == e));
        }
    }

    #[test]
    fn test_triangle_edge_nodes() {
        let nodes = triangle_nodes::<f64>(&VtkLagrangeTriangle, 3).unwrap();
        assert_relative_eq!(nodes[3][0], 1.0 / 3.0);
        assert_relative_eq!(nodes[3][1], 0.0);
        assert_relative_eq!(nodes[9][0], 1.0 / 3.0);
        assert_relative_eq!(nodes[9][1], 1.0 / 3.0);
    }

    #[test]
    fn test_tetrahedron_vertices() {
        let nodes = tetrahedron_nodes::<f64>(&VtkLagrangeTetra, 2).unwrap();
        assert_eq!(nodes[0], vec![0.0, 0.0, 0.0]);
        assert_eq!(nodes[1], vec![1.0, 0.0, 0.0]);
        assert_eq!(nodes[2], vec![0.0, 1.0, 0.0]);
        assert_eq!(nodes[3], vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_quadrilateral_scatter() {
        let nodes = quadrilateral_nodes::<f64>(&VtkLagrangeQuadrilateral, [2, 2]).unwrap();
        assert_eq!(nodes[2], vec![1.0, 1.0]);
        assert_eq!(nodes[3], vec![0.0, 1.0]);
        assert_eq!(nodes[8], vec![0.5, 0.5]);

        // Points are written to the position the indexing gives them
        let nodes = quadrilateral_nodes::<f64>(&ReversedQuadrilateral, [1, 2]).unwrap();
        assert_eq!(nodes[0], vec![1.0, 1.0]);
        assert_eq!(nodes[1], vec![1.0, 0.5]);
        assert_eq!(nodes[5], vec![0.0, 0.0]);
    }

    #[test]
    fn test_hexahedron_vertices() {
        let nodes = hexahedron_nodes::<f64>(&VtkLagrangeHexahedron, [2, 2, 2]).unwrap();
        assert_eq!(nodes[1], vec![1.0, 0.0, 0.0]);
        assert_eq!(nodes[6], vec![1.0, 1.0, 1.0]);
        assert_eq!(nodes[26], vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_wedge_1() {
        let nodes = wedge_nodes::<f64>(&VtkLagrangeWedge, [1, 1]).unwrap();
        assert_eq!(nodes.len(), 6);
        assert_eq!(
            nodes,
            vec![
                vec![0.0, 0.0, 0.0],
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![0.0, 1.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_wedge_points_inside() {
        let nodes = wedge_nodes::<f64>(&VtkLagrangeWedge, [4, 3]).unwrap();
        for n in nodes {
            assert!(n[0] + n[1] <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_indexing_failure() {
        assert!(matches!(
            quadrilateral_nodes::<f64>(&Collapsing, [1, 1]),
            Err(ReorderError::IndexingFailure(_))
        ));
    }

    #[test]
    fn test_order_0() {
        assert!(matches!(
            triangle_nodes::<f64>(&VtkLagrangeTriangle, 0),
            Err(ReorderError::InvalidDegree { .. })
        ));
        assert!(matches!(
            hexahedron_nodes::<f64>(&VtkLagrangeHexahedron, [1, 0, 1]),
            Err(ReorderError::InvalidDegree { .. })
        ));
    }
}
