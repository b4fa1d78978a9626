//! Maps from discrete multi-indices to reference coordinates

use crate::element::reference_cell;
use crate::types::{RealScalar, ReferenceCellType};

/// The reference vertex that each barycentric weight of a VTK triangle belongs to
const TRIANGLE_BARYCENTRIC_VERTICES: [usize; 3] = [1, 2, 0];

/// The reference vertex that each barycentric weight of a VTK tetrahedron belongs to
const TETRAHEDRON_BARYCENTRIC_VERTICES: [usize; 4] = [1, 2, 3, 0];

fn affine_combination<T: RealScalar, const D: usize>(
    cell_type: ReferenceCellType,
    weights: &[T],
    vertex_numbers: &[usize],
) -> [T; D] {
    let vertices = reference_cell::vertices::<T>(cell_type);
    let mut pt = [T::zero(); D];
    for (w, v) in weights.iter().zip(vertex_numbers) {
        for (p, c) in pt.iter_mut().zip(&vertices[*v]) {
            *p = *p + *w * *c;
        }
    }
    pt
}

/// Map a barycentric index on a triangle to a point
///
/// The entries of `bar` are the weights of the vertices (1, 0), (0, 1) and
/// (0, 0), in that order.
pub fn barycentric_to_cartesian_2d<T: RealScalar>(bar: &[T; 3]) -> [T; 2] {
    affine_combination(
        ReferenceCellType::Triangle,
        bar,
        &TRIANGLE_BARYCENTRIC_VERTICES,
    )
}

/// Map a barycentric index on a tetrahedron to a point
///
/// The entries of `bar` are the weights of the vertices (1, 0, 0), (0, 1, 0),
/// (0, 0, 1) and (0, 0, 0), in that order.
pub fn barycentric_to_cartesian_3d<T: RealScalar>(bar: &[T; 4]) -> [T; 3] {
    affine_combination(
        ReferenceCellType::Tetrahedron,
        bar,
        &TETRAHEDRON_BARYCENTRIC_VERTICES,
    )
}

/// Map a multi-index on a tensor-product cell to a point
///
/// Entry `a` of the result is `ijk[a] / orders[a]`.
pub fn tensor_to_cartesian<T: RealScalar>(ijk: &[usize], orders: &[usize]) -> Vec<T> {
    ijk.iter()
        .zip(orders)
        .map(|(i, o)| T::from(*i).unwrap() / T::from(*o).unwrap())
        .collect()
}

/// The coordinate of node `i` on an interval of order `order`
///
/// The endpoints are exact.
pub fn interval_coordinate<T: RealScalar>(i: usize, order: usize) -> T {
    if i == 0 {
        T::zero()
    } else if i == order {
        T::one()
    } else {
        T::from(i).unwrap() / T::from(order).unwrap()
    }
}

/// Convert an integer multi-index to the scalar type
pub(crate) fn to_scalar<T: RealScalar, const N: usize>(index: &[usize]) -> [T; N] {
    let mut out = [T::zero(); N];
    for (o, i) in out.iter_mut().zip(index) {
        *o = T::from(*i).unwrap();
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangle_vertices() {
        assert_eq!(barycentric_to_cartesian_2d(&[0.0, 0.0, 1.0]), [0.0, 0.0]);
        assert_eq!(barycentric_to_cartesian_2d(&[1.0, 0.0, 0.0]), [1.0, 0.0]);
        assert_eq!(barycentric_to_cartesian_2d(&[0.0, 1.0, 0.0]), [0.0, 1.0]);
    }

    #[test]
    fn test_tetrahedron_vertices() {
        assert_eq!(
            barycentric_to_cartesian_3d(&[0.0, 0.0, 0.0, 1.0]),
            [0.0, 0.0, 0.0]
        );
        assert_eq!(
            barycentric_to_cartesian_3d(&[0.0, 0.0, 1.0, 0.0]),
            [0.0, 0.0, 1.0]
        );
        let p = barycentric_to_cartesian_3d(&[0.25, 0.25, 0.25, 0.25]);
        for c in p {
            assert_relative_eq!(c, 0.25);
        }
    }

    #[test]
    fn test_tensor() {
        let p = tensor_to_cartesian::<f64>(&[1, 0, 3], &[2, 2, 3]);
        assert_eq!(p, vec![0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_interval() {
        assert_eq!(interval_coordinate::<f64>(0, 3), 0.0);
        assert_eq!(interval_coordinate::<f64>(3, 3), 1.0);
        assert_relative_eq!(interval_coordinate::<f64>(1, 3), 1.0 / 3.0);
    }

    #[test]
    fn test_to_scalar() {
        let b: [f64; 3] = to_scalar(&[1, 2, 0]);
        assert_eq!(b, [1.0, 2.0, 0.0]);
    }
}
