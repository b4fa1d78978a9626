//! Node numbering of VTK's Lagrange cells
//!
//! These follow the numbering of `vtkLagrangeTriangle::BarycentricIndex`,
//! `vtkLagrangeTetra::BarycentricIndex` and the `PointIndexFromIJK` methods of
//! `vtkLagrangeQuadrilateral`, `vtkLagrangeHexahedron` and `vtkLagrangeWedge`.

use crate::traits::{SimplexIndexing, TensorIndexing};

/// The number of nodes of a Lagrange triangle of the given order
pub fn triangle_node_count(order: usize) -> usize {
    (order + 1) * (order + 2) / 2
}

/// The number of nodes of a Lagrange tetrahedron of the given order
pub fn tetrahedron_node_count(order: usize) -> usize {
    (order + 1) * (order + 2) * (order + 3) / 6
}

/// Node numbering of `vtkLagrangeTriangle`
#[derive(Debug, Default, Clone, Copy)]
pub struct VtkLagrangeTriangle;

impl SimplexIndexing for VtkLagrangeTriangle {
    fn barycentric_index(&self, index: usize, order: usize) -> Vec<usize> {
        assert!(index < triangle_node_count(order));
        let mut index = index;
        let mut order = order;
        let mut max = order;
        let mut min = 0;

        // Step inside the boundary of each enclosing triangle
        while order > 0 && index >= 3 * order {
            index -= 3 * order;
            max -= 2;
            min += 1;
            order -= 3;
        }

        let mut bindex = vec![min; 3];
        if index < 3 {
            // Vertex 0 is the origin, which owns the last weight
            bindex[(index + 2) % 3] = max;
        } else {
            let index = index - 3;
            let edge = index / (order - 1);
            let offset = index % (order - 1);
            bindex[(edge + 1) % 3] = min;
            bindex[(edge + 2) % 3] = max - 1 - offset;
            bindex[edge] = min + 1 + offset;
        }
        bindex
    }
}

/// The weight that is largest at each vertex of a tetrahedron
const TETRA_VERTEX_MAX_COORDS: [usize; 4] = [3, 0, 1, 2];
/// The barycentric coordinates of each vertex of a tetrahedron
const TETRA_LINEAR_VERTICES: [[usize; 4]; 4] =
    [[0, 0, 0, 1], [1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0]];
const TETRA_EDGES: [[usize; 2]; 6] = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];
/// The weights that vary over each face, in the order of the face's triangle numbering
const TETRA_FACE_BCOORDS: [[usize; 3]; 4] = [[0, 2, 3], [2, 0, 1], [2, 1, 3], [1, 0, 3]];
/// The weight that is constant over each face
const TETRA_FACE_MIN_COORD: [usize; 4] = [1, 3, 0, 2];

/// Node numbering of `vtkLagrangeTetra`
#[derive(Debug, Default, Clone, Copy)]
pub struct VtkLagrangeTetra;

impl SimplexIndexing for VtkLagrangeTetra {
    fn barycentric_index(&self, index: usize, order: usize) -> Vec<usize> {
        assert!(index < tetrahedron_node_count(order));
        let mut index = index;
        let mut order = order;
        let mut max = order;
        let mut min = 0;

        // Step inside the boundary of each enclosing tetrahedron
        while order >= 4 && index >= 2 * (order * order + 1) {
            index -= 2 * (order * order + 1);
            max -= 3;
            min += 1;
            order -= 4;
        }

        let mut bindex = vec![min; 4];
        if index < 4 {
            bindex[TETRA_VERTEX_MAX_COORDS[index]] = max;
        } else if index - 4 < 6 * (order - 1) {
            let edge = TETRA_EDGES[(index - 4) / (order - 1)];
            let offset = (index - 4) % (order - 1);
            for (coord, b) in bindex.iter_mut().enumerate() {
                *b = min
                    + TETRA_LINEAR_VERTICES[edge[0]][coord] * (order - 1 - offset)
                    + TETRA_LINEAR_VERTICES[edge[1]][coord] * (1 + offset);
            }
        } else {
            let face_size = (order - 2) * (order - 1) / 2;
            let index = index - 4 - 6 * (order - 1);
            let face = index / face_size;
            let projected = VtkLagrangeTriangle.barycentric_index(index % face_size, order - 3);
            for (coord, p) in TETRA_FACE_BCOORDS[face].iter().zip(&projected) {
                bindex[*coord] = min + 1 + p;
            }
            bindex[TETRA_FACE_MIN_COORD[face]] = min;
        }
        bindex
    }
}

/// Node numbering of `vtkLagrangeQuadrilateral`
#[derive(Debug, Default, Clone, Copy)]
pub struct VtkLagrangeQuadrilateral;

impl TensorIndexing for VtkLagrangeQuadrilateral {
    fn point_index_from_ijk(&self, ijk: &[usize], orders: &[usize]) -> Option<usize> {
        let [i, j]: [usize; 2] = ijk.try_into().ok()?;
        let [o0, o1]: [usize; 2] = orders.try_into().ok()?;
        if o0 == 0 || o1 == 0 || i > o0 || j > o1 {
            return None;
        }
        let ibdy = i == 0 || i == o0;
        let jbdy = j == 0 || j == o1;
        let nbdy = ibdy as usize + jbdy as usize;

        if nbdy == 2 {
            return Some(quad_vertex(i != 0, j != 0));
        }

        let mut offset = 4;
        if nbdy == 1 {
            if !ibdy {
                return Some(offset + (i - 1) + (if j != 0 { o0 - 1 + o1 - 1 } else { 0 }));
            }
            return Some(
                offset + (j - 1) + (if i != 0 { o0 - 1 } else { 2 * (o0 - 1) + o1 - 1 }),
            );
        }

        offset += 2 * (o0 - 1 + o1 - 1);
        Some(offset + (i - 1) + (o0 - 1) * (j - 1))
    }
}

/// The number of the vertex of a quadrilateral at the given end of each axis
fn quad_vertex(i_end: bool, j_end: bool) -> usize {
    match (i_end, j_end) {
        (false, false) => 0,
        (true, false) => 1,
        (true, true) => 2,
        (false, true) => 3,
    }
}

/// Node numbering of `vtkLagrangeHexahedron`
#[derive(Debug, Default, Clone, Copy)]
pub struct VtkLagrangeHexahedron;

impl TensorIndexing for VtkLagrangeHexahedron {
    fn point_index_from_ijk(&self, ijk: &[usize], orders: &[usize]) -> Option<usize> {
        let [i, j, k]: [usize; 3] = ijk.try_into().ok()?;
        let [o0, o1, o2]: [usize; 3] = orders.try_into().ok()?;
        if o0 == 0 || o1 == 0 || o2 == 0 || i > o0 || j > o1 || k > o2 {
            return None;
        }
        let ibdy = i == 0 || i == o0;
        let jbdy = j == 0 || j == o1;
        let kbdy = k == 0 || k == o2;
        let nbdy = ibdy as usize + jbdy as usize + kbdy as usize;

        if nbdy == 3 {
            return Some(quad_vertex(i != 0, j != 0) + (if k != 0 { 4 } else { 0 }));
        }

        let mut offset = 8;
        if nbdy == 2 {
            let layer = if k != 0 { 2 * (o0 - 1 + o1 - 1) } else { 0 };
            if !ibdy {
                return Some(offset + (i - 1) + (if j != 0 { o0 - 1 + o1 - 1 } else { 0 }) + layer);
            }
            if !jbdy {
                return Some(
                    offset
                        + (j - 1)
                        + (if i != 0 { o0 - 1 } else { 2 * (o0 - 1) + o1 - 1 })
                        + layer,
                );
            }
            offset += 4 * (o0 - 1) + 4 * (o1 - 1);
            return Some(offset + (k - 1) + (o2 - 1) * quad_vertex(i != 0, j != 0));
        }

        offset += 4 * (o0 - 1 + o1 - 1 + o2 - 1);
        if nbdy == 1 {
            if ibdy {
                return Some(
                    offset + (j - 1) + (o1 - 1) * (k - 1)
                        + (if i != 0 { (o1 - 1) * (o2 - 1) } else { 0 }),
                );
            }
            offset += 2 * (o1 - 1) * (o2 - 1);
            if jbdy {
                return Some(
                    offset + (i - 1) + (o0 - 1) * (k - 1)
                        + (if j != 0 { (o2 - 1) * (o0 - 1) } else { 0 }),
                );
            }
            offset += 2 * (o2 - 1) * (o0 - 1);
            return Some(
                offset + (i - 1) + (o0 - 1) * (j - 1)
                    + (if k != 0 { (o0 - 1) * (o1 - 1) } else { 0 }),
            );
        }

        offset += 2 * ((o1 - 1) * (o2 - 1) + (o2 - 1) * (o0 - 1) + (o0 - 1) * (o1 - 1));
        Some(offset + (i - 1) + (o0 - 1) * ((j - 1) + (o1 - 1) * (k - 1)))
    }
}

/// Node numbering of `vtkLagrangeWedge`
///
/// The first two entries of `orders` are the order of the triangular
/// cross-section and must be equal. The third entry is the order of the
/// extrusion.
#[derive(Debug, Default, Clone, Copy)]
pub struct VtkLagrangeWedge;

/// The position of the face node `(i, j)` among the face nodes of a triangle
///
/// Face nodes are numbered row by row in `j`.
fn triangle_face_offset(order: usize, i: usize, j: usize) -> usize {
    (j - 1) * (order - 1) - (j - 1) * j / 2 + (i - 1)
}

impl TensorIndexing for VtkLagrangeWedge {
    fn point_index_from_ijk(&self, ijk: &[usize], orders: &[usize]) -> Option<usize> {
        let [i, j, k]: [usize; 3] = ijk.try_into().ok()?;
        let [rs, rs1, t]: [usize; 3] = orders.try_into().ok()?;
        if rs != rs1 || rs == 0 || t == 0 || i + j > rs || k > t {
            return None;
        }
        let rm1 = rs - 1;
        let tm1 = t - 1;
        let ibdy = i == 0;
        let jbdy = j == 0;
        let ijbdy = i + j == rs;
        let kbdy = k == 0 || k == t;
        let nbdy = ibdy as usize + jbdy as usize + ijbdy as usize + kbdy as usize;

        let corner = || {
            if ibdy && jbdy {
                0
            } else if jbdy && ijbdy {
                1
            } else {
                2
            }
        };

        if nbdy == 3 {
            return Some(corner() + (if k != 0 { 3 } else { 0 }));
        }

        let mut offset = 6;
        if nbdy == 2 {
            if !kbdy {
                offset += 6 * rm1;
                return Some(offset + (k - 1) + corner() * tm1);
            }
            if k == t {
                offset += 3 * rm1;
            }
            if jbdy {
                return Some(offset + i - 1);
            }
            offset += rm1;
            if ijbdy {
                return Some(offset + j - 1);
            }
            offset += rm1;
            return Some(offset + (rs - j - 1));
        }

        offset += 6 * rm1 + 3 * tm1;
        let ntfdof = if rs > 2 { (rs - 2) * rm1 / 2 } else { 0 };
        let nqfdof = rm1 * tm1;
        if nbdy == 1 {
            if kbdy {
                if k > 0 {
                    offset += ntfdof;
                }
                return Some(offset + triangle_face_offset(rs, i, j));
            }
            offset += 2 * ntfdof;
            if jbdy {
                return Some(offset + (i - 1) + rm1 * (k - 1));
            }
            offset += nqfdof;
            if ijbdy {
                return Some(offset + (rs - i - 1) + rm1 * (k - 1));
            }
            offset += nqfdof;
            return Some(offset + (j - 1) + rm1 * (k - 1));
        }

        offset += 2 * ntfdof + 3 * nqfdof;
        Some(offset + triangle_face_offset(rs, i, j) + ntfdof * (k - 1))
    }
}
