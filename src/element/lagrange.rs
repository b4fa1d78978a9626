//! Lagrange elements
//!
//! The nodes of a Lagrange element are equispaced points on the reference cell.
//! They are numbered entity by entity: first the vertices, then the points
//! inside each edge, then the points inside each face, then the points inside
//! the cell, following the sub-entity numbering in [reference_cell].

use crate::element::reference_cell;
use crate::traits::{ElementFamily, NodalElement};
use crate::types::{Degree, NodeList, RealScalar, ReferenceCellType, ReorderError, Result};
use std::marker::PhantomData;

type EntityDofs = [Vec<Vec<usize>>; 4];

/// A Lagrange element
#[derive(Debug, Clone)]
pub struct LagrangeElement<T: RealScalar> {
    cell_type: ReferenceCellType,
    degree: Degree,
    axis_degrees: Vec<usize>,
    points: NodeList<T>,
    entity_dofs: EntityDofs,
}

impl<T: RealScalar> LagrangeElement<T> {
    /// Create a Lagrange element
    ///
    /// Simplices take a single degree. Quadrilaterals and hexahedra can take
    /// one degree per axis, and prisms can take a degree for the triangular
    /// cross-section and a degree for the extrusion.
    pub fn new(cell_type: ReferenceCellType, degree: Degree) -> Result<Self> {
        let invalid = || ReorderError::InvalidDegree {
            cell: cell_type,
            degree: degree.clone(),
        };
        let axis_degrees = degree
            .axis_degrees(cell_type.axis_count().max(1))
            .ok_or_else(invalid)?;

        let tdim = reference_cell::dim(cell_type);
        let entity_counts = reference_cell::entity_counts(cell_type);
        let mut entity_dofs: EntityDofs = [vec![], vec![], vec![], vec![]];
        for (d, count) in entity_counts.iter().enumerate() {
            entity_dofs[d] = vec![vec![]; *count];
        }

        let points = if axis_degrees.iter().all(|d| *d == 0) {
            entity_dofs[tdim][0].push(0);
            vec![reference_cell::midpoint::<T>(cell_type)]
        } else if axis_degrees.contains(&0) || cell_type == ReferenceCellType::Point {
            return Err(invalid());
        } else {
            lagrange_points(cell_type, &axis_degrees, &mut entity_dofs)
        };

        Ok(Self {
            cell_type,
            degree,
            axis_degrees,
            points,
            entity_dofs,
        })
    }

    /// The degree along each axis
    pub fn axis_degrees(&self) -> &[usize] {
        &self.axis_degrees
    }
}

impl<T: RealScalar> NodalElement for LagrangeElement<T> {
    type T = T;

    fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }

    fn degree(&self) -> &Degree {
        &self.degree
    }

    fn dim(&self) -> usize {
        self.points.len()
    }

    fn node_coordinates(&self) -> NodeList<T> {
        self.points.clone()
    }

    fn entity_dofs(&self, entity_dim: usize, entity_number: usize) -> Option<&[usize]> {
        self.entity_dofs
            .get(entity_dim)?
            .get(entity_number)
            .map(|dofs| dofs.as_slice())
    }
}

/// The degree used along the direction from vertex `a` to vertex `b`
fn direction_degree<T: RealScalar>(
    cell_type: ReferenceCellType,
    axis_degrees: &[usize],
    a: &[T],
    b: &[T],
) -> usize {
    match cell_type {
        ReferenceCellType::Quadrilateral | ReferenceCellType::Hexahedron => {
            let axis = a.iter().zip(b).position(|(i, j)| i != j).unwrap_or(0);
            axis_degrees[axis]
        }
        ReferenceCellType::Prism => {
            if a[2] != b[2] {
                axis_degrees[1]
            } else {
                axis_degrees[0]
            }
        }
        _ => axis_degrees[0],
    }
}

/// Points in the interior of a sub-entity
///
/// The sub-entity is parametrised as `origin + sum_i t_i * axes[i]`. `degrees`
/// holds the degree along the triangular part (simplices and prisms) or along
/// each axis (quadrilaterals and hexahedra) followed, for prisms, by the degree
/// of the extrusion.
fn entity_points<T: RealScalar>(
    entity_type: ReferenceCellType,
    origin: &[T],
    axes: &[Vec<T>],
    degrees: &[usize],
) -> NodeList<T> {
    let point = |indices: &[(usize, usize)]| -> Vec<T> {
        let mut pt = origin.to_vec();
        for ((i, p), axis) in indices.iter().zip(axes) {
            let t = T::from(*i).unwrap() / T::from(*p).unwrap();
            for (c, a) in pt.iter_mut().zip(axis) {
                *c = *c + t * *a;
            }
        }
        pt
    };

    let mut pts = vec![];
    match entity_type {
        ReferenceCellType::Interval => {
            let p = degrees[0];
            for i in 1..p {
                pts.push(point(&[(i, p)]));
            }
        }
        ReferenceCellType::Triangle => {
            let p = degrees[0];
            for i0 in 1..p {
                for i1 in 1..p - i0 {
                    pts.push(point(&[(i0, p), (i1, p)]));
                }
            }
        }
        ReferenceCellType::Quadrilateral => {
            for i0 in 1..degrees[0] {
                for i1 in 1..degrees[1] {
                    pts.push(point(&[(i0, degrees[0]), (i1, degrees[1])]));
                }
            }
        }
        ReferenceCellType::Tetrahedron => {
            let p = degrees[0];
            for i0 in 1..p {
                for i1 in 1..p - i0 {
                    for i2 in 1..p - i0 - i1 {
                        pts.push(point(&[(i0, p), (i1, p), (i2, p)]));
                    }
                }
            }
        }
        ReferenceCellType::Hexahedron => {
            for i0 in 1..degrees[0] {
                for i1 in 1..degrees[1] {
                    for i2 in 1..degrees[2] {
                        pts.push(point(&[
                            (i0, degrees[0]),
                            (i1, degrees[1]),
                            (i2, degrees[2]),
                        ]));
                    }
                }
            }
        }
        ReferenceCellType::Prism => {
            let p = degrees[0];
            for i0 in 1..p {
                for i1 in 1..p - i0 {
                    for i2 in 1..degrees[1] {
                        pts.push(point(&[(i0, p), (i1, p), (i2, degrees[1])]));
                    }
                }
            }
        }
        ReferenceCellType::Point => {}
    }
    pts
}

/// Compute the nodes of an element of degree at least 1, filling in the entity DOFs
fn lagrange_points<T: RealScalar>(
    cell_type: ReferenceCellType,
    axis_degrees: &[usize],
    entity_dofs: &mut EntityDofs,
) -> NodeList<T> {
    let tdim = reference_cell::dim(cell_type);
    let vertices = reference_cell::vertices::<T>(cell_type);
    let axis = |a: usize, b: usize| -> Vec<T> {
        vertices[b]
            .iter()
            .zip(&vertices[a])
            .map(|(vb, va)| *vb - *va)
            .collect()
    };
    let dir_degree =
        |a: usize, b: usize| direction_degree(cell_type, axis_degrees, &vertices[a], &vertices[b]);

    let mut points = vec![];
    let mut push = |pts: NodeList<T>, dofs: &mut Vec<usize>| {
        for p in pts {
            dofs.push(points.len());
            points.push(p);
        }
    };

    for (v, vertex) in vertices.iter().enumerate() {
        push(vec![vertex.clone()], &mut entity_dofs[0][v]);
    }

    for (e, edge) in reference_cell::edges(cell_type).iter().enumerate() {
        let pts = entity_points(
            ReferenceCellType::Interval,
            &vertices[edge[0]],
            &[axis(edge[0], edge[1])],
            &[dir_degree(edge[0], edge[1])],
        );
        push(pts, &mut entity_dofs[1][e]);
    }

    if tdim >= 2 {
        let faces = reference_cell::faces(cell_type);
        for (f, face_type) in reference_cell::entity_types(cell_type)[2]
            .iter()
            .enumerate()
        {
            let face = &faces[f];
            let degrees = match face_type {
                ReferenceCellType::Triangle => vec![dir_degree(face[0], face[1])],
                _ => vec![dir_degree(face[0], face[1]), dir_degree(face[0], face[2])],
            };
            let pts = entity_points(
                *face_type,
                &vertices[face[0]],
                &[axis(face[0], face[1]), axis(face[0], face[2])],
                &degrees,
            );
            push(pts, &mut entity_dofs[2][f]);
        }
    }

    if tdim == 3 {
        let third = match cell_type {
            ReferenceCellType::Hexahedron => 4,
            _ => 3,
        };
        let pts = entity_points(
            cell_type,
            &vertices[0],
            &[axis(0, 1), axis(0, 2), axis(0, third)],
            axis_degrees,
        );
        push(pts, &mut entity_dofs[3][0]);
    }

    points
}

/// Lagrange element family
#[derive(Debug, Clone)]
pub struct LagrangeElementFamily<T: RealScalar> {
    degree: Degree,
    _t: PhantomData<T>,
}

impl<T: RealScalar> LagrangeElementFamily<T> {
    /// Create new family
    pub fn new(degree: Degree) -> Self {
        Self {
            degree,
            _t: PhantomData,
        }
    }
}

impl<T: RealScalar> ElementFamily for LagrangeElementFamily<T> {
    type FiniteElement = LagrangeElement<T>;
    fn element(&self, cell_type: ReferenceCellType) -> Result<LagrangeElement<T>> {
        LagrangeElement::new(cell_type, self.degree.clone())
    }
}
