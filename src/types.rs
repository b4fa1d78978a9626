//! Types specific to ndreorder
pub mod cell;

pub use cell::ReferenceCellType;

use approx::RelativeEq;
use std::fmt::Debug;

/// A real scalar type that node coordinates can be stored in
pub trait RealScalar: num::Float + RelativeEq<Epsilon = Self> + Debug + Send + Sync {}

impl<T: num::Float + RelativeEq<Epsilon = T> + Debug + Send + Sync> RealScalar for T {}

/// A list of points on a reference cell
///
/// The position of a point in the list is its node (degree-of-freedom) number.
pub type NodeList<T> = Vec<Vec<T>>;

/// A permutation of `0..N`
///
/// For source nodes `a` and target nodes `b`, `a[i] == b[perm[i]]`.
pub type Permutation = Vec<usize>;

/// The polynomial degree of an element
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Degree {
    /// The same degree in every direction
    Uniform(usize),
    /// One degree per axis of a tensor-product cell
    ///
    /// A prism takes two entries: the degree of its triangular cross-section,
    /// and the degree of the extrusion.
    PerAxis(Vec<usize>),
}

impl Degree {
    /// The degree along each of `naxes` axes
    ///
    /// Returns `None` if this is a per-axis degree with the wrong number of entries.
    pub fn axis_degrees(&self, naxes: usize) -> Option<Vec<usize>> {
        match self {
            Degree::Uniform(d) => Some(vec![*d; naxes]),
            Degree::PerAxis(d) => {
                if d.len() == naxes {
                    Some(d.clone())
                } else {
                    None
                }
            }
        }
    }

    /// The highest degree in any direction
    pub fn max(&self) -> usize {
        match self {
            Degree::Uniform(d) => *d,
            Degree::PerAxis(d) => d.iter().copied().max().unwrap_or(0),
        }
    }

    /// Is the degree the same in every direction?
    pub fn is_uniform(&self) -> bool {
        match self {
            Degree::Uniform(_) => true,
            Degree::PerAxis(d) => d.windows(2).all(|w| w[0] == w[1]),
        }
    }
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Degree::Uniform(d) => write!(f, "{d}"),
            Degree::PerAxis(d) => write!(f, "{d:?}"),
        }
    }
}

/// Errors raised while computing a reordering
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ReorderError {
    /// The two node lists have different lengths
    #[error("Node counts differ: expected {expected} nodes, found {found}")]
    CardinalityMismatch {
        /// Length of the first list
        expected: usize,
        /// Length of the second list
        found: usize,
    },
    /// The two node lists do not contain the same points
    #[error("Unable to establish a permutation between the node lists (first disagreement at sorted position {position})")]
    NoCorrespondence {
        /// Position in sorted order of the first pair of points that disagree
        position: usize,
    },
    /// A hexahedron with different degrees along its axes
    #[error("VTK hexahedra require a uniform degree, got {0:?}")]
    NonUniformDegree(Vec<usize>),
    /// The element is defined on a different cell from the one requested
    #[error("Expected an element on a {expected}, found one on a {found}")]
    CellMismatch {
        /// The cell the reorder function handles
        expected: ReferenceCellType,
        /// The cell of the element
        found: ReferenceCellType,
    },
    /// The degree has the wrong shape or value for the cell
    #[error("Degree {degree} is not supported on a {cell}")]
    InvalidDegree {
        /// The cell type
        cell: ReferenceCellType,
        /// The degree
        degree: Degree,
    },
    /// Points in a node list have different dimensions
    #[error("Point dimensions differ: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the first point
        expected: usize,
        /// Dimension of the offending point
        found: usize,
    },
    /// A node has a NaN or infinite coordinate
    #[error("Node {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// The node index
        index: usize,
    },
    /// The indexing scheme does not map multi-indices one-to-one onto node numbers
    #[error("Indexing does not map multi-index {0:?} to a unique node")]
    IndexingFailure(Vec<usize>),
    /// A list of integers is not a permutation
    #[error("Not a permutation")]
    InvalidPermutation,
    /// A matching tolerance is negative, infinite or NaN
    #[error("Tolerances must be finite and non-negative")]
    InvalidTolerance,
}

/// Result type
pub type Result<T> = std::result::Result<T, ReorderError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_axis_degrees() {
        assert_eq!(Degree::Uniform(3).axis_degrees(2), Some(vec![3, 3]));
        assert_eq!(Degree::PerAxis(vec![1, 2]).axis_degrees(2), Some(vec![1, 2]));
        assert_eq!(Degree::PerAxis(vec![1, 2]).axis_degrees(3), None);
    }

    #[test]
    fn test_uniform() {
        assert!(Degree::Uniform(4).is_uniform());
        assert!(Degree::PerAxis(vec![2, 2, 2]).is_uniform());
        assert!(!Degree::PerAxis(vec![2, 2, 3]).is_uniform());
        assert_eq!(Degree::PerAxis(vec![2, 2, 3]).max(), 3);
    }

    #[test]
    fn test_error_messages() {
        let e = ReorderError::CardinalityMismatch {
            expected: 4,
            found: 3,
        };
        assert_eq!(
            e.to_string(),
            "Node counts differ: expected 4 nodes, found 3"
        );
        let e = ReorderError::InvalidDegree {
            cell: ReferenceCellType::Triangle,
            degree: Degree::PerAxis(vec![1, 2]),
        };
        assert_eq!(e.to_string(), "Degree [1, 2] is not supported on a triangle");
    }
}
