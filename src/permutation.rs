//! Permutations between node lists
//!
//! Two node lists describing the same set of points are matched by sorting both
//! lexicographically and pairing the points at equal sorted positions.
//!
//! Coordinates are compared with
//! `approx::relative_eq!(a, b, epsilon = absolute_tolerance, max_relative = relative_tolerance)`.
//! The default tolerances are `1e-8` (absolute) and `1e-5` (relative).
//!
//! The sort uses the same comparison. Along each axis, the coordinates of both
//! lists are sorted together and split into runs of consecutive values that
//! agree within tolerance. A point is sorted by the rank of the run each of its
//! coordinates falls in, so points that agree within tolerance collate
//! identically in both lists.

use crate::types::{Permutation, RealScalar, ReorderError, Result};
use itertools::izip;
use log::{debug, warn};
use std::cmp::Ordering;

/// Options for matching two node lists
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// Absolute tolerance used when comparing coordinates
    absolute_tolerance: f64,
    /// Relative tolerance used when comparing coordinates
    relative_tolerance: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            absolute_tolerance: 1e-8,
            relative_tolerance: 1e-5,
        }
    }
}

impl MatchOptions {
    /// Absolute tolerance used when comparing coordinates
    pub fn absolute_tolerance(&self) -> f64 {
        self.absolute_tolerance
    }
    /// Relative tolerance used when comparing coordinates
    pub fn relative_tolerance(&self) -> f64 {
        self.relative_tolerance
    }
    /// Set the absolute tolerance
    ///
    /// This must be finite and non-negative.
    pub fn set_absolute_tolerance(&mut self, tol: f64) {
        self.absolute_tolerance = tol;
    }
    /// Set the relative tolerance
    ///
    /// This must be finite and non-negative.
    pub fn set_relative_tolerance(&mut self, tol: f64) {
        self.relative_tolerance = tol;
    }

    fn check(&self) -> Result<()> {
        if [self.absolute_tolerance, self.relative_tolerance]
            .iter()
            .all(|t| t.is_finite() && *t >= 0.0)
        {
            Ok(())
        } else {
            Err(ReorderError::InvalidTolerance)
        }
    }
}

/// Check that every point of a list has dimension `dim` and finite coordinates
fn check_points<T: RealScalar>(points: &[Vec<T>], dim: usize) -> Result<()> {
    for (index, p) in points.iter().enumerate() {
        if p.len() != dim {
            return Err(ReorderError::DimensionMismatch {
                expected: dim,
                found: p.len(),
            });
        }
        if !p.iter().all(|c| c.is_finite()) {
            return Err(ReorderError::NonFiniteCoordinate { index });
        }
    }
    Ok(())
}

/// Sort keys of the points of two lists
///
/// Entry `a` of the key of a point is the rank of its `a`th coordinate among
/// the distinct values along axis `a` of both lists, where consecutive values
/// that agree within tolerance count as one value.
fn sort_keys<T: RealScalar>(
    lists: [&[Vec<T>]; 2],
    dim: usize,
    epsilon: T,
    max_relative: T,
) -> [Vec<Vec<usize>>; 2] {
    let mut keys = lists.map(|list| vec![vec![0; dim]; list.len()]);
    for axis in 0..dim {
        let mut values = lists
            .iter()
            .enumerate()
            .flat_map(|(l, list)| list.iter().enumerate().map(move |(i, p)| (p[axis], l, i)))
            .collect::<Vec<_>>();
        values.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let mut rank = 0;
        for (n, (value, l, i)) in values.iter().enumerate() {
            if n > 0 && !values[n - 1].0.relative_eq(value, epsilon, max_relative) {
                rank += 1;
            }
            keys[*l][*i][axis] = rank;
        }
    }
    keys
}

/// Find the permutation between two lists of the same points
///
/// Returns `perm` such that `list1[x] == list2[perm[x]]` for every `x`.
pub fn invert<T: RealScalar>(list1: &[Vec<T>], list2: &[Vec<T>]) -> Result<Permutation> {
    invert_with_options(list1, list2, &MatchOptions::default())
}

/// Find the permutation between two lists of the same points, using the given tolerances
pub fn invert_with_options<T: RealScalar>(
    list1: &[Vec<T>],
    list2: &[Vec<T>],
    options: &MatchOptions,
) -> Result<Permutation> {
    options.check()?;
    if list1.len() != list2.len() {
        warn!(
            "Cannot match {} nodes with {} nodes",
            list1.len(),
            list2.len()
        );
        return Err(ReorderError::CardinalityMismatch {
            expected: list1.len(),
            found: list2.len(),
        });
    }
    let dim = list1.first().map_or(0, |p| p.len());
    check_points(list1, dim)?;
    check_points(list2, dim)?;

    let epsilon = T::from(options.absolute_tolerance).unwrap();
    let max_relative = T::from(options.relative_tolerance).unwrap();
    let [keys1, keys2] = sort_keys([list1, list2], dim, epsilon, max_relative);

    let mut order1 = (0..list1.len()).collect::<Vec<_>>();
    order1.sort_by(|a, b| keys1[*a].cmp(&keys1[*b]).then(a.cmp(b)));
    let mut order2 = (0..list2.len()).collect::<Vec<_>>();
    order2.sort_by(|a, b| keys2[*a].cmp(&keys2[*b]).then(a.cmp(b)));

    for (position, (i1, i2)) in izip!(&order1, &order2).enumerate() {
        let (p1, p2) = (&list1[*i1], &list2[*i2]);
        if !izip!(p1, p2).all(|(a, b)| a.relative_eq(b, epsilon, max_relative)) {
            warn!(
                "Node {i1} ({p1:?}) of the first list has no counterpart; nearest in sorted order is node {i2} ({p2:?}) of the second list"
            );
            return Err(ReorderError::NoCorrespondence { position });
        }
    }

    let mut perm = vec![0; list1.len()];
    for (i1, i2) in izip!(order1, order2) {
        perm[i1] = i2;
    }
    debug!("Matched {} nodes", perm.len());
    Ok(perm)
}

/// Is `perm` a permutation of `0..perm.len()`?
pub fn is_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    for p in perm {
        match seen.get_mut(*p) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}

/// The inverse of a permutation
pub fn inverse_permutation(perm: &[usize]) -> Result<Permutation> {
    if !is_permutation(perm) {
        return Err(ReorderError::InvalidPermutation);
    }
    let mut inverse = vec![0; perm.len()];
    for (i, p) in perm.iter().enumerate() {
        inverse[*p] = i;
    }
    Ok(inverse)
}

/// Compose two permutations
///
/// If `a[i] == b[first[i]]` and `b[j] == c[second[j]]`, the result `r` satisfies
/// `a[i] == c[r[i]]`.
pub fn compose(first: &[usize], second: &[usize]) -> Result<Permutation> {
    if first.len() != second.len() {
        return Err(ReorderError::CardinalityMismatch {
            expected: first.len(),
            found: second.len(),
        });
    }
    if !is_permutation(first) || !is_permutation(second) {
        return Err(ReorderError::InvalidPermutation);
    }
    Ok(first.iter().map(|i| second[*i]).collect())
}

/// Reorder per-node data
///
/// `data` holds `block_size` consecutive values for each node. Block `i` of
/// the result is block `perm[i]` of `data`, so data stored in the order of the
/// second list passed to [invert] is returned in the order of the first.
pub fn apply_permutation<D: Clone>(
    data: &[D],
    perm: &[usize],
    block_size: usize,
) -> Result<Vec<D>> {
    if data.len() != perm.len() * block_size {
        return Err(ReorderError::CardinalityMismatch {
            expected: perm.len() * block_size,
            found: data.len(),
        });
    }
    if !is_permutation(perm) {
        return Err(ReorderError::InvalidPermutation);
    }
    Ok(perm
        .iter()
        .flat_map(|p| data[p * block_size..(p + 1) * block_size].iter().cloned())
        .collect())
}
