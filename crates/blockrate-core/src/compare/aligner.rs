//! Greedy, order-preserving list alignment.
//!
//! Pairs the items of two ordered collections under an equality relation.
//! Every left item keeps its position; each right item, in order, is attached
//! to the first still-unmatched left item it equals, or appended on its own.
//! The result is deterministic but not a minimal diff.

use std::sync::Arc;

/// Capability for items that know how to compare themselves
///
/// Items without this capability can still be aligned by identity with
/// [`align_by_identity`].
pub trait Equatable {
    fn equal(&self, other: &Self) -> bool;
}

/// One output slot of an alignment; never empty on both sides
#[derive(Debug, PartialEq)]
pub struct Aligned<'a, T> {
    pub left: Option<&'a T>,
    pub right: Option<&'a T>,
}

impl<T> Clone for Aligned<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Aligned<'_, T> {}

/// Align two lists with an explicit equality predicate
///
/// `eq` is always called as `eq(left_item, right_item)`.
///
/// # Example
///
/// ```
/// use blockrate_core::compare::aligner::align_with;
///
/// let left = [1, 2, 3];
/// let right = [3, 4];
/// let pairs = align_with(&left, &right, |a, b| a == b);
/// let shape: Vec<_> = pairs.iter().map(|p| (p.left.copied(), p.right.copied())).collect();
/// assert_eq!(
///     shape,
///     vec![(Some(1), None), (Some(2), None), (Some(3), Some(3)), (None, Some(4))]
/// );
/// ```
pub fn align_with<'a, T, F>(left: &'a [T], right: &'a [T], mut eq: F) -> Vec<Aligned<'a, T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut pairs: Vec<Aligned<'a, T>> = left
        .iter()
        .map(|item| Aligned {
            left: Some(item),
            right: None,
        })
        .collect();

    for item in right {
        let slot = pairs.iter_mut().find(|pair| match (pair.left, pair.right) {
            (Some(l), None) => eq(l, item),
            _ => false,
        });
        match slot {
            Some(pair) => pair.right = Some(item),
            None => pairs.push(Aligned {
                left: None,
                right: Some(item),
            }),
        }
    }

    pairs
}

/// Align items through their own [`Equatable`] capability
pub fn align_equatable<'a, T>(left: &'a [T], right: &'a [T]) -> Vec<Aligned<'a, T>>
where
    T: Equatable,
{
    align_with(left, right, |a, b| a.equal(b))
}

/// Align shared items by pointer identity
///
/// Fallback for item types with no equality capability. Two items match only
/// if they are the same allocation; value-equal copies are reported as one
/// removal plus one addition.
pub fn align_by_identity<'a, T>(
    left: &'a [Arc<T>],
    right: &'a [Arc<T>],
) -> Vec<Aligned<'a, Arc<T>>> {
    align_with(left, right, |a, b| Arc::ptr_eq(a, b))
}
