//! Property tests for list alignment: totality, order and determinism.

use blockrate_core::compare::aligner::{align_with, Aligned};
use proptest::prelude::*;

fn shape(pairs: &[Aligned<'_, u8>]) -> Vec<(Option<u8>, Option<u8>)> {
    pairs
        .iter()
        .map(|p| (p.left.copied(), p.right.copied()))
        .collect()
}

// Small value range so duplicates are common
fn items() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..5, 0..12)
}

proptest! {
    #[test]
    fn every_item_appears_exactly_once(left in items(), right in items()) {
        let pairs = align_with(&left, &right, |a, b| a == b);

        let lefts: Vec<u8> = pairs.iter().filter_map(|p| p.left.copied()).collect();
        prop_assert_eq!(&lefts, &left);

        let mut rights: Vec<u8> = pairs.iter().filter_map(|p| p.right.copied()).collect();
        let mut expected = right.clone();
        rights.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(rights, expected);

        prop_assert!(pairs.iter().all(|p| p.left.is_some() || p.right.is_some()));
    }

    #[test]
    fn matched_pairs_satisfy_predicate(left in items(), right in items()) {
        let pairs = align_with(&left, &right, |a, b| a == b);
        for pair in &pairs {
            if let (Some(l), Some(r)) = (pair.left, pair.right) {
                prop_assert_eq!(l, r);
            }
        }
    }

    #[test]
    fn left_items_come_first(left in items(), right in items()) {
        let pairs = align_with(&left, &right, |a, b| a == b);
        prop_assert!(pairs[..left.len()].iter().all(|p| p.left.is_some()));
        prop_assert!(pairs[left.len()..].iter().all(|p| p.left.is_none()));
    }

    #[test]
    fn alignment_is_deterministic(left in items(), right in items()) {
        let first = shape(&align_with(&left, &right, |a, b| a == b));
        let second = shape(&align_with(&left, &right, |a, b| a == b));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn self_alignment_pairs_everything(items in items()) {
        let pairs = align_with(&items, &items, |a, b| a == b);
        prop_assert_eq!(pairs.len(), items.len());
        prop_assert!(pairs.iter().all(|p| p.left.is_some() && p.right.is_some()));
    }
}
