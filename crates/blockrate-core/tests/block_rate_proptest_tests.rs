//! Property tests for the node comparator: score bounds, determinism and
//! itemized list coverage over randomly generated blocks.

use std::collections::BTreeMap;

use blockrate_core::compare::{BlockRate, Rate, Score};
use blockrate_core::model::{Block, Property};
use blockrate_core::options::CompareOptions;
use proptest::prelude::*;
use serde_json::json;

const ROLES: [&str; 3] = ["OWNER", "AUDITOR", "USER"];
const PATHS: [&str; 4] = ["title", "description", "uiMetaData.type", "options.limit"];

fn block() -> impl Strategy<Value = Block> {
    (
        0usize..3,
        prop::option::of(prop::sample::select(vec!["main", "other"])),
        prop::collection::btree_map(prop::sample::select(PATHS.to_vec()), 0i64..3, 0..4),
        prop::collection::vec(prop::sample::select(ROLES.to_vec()), 0..5),
    )
        .prop_map(|(index, tag, props, roles)| build(index, tag, props, roles))
}

fn build(
    index: usize,
    tag: Option<&str>,
    props: BTreeMap<&str, i64>,
    roles: Vec<&str>,
) -> Block {
    let mut block = Block::new("interfaceContainerBlock", index);
    if let Some(tag) = tag {
        block = block.with_tag(tag);
    }
    for (path, value) in props {
        block = block.with_property(Property::new(path, json!(value)));
    }
    roles
        .into_iter()
        .fold(block, |block, role| block.with_permission(role))
}

/// Two blocks with at least one present
fn pair() -> impl Strategy<Value = (Option<Block>, Option<Block>)> {
    (prop::option::of(block()), prop::option::of(block()))
        .prop_filter("at least one side present", |(l, r)| l.is_some() || r.is_some())
}

const SCORE_NAMES: [&str; 6] = [
    "index",
    "properties",
    "events",
    "permissions",
    "artifacts",
    "total",
];

proptest! {
    #[test]
    fn scores_are_bounded_or_not_applicable((left, right) in pair()) {
        let rate = BlockRate::compute(left.as_ref(), right.as_ref(), &CompareOptions::default())
            .unwrap();
        let both_present = left.is_some() && right.is_some();
        for name in SCORE_NAMES {
            let score = rate.rate_value(name);
            if both_present {
                prop_assert!(matches!(score, Score::Percent(v) if v <= 100), "{} = {:?}", name, score);
            } else {
                prop_assert_eq!(score, Score::NotApplicable);
            }
        }
        prop_assert!((-1..=100).contains(&rate.total_rate().as_i32()));
    }

    #[test]
    fn repeated_rating_is_identical((left, right) in pair()) {
        let options = CompareOptions::default();
        let first = BlockRate::compute(left.as_ref(), right.as_ref(), &options)
            .unwrap()
            .to_record()
            .unwrap();
        let second = BlockRate::compute(left.as_ref(), right.as_ref(), &options)
            .unwrap()
            .to_record()
            .unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn itemized_lists_cover_both_sides((left, right) in pair()) {
        let rate = BlockRate::compute(left.as_ref(), right.as_ref(), &CompareOptions::default())
            .unwrap();

        let count = |block: &Option<Block>, f: fn(&Block) -> usize| block.as_ref().map_or(0, f);

        let left_props = count(&left, |b| b.properties.len());
        let right_props = count(&right, |b| b.properties.len());
        // plus the synthetic tag entry
        prop_assert!(rate.properties().len() >= left_props.max(right_props) + 1);
        prop_assert!(rate.properties().len() <= left_props + right_props + 1);

        let left_roles = count(&left, |b| b.permissions.len());
        let right_roles = count(&right, |b| b.permissions.len());
        prop_assert!(rate.permissions().len() >= left_roles.max(right_roles));
        prop_assert!(rate.permissions().len() <= left_roles + right_roles);

        let listed_left = rate.permissions().iter().filter(|p| p.left().is_some()).count();
        let listed_right = rate.permissions().iter().filter(|p| p.right().is_some()).count();
        prop_assert_eq!(listed_left, left_roles);
        prop_assert_eq!(listed_right, right_roles);
    }
}
