#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use blockrate_core::compare::{render_rate_summary, BlockRate};
use blockrate_core::options::CompareOptions;
use common::{block_with_x, container_block, roles_block};

#[test]
fn test_summary_lists_changed_items() {
    let left = block_with_x(1);
    let right = block_with_x(2);
    let record = BlockRate::compute(Some(&left), Some(&right), &CompareOptions::default())
        .unwrap()
        .to_record()
        .unwrap();

    let summary = render_rate_summary(&record);
    assert!(summary.starts_with("## Block `interfaceContainerBlock`"));
    assert!(summary.contains("**Status**: Changed"));
    assert!(summary.contains("**Total rate**: 87%"));
    assert!(summary.contains("| 100% | 50% | 100% | 100% | 100% |"));
    assert!(summary.contains("- Changed `x` (0%)"));
}

#[test]
fn test_summary_for_identical_blocks() {
    let block = container_block(0);
    let record = BlockRate::compute(Some(&block), Some(&block), &CompareOptions::default())
        .unwrap()
        .to_record()
        .unwrap();

    let summary = render_rate_summary(&record);
    assert!(summary.contains("**Status**: Unchanged"));
    assert!(summary.contains("_No item changes._"));
}

#[test]
fn test_summary_nests_children() {
    let parent = container_block(0);
    let child = roles_block(&["OWNER"]);

    let mut rate =
        BlockRate::compute(Some(&parent), Some(&parent), &CompareOptions::default()).unwrap();
    rate.attach_child(BlockRate::compute(None, Some(&child), &CompareOptions::default()).unwrap());

    let summary = render_rate_summary(&rate.to_record().unwrap());
    assert!(summary.contains("### Block `policyRolesBlock`"));
    assert!(summary.contains("**Total rate**: n/a"));
    assert!(summary.contains("- Added `OWNER` (n/a)"));
}
