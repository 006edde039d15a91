//! Block similarity engine.
//!
//! Rates a pair of sibling-aligned policy blocks and produces itemized,
//! scored comparisons suitable for review screens and reporting layers.
//!
//! ## Entry point
//!
//! ```
//! use blockrate_core::compare::BlockRate;
//! use blockrate_core::model::{Block, Property};
//! use blockrate_core::options::CompareOptions;
//! use serde_json::json;
//!
//! let left = Block::new("interfaceContainerBlock", 0).with_property(Property::new("x", json!(1)));
//! let right = Block::new("interfaceContainerBlock", 0).with_property(Property::new("x", json!(2)));
//! let rate = BlockRate::compute(Some(&left), Some(&right), &CompareOptions::default())?;
//! let summary = blockrate_core::compare::render_rate_summary(&rate.to_record()?);
//! assert!(summary.contains("interfaceContainerBlock"));
//! # Ok::<(), blockrate_core::ExError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical itemized lists and scores.
//! - **Completeness**: every item of both sides appears in exactly one pair.
//! - **Absence**: a block present on one side only lists its contents but has
//!   no applicable score.

pub mod aligner;
pub mod block_rate;
pub mod comparators;
pub mod human_summary;
pub mod rate;
pub mod score;

pub use aligner::{align_by_identity, align_equatable, align_with, Aligned, Equatable};
pub use block_rate::{compute_block_rate, BlockRate, BlockRateRecord, BlockScores};
pub use comparators::{
    ArtifactComparator, Comparators, EventComparator, LeafComparator, PermissionComparator,
    PropertyComparator,
};
pub use human_summary::render_rate_summary;
pub use rate::{ItemRate, ItemRateRecord, Rate};
pub use score::{aggregate_rate, average_rate, Score, Status};
