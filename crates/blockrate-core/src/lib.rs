//! Blockrate Core - similarity scoring for policy blocks
//!
//! This crate compares two versions of a policy block and reports how similar
//! they are, including:
//! - Itemized pairing of properties, events, permissions and artifacts
//! - Per-item, per-category and aggregate similarity scores
//! - Pluggable leaf comparators driven by comparison options
//! - Serializable rate records and Markdown summaries
//!
//! Tree walking is left to the caller: pair sibling blocks, rate each pair,
//! and attach child rates to their parent.

pub mod compare;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod options;

pub use blockrate_core_types::schema;

// Re-export commonly used types
pub use compare::{compute_block_rate, BlockRate, Comparators, ItemRate, Rate, Score, Status};
pub use errors::{CompareError, ExError, ExErrorKind, Result};
pub use model::{Artifact, Block, BlockModel, Event, PermissionId, Property};
pub use options::CompareOptions;
