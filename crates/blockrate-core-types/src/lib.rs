//! Core types shared across blockrate facilities
//!
//! This crate holds the canonical schema constants used by both the error
//! facility and the logging facility, so that emitted field names and event
//! names stay identical across crates.

pub mod schema;
