//! Query module - matching and aggregation over record sequences
//!
//! Provides:
//! - filter: category queries (any-of, all-of) and the A-but-not-B diff
//! - counts: corpus category counting and the last-computed counts store
//! - api: the command handlers wiring corpus reading to rendering

pub mod api;
pub mod counts;
pub mod filter;
