//! Per-player statistics derived from game records
//!
//! Summaries are recomputed on every export request and never cached
//! across calls.

mod analyzer;
mod model;

pub use analyzer::ScoreAnalyzer;
pub use model::{PlayerSummaries, PlayerSummary};
