//! # scorebook-core
//!
//! Core library for collecting per-game score records and exporting
//! per-game and per-player statistics.
//!
//! This crate provides the foundational functionality for:
//! - Loading game results from a JSON document into an immutable store
//! - Deriving per-player totals and averages in first-appearance order
//! - Exporting a two-sheet spreadsheet workbook, a two-table CSV file and
//!   a per-player line chart image
//! - Generating bounded thumbnails for dropped or chosen image files
//!
//! ## Modules
//!
//! - [`results`] - Game record data model and the results store
//! - [`stats`] - Per-player summaries and the analyzer
//! - [`export`] - Workbook, CSV and chart exporters
//! - [`config`] - Default export destinations
//! - [`intake`] - Drag-and-drop payload adapter
//! - [`media`] - Image thumbnailing
//! - [`error`] - Error types and Result alias
//!
//! ## Example
//!
//! ```no_run
//! use scorebook_core::{ResultsStore, ScoreAnalyzer};
//!
//! let store = ResultsStore::load("result.json").expect("load results");
//! let summaries = ScoreAnalyzer::summarize(store.records());
//! for summary in &summaries {
//!     println!("{}: {}", summary.player_name, summary.total_score);
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod export;
pub mod intake;
pub mod media;
pub mod results;
pub mod stats;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Results data model
pub use results::{GameRecord, PlayerScore, ResultsStore, Score};

// Statistics
pub use stats::{PlayerSummaries, PlayerSummary, ScoreAnalyzer};

// Export
pub use export::{write_chart, write_csv, write_workbook};

// Configuration
pub use config::Config;

// Media
pub use media::{ThumbnailResult, Thumbnailer};
