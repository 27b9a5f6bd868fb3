//! Export of game records and player summaries
//!
//! Three exporters share the fixed sheet/column names and an atomic
//! publish discipline: content is rendered in full, written to a temporary
//! file in the destination directory, then persisted over the destination.
//! A failed export never leaves a truncated file behind.
//!
//! Every exporter refuses an empty record sequence with
//! [`Error::EmptyInput`](crate::Error::EmptyInput) instead of producing an
//! empty artifact.

mod chart;
mod csv;
mod workbook;

pub use chart::write_chart;
pub use csv::write_csv;
pub use workbook::write_workbook;

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::results::GameRecord;

/// Sheet 1 / table 1 name
pub const GAMES_SHEET: &str = "Game Results";
/// Sheet 2 / table 2 name
pub const SUMMARY_SHEET: &str = "Totals and Averages";
/// Sheet 1 / table 1 column headers
pub const GAMES_HEADERS: [&str; 2] = ["Game Number", "Player Scores"];
/// Sheet 2 / table 2 column headers
pub const SUMMARY_HEADERS: [&str; 3] = ["Player", "Total Score", "Average"];

fn ensure_not_empty(records: &[GameRecord], operation: &str) -> Result<()> {
    if records.is_empty() {
        return Err(Error::EmptyInput(operation.to_string()));
    }
    Ok(())
}

/// Directory the destination lives in; temp files go there so the final
/// rename stays on one filesystem.
fn dest_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write rendered bytes to `path` atomically (temp file + rename)
fn publish_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dest_dir(path))?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
