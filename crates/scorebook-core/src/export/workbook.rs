//! Spreadsheet (xlsx) export

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use crate::error::Result;
use crate::results::GameRecord;
use crate::stats::PlayerSummaries;

use super::{
    ensure_not_empty, publish_atomic, GAMES_HEADERS, GAMES_SHEET, SUMMARY_HEADERS, SUMMARY_SHEET,
};

/// Write the two-sheet workbook: per-game results and per-player totals.
///
/// Sheet names and column headers are fixed literals; header rows are bold
/// and centered. An existing destination is overwritten unconditionally.
pub fn write_workbook(
    records: &[GameRecord],
    summaries: &PlayerSummaries,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    ensure_not_empty(records, "spreadsheet export")?;

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold().set_align(FormatAlign::Center);

    let games = workbook.add_worksheet();
    games.set_name(GAMES_SHEET)?;
    for (col, title) in GAMES_HEADERS.iter().enumerate() {
        games.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (i, game) in records.iter().enumerate() {
        let row = i as u32 + 1;
        games.write_number(row, 0, game.game_number as f64)?;
        games.write_string(row, 1, game.player_scores_line())?;
    }
    // The joined score line needs room
    games.set_column_width(1, 50)?;

    let totals = workbook.add_worksheet();
    totals.set_name(SUMMARY_SHEET)?;
    for (col, title) in SUMMARY_HEADERS.iter().enumerate() {
        totals.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (i, summary) in summaries.iter().enumerate() {
        let row = i as u32 + 1;
        totals.write_string(row, 0, &summary.player_name)?;
        totals.write_number(row, 1, summary.total_score.as_f64())?;
        totals.write_number(row, 2, summary.average_score)?;
    }

    let bytes = workbook.save_to_buffer()?;
    publish_atomic(path, &bytes)?;
    tracing::info!("wrote workbook export to {}", path.display());
    Ok(())
}
