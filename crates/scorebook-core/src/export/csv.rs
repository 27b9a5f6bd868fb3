//! CSV export: both tables in one file

use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::results::GameRecord;
use crate::stats::PlayerSummaries;

use super::{ensure_not_empty, publish_atomic, GAMES_HEADERS, SUMMARY_HEADERS};

/// Write the game table and the totals/averages table to one UTF-8 CSV
/// file, separated by a single blank row.
///
/// Output is deterministic: identical input produces byte-identical files.
pub fn write_csv(
    records: &[GameRecord],
    summaries: &PlayerSummaries,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    ensure_not_empty(records, "CSV export")?;

    // The two tables have different widths, so the writer must be flexible.
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    writer.write_record(GAMES_HEADERS)?;
    for game in records {
        writer.write_record([game.game_number.to_string(), game.player_scores_line()])?;
    }

    // Blank row separating the two tables
    writer.write_record([""])?;

    writer.write_record(SUMMARY_HEADERS)?;
    for summary in summaries {
        writer.write_record([
            summary.player_name.clone(),
            summary.total_score.to_string(),
            summary.average_score.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    publish_atomic(path, &bytes)?;
    tracing::info!("wrote CSV export to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::results::{PlayerScore, Score};
    use crate::stats::ScoreAnalyzer;

    fn sample_records() -> Vec<GameRecord> {
        vec![
            GameRecord {
                game_number: 1,
                players: vec![
                    PlayerScore {
                        player_name: "Ann".to_string(),
                        result: Score::Int(10),
                    },
                    PlayerScore {
                        player_name: "Bob".to_string(),
                        result: Score::Int(5),
                    },
                ],
            },
            GameRecord {
                game_number: 2,
                players: vec![PlayerScore {
                    player_name: "Ann".to_string(),
                    result: Score::Int(7),
                }],
            },
        ]
    }

    #[test]
    fn csv_contains_both_tables_with_blank_separator() {
        let records = sample_records();
        let summaries = ScoreAnalyzer::summarize(&records);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("game_results.csv");

        write_csv(&records, &summaries, &path).expect("write csv");

        let content = std::fs::read_to_string(&path).expect("read csv");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            [
                "Game Number,Player Scores",
                "1,\"Ann: 10, Bob: 5\"",
                "2,Ann: 7",
                "",
                "Player,Total Score,Average",
                "Ann,17,8.5",
                "Bob,5,5",
            ]
        );
    }

    #[test]
    fn csv_reexport_is_byte_identical() {
        let records = sample_records();
        let summaries = ScoreAnalyzer::summarize(&records);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("game_results.csv");

        write_csv(&records, &summaries, &path).expect("first export");
        let first = std::fs::read(&path).expect("read first");
        write_csv(&records, &summaries, &path).expect("second export");
        let second = std::fs::read(&path).expect("read second");
        assert_eq!(first, second);
    }

    #[test]
    fn csv_overwrites_existing_destination() {
        let records = sample_records();
        let summaries = ScoreAnalyzer::summarize(&records);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("game_results.csv");

        std::fs::write(&path, "stale content").expect("seed destination");
        write_csv(&records, &summaries, &path).expect("write csv");
        let content = std::fs::read_to_string(&path).expect("read csv");
        assert!(content.starts_with("Game Number,Player Scores"));
    }

    #[test]
    fn csv_empty_records_is_refused() {
        let summaries = ScoreAnalyzer::summarize(&[]);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("game_results.csv");

        let err = write_csv(&[], &summaries, &path).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
        assert!(!path.exists());
    }
}
