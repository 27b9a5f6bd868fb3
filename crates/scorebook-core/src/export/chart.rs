//! Line-chart export of per-player score progressions

use std::collections::HashMap;
use std::path::Path;

use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::results::GameRecord;

use super::dest_dir;

/// Fixed raster size of the rendered chart
const CHART_SIZE: (u32, u32) = (1000, 600);

fn to_chart_err<E: std::error::Error>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// Collect per-player score sequences in first-appearance order.
///
/// Each player's x-axis is dense over their own appearances: games the
/// player is absent from are skipped, not zero-filled.
fn player_series(records: &[GameRecord]) -> Vec<(String, Vec<f64>)> {
    let mut order: Vec<String> = Vec::new();
    let mut series: HashMap<String, Vec<f64>> = HashMap::new();

    for game in records {
        for player in &game.players {
            series
                .entry(player.player_name.clone())
                .or_insert_with(|| {
                    order.push(player.player_name.clone());
                    Vec::new()
                })
                .push(player.result.as_f64());
        }
    }

    order
        .into_iter()
        .filter_map(|name| series.remove(&name).map(|scores| (name, scores)))
        .collect()
}

/// Render one marker-decorated line per player to a PNG at `path`.
///
/// x is the 1-based index of the player's own games, y the score. Fails
/// with [`Error::EmptyInput`] before touching the backend when there is
/// nothing to plot.
pub fn write_chart(records: &[GameRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    super::ensure_not_empty(records, "chart export")?;

    let series = player_series(records);
    if series.is_empty() {
        // Records exist but none carries a player score
        return Err(Error::EmptyInput("chart export".to_string()));
    }

    let max_games = series.iter().map(|(_, s)| s.len()).max().unwrap_or(1);
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, scores) in &series {
        for &score in scores {
            y_min = y_min.min(score);
            y_max = y_max.max(score);
        }
    }
    // Keep the axis ranges valid for single-point and single-value data
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let y_pad = (y_max - y_min) * 0.05;
    let x_max = max_games.max(2) as f64;

    // Render into a temp file next to the destination, then persist, so a
    // backend failure cannot truncate an existing chart.
    let tmp = tempfile::Builder::new()
        .suffix(".png")
        .tempfile_in(dest_dir(path))?;
    {
        let root = BitMapBackend::new(tmp.path(), CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Player Results", ("sans-serif", 28))
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 45)
            .build_cartesian_2d(1f64..x_max, (y_min - y_pad)..(y_max + y_pad))
            .map_err(to_chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Game index")
            .y_desc("Score")
            .draw()
            .map_err(to_chart_err)?;

        for (i, (name, scores)) in series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            chart
                .draw_series(
                    LineSeries::new(
                        scores.iter().enumerate().map(|(j, &s)| ((j + 1) as f64, s)),
                        color.stroke_width(2),
                    )
                    .point_size(3),
                )
                .map_err(to_chart_err)?
                .label(name.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(to_chart_err)?;

        root.present().map_err(to_chart_err)?;
    }
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    tracing::info!("wrote chart to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{PlayerScore, Score};

    fn score(name: &str, value: i64) -> PlayerScore {
        PlayerScore {
            player_name: name.to_string(),
            result: Score::Int(value),
        }
    }

    #[test]
    fn series_are_dense_per_player_and_ordered_by_first_appearance() {
        let records = vec![
            GameRecord {
                game_number: 1,
                players: vec![score("Ann", 10), score("Bob", 5)],
            },
            GameRecord {
                game_number: 2,
                players: vec![score("Ann", 7)],
            },
            GameRecord {
                game_number: 3,
                players: vec![score("Bob", 9)],
            },
        ];

        let series = player_series(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "Ann");
        assert_eq!(series[0].1, [10.0, 7.0]);
        // Bob skips game 2; his series stays dense over his own games
        assert_eq!(series[1].0, "Bob");
        assert_eq!(series[1].1, [5.0, 9.0]);
    }

    #[test]
    fn chart_empty_records_is_refused_before_rendering() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("player_results.png");

        let err = write_chart(&[], &path).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
        assert!(!path.exists());
    }

    #[test]
    fn chart_records_without_scores_are_refused() {
        let records = vec![GameRecord {
            game_number: 1,
            players: Vec::new(),
        }];
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("player_results.png");

        let err = write_chart(&records, &path).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
        assert!(!path.exists());
    }

    #[test]
    fn chart_renders_a_png_file() {
        let records = vec![
            GameRecord {
                game_number: 1,
                players: vec![score("Ann", 10), score("Bob", 5)],
            },
            GameRecord {
                game_number: 2,
                players: vec![score("Ann", 7)],
            },
        ];
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("player_results.png");

        write_chart(&records, &path).expect("render chart");

        let bytes = std::fs::read(&path).expect("read chart");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn chart_handles_a_single_data_point() {
        let records = vec![GameRecord {
            game_number: 1,
            players: vec![score("Ann", 10)],
        }];
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("player_results.png");

        write_chart(&records, &path).expect("render single-point chart");
        assert!(path.exists());
    }
}
