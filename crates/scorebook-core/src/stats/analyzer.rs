//! Aggregation of game records into per-player summaries

use std::collections::HashMap;

use crate::results::{GameRecord, Score};

use super::model::{PlayerSummaries, PlayerSummary};

/// Round to 2 decimal places for display/export
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Analyzer deriving per-player totals and averages from game records
pub struct ScoreAnalyzer;

impl ScoreAnalyzer {
    /// Summarize every player's scores across the record sequence.
    ///
    /// Pure and deterministic: iterates every score of every game,
    /// accumulating total and game count per distinct player name (exact,
    /// case-sensitive match). Output order is first appearance across the
    /// records. A player enters the accumulator only on their first recorded
    /// score, so the average is never computed over zero games.
    pub fn summarize(records: &[GameRecord]) -> PlayerSummaries {
        struct Accum {
            total: Score,
            games: usize,
        }

        let mut order: Vec<String> = Vec::new();
        let mut accum: HashMap<String, Accum> = HashMap::new();

        for game in records {
            for player in &game.players {
                match accum.get_mut(&player.player_name) {
                    Some(entry) => {
                        entry.total = entry.total.add(player.result);
                        entry.games += 1;
                    }
                    None => {
                        order.push(player.player_name.clone());
                        accum.insert(
                            player.player_name.clone(),
                            Accum {
                                total: player.result,
                                games: 1,
                            },
                        );
                    }
                }
            }
        }

        let mut summaries = PlayerSummaries::default();
        for name in order {
            let entry = &accum[&name];
            let average = round2(entry.total.as_f64() / entry.games as f64);
            summaries.push(PlayerSummary {
                player_name: name,
                total_score: entry.total,
                average_score: average,
                games_played: entry.games,
            });
        }
        summaries
    }
}
