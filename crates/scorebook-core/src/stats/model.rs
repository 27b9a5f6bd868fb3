//! Data models for derived player statistics

use std::collections::HashMap;

use serde::Serialize;

use crate::results::Score;

/// Aggregated results for one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    /// Player name (exact string identity)
    pub player_name: String,
    /// Sum of the player's scores across all games
    pub total_score: Score,
    /// total_score / games_played, rounded to 2 decimal places
    pub average_score: f64,
    /// Number of games the player appears in (always at least 1)
    pub games_played: usize,
}

/// Mapping from player name to summary.
///
/// Iteration follows first-appearance order of each player across the
/// record sequence; row order in every export follows this order. Entries
/// are created on first encounter, so no sentinel default value exists and
/// zero-game players cannot appear.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PlayerSummaries {
    entries: Vec<PlayerSummary>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl PlayerSummaries {
    pub(crate) fn push(&mut self, summary: PlayerSummary) {
        self.index
            .insert(summary.player_name.clone(), self.entries.len());
        self.entries.push(summary);
    }

    /// Look up a player's summary by exact name
    pub fn get(&self, player_name: &str) -> Option<&PlayerSummary> {
        self.index.get(player_name).map(|&i| &self.entries[i])
    }

    /// Summaries in first-appearance order
    pub fn iter(&self) -> std::slice::Iter<'_, PlayerSummary> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlayerSummaries {
    type Item = &'a PlayerSummary;
    type IntoIter = std::slice::Iter<'a, PlayerSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
