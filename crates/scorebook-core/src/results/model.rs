//! Data models for game results

use std::fmt;

use serde::{Deserialize, Serialize};

/// A score value as it appears in the input document.
///
/// The `result` field admits both integers and floats. Keeping the
/// distinction preserves integer display: "Ann: 10", not "Ann: 10.0".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Int(i64),
    Float(f64),
}

impl Score {
    /// Numeric value as f64
    pub fn as_f64(&self) -> f64 {
        match *self {
            Score::Int(v) => v as f64,
            Score::Float(v) => v,
        }
    }

    /// Sum two scores; the result stays integral only when both sides are
    pub fn add(self, other: Score) -> Score {
        match (self, other) {
            (Score::Int(a), Score::Int(b)) => Score::Int(a + b),
            (a, b) => Score::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Score::Int(v) => write!(f, "{}", v),
            Score::Float(v) => write!(f, "{}", v),
        }
    }
}

/// One player's score within a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Player name (user-supplied; exact, case-sensitive identity)
    pub player_name: String,
    /// Score achieved in this game
    pub result: Score,
}

/// One game entry from the input document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game number as entered; uniqueness is not enforced
    pub game_number: i64,
    /// Scores in player-list order
    pub players: Vec<PlayerScore>,
}

impl GameRecord {
    /// Render the scores column: `"{name}: {result}"` pairs joined with ", ",
    /// in player-list order. Used by the display table, workbook sheet 1 and
    /// CSV table 1.
    pub fn player_scores_line(&self) -> String {
        self.players
            .iter()
            .map(|p| format!("{}: {}", p.player_name, p.result))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_parses_untagged() {
        let int: Score = serde_json::from_str("10").unwrap();
        assert_eq!(int, Score::Int(10));

        let float: Score = serde_json::from_str("7.5").unwrap();
        assert_eq!(float, Score::Float(7.5));
    }

    #[test]
    fn score_display_keeps_integers_integral() {
        assert_eq!(Score::Int(10).to_string(), "10");
        assert_eq!(Score::Float(7.5).to_string(), "7.5");
    }

    #[test]
    fn score_addition_stays_integral_only_for_integers() {
        assert_eq!(Score::Int(10).add(Score::Int(7)), Score::Int(17));
        assert_eq!(Score::Int(10).add(Score::Float(0.5)), Score::Float(10.5));
        assert_eq!(Score::Float(1.5).add(Score::Float(1.5)), Score::Float(3.0));
    }

    #[test]
    fn player_scores_line_joins_in_order() {
        let game = GameRecord {
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
        };
        assert_eq!(game.player_scores_line(), "Ann: 10, Bob: 5");
    }

    #[test]
    fn player_scores_line_empty_players() {
        let game = GameRecord {
            game_number: 3,
            players: Vec::new(),
        };
        assert_eq!(game.player_scores_line(), "");
    }
}
