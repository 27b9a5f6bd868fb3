//! Configuration for default export destinations

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_workbook_path() -> PathBuf {
    PathBuf::from("game_results.xlsx")
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("game_results.csv")
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("player_results.png")
}

fn default_thumbnail_dir() -> PathBuf {
    PathBuf::from("thumbnails")
}

/// Configuration for scorebook
///
/// Every field has a default, so a missing or partially filled config file
/// degrades gracefully instead of aborting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Destination for the spreadsheet export
    #[serde(default = "default_workbook_path")]
    pub workbook_path: PathBuf,
    /// Destination for the CSV export
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    /// Destination for the chart export
    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,
    /// Directory thumbnails are generated into
    #[serde(default = "default_thumbnail_dir")]
    pub thumbnail_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook_path: default_workbook_path(),
            csv_path: default_csv_path(),
            chart_path: default_chart_path(),
            thumbnail_dir: default_thumbnail_dir(),
        }
    }
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scorebook").join("config.json"))
    }

    /// Load config from disk, falling back to defaults if absent or invalid
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save config to disk
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            std::fs::write(&path, content)?;
        }
        Ok(())
    }
}
