use serde::{Deserialize, Serialize};

use super::difficulty::{difficulty_label, DifficultyLabel};

/// Connection strength assumed for sources that do not report one (suggestions).
pub const SUGGESTION_CONNECTION_STRENGTH: f64 = 0.5;

/// A single keyword as reported by a keyword-data source.
///
/// `keyword` keeps its original casing for display; identity comparisons go
/// through [`KeywordRecord::key`], which is case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    #[serde(default)]
    pub search_volume: u64,
    #[serde(default)]
    pub difficulty: u8,
    #[serde(default = "default_connection_strength")]
    pub connection_strength: f64,
}

fn default_connection_strength() -> f64 {
    SUGGESTION_CONNECTION_STRENGTH
}

impl KeywordRecord {
    pub fn new(
        keyword: impl Into<String>,
        search_volume: u64,
        difficulty: u8,
        connection_strength: f64,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            search_volume,
            difficulty,
            connection_strength,
        }
    }

    /// Case-insensitive identity used for de-duplication and cluster membership.
    pub fn key(&self) -> String {
        self.keyword.to_lowercase()
    }

    pub fn difficulty_label(&self) -> DifficultyLabel {
        difficulty_label(i64::from(self.difficulty))
    }
}
