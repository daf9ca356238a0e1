use anyhow::Result;
use std::fs;
use std::path::Path;

use super::parser::RELATED_CONNECTION_STRENGTH;
use super::KeywordProvider;
use crate::keyword::{KeywordRecord, SUGGESTION_CONNECTION_STRENGTH};

/// Provider that serves canned keyword lists, ignoring the seed.
///
/// `limit` is honoured so that callers see the same truncation they would
/// get from the live API.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    pub related: Vec<KeywordRecord>,
    pub suggestions: Vec<KeywordRecord>,
}

impl StaticProvider {
    pub fn new(related: Vec<KeywordRecord>, suggestions: Vec<KeywordRecord>) -> Self {
        Self {
            related,
            suggestions,
        }
    }

    /// Loads a fixture file of the form `{"related": [...], "suggestions": [...]}`
    /// where each entry is a serialized [`KeywordRecord`].
    ///
    /// A missing `connection_strength` defaults the way the live parsers do:
    /// 0.0 for related entries and 0.5 for suggestions.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read fixture {}: {}", path.display(), e))?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        #[derive(serde::Deserialize)]
        struct Entry {
            keyword: String,
            #[serde(default)]
            search_volume: u64,
            #[serde(default)]
            difficulty: u8,
            connection_strength: Option<f64>,
        }

        impl Entry {
            fn into_record(self, default_strength: f64) -> KeywordRecord {
                KeywordRecord::new(
                    self.keyword,
                    self.search_volume,
                    self.difficulty,
                    self.connection_strength.unwrap_or(default_strength),
                )
            }
        }

        #[derive(serde::Deserialize)]
        struct Fixture {
            #[serde(default)]
            related: Vec<Entry>,
            #[serde(default)]
            suggestions: Vec<Entry>,
        }

        let fixture: Fixture = serde_json::from_str(data)
            .map_err(|e| anyhow::anyhow!("Failed to parse keyword fixture: {}", e))?;
        let records = |entries: Vec<Entry>, strength: f64| -> Vec<KeywordRecord> {
            entries
                .into_iter()
                .map(|entry| entry.into_record(strength))
                .collect()
        };
        let mut provider = Self::new(
            records(fixture.related, RELATED_CONNECTION_STRENGTH),
            records(fixture.suggestions, SUGGESTION_CONNECTION_STRENGTH),
        );
        provider.drop_blank_keywords();
        Ok(provider)
    }

    // Fixtures are hand-written; enforce the non-empty keyword contract here
    fn drop_blank_keywords(&mut self) {
        self.related.retain(|k| !k.keyword.trim().is_empty());
        self.suggestions.retain(|k| !k.keyword.trim().is_empty());
    }
}

impl KeywordProvider for StaticProvider {
    async fn related_keywords(&self, _seed: &str, limit: usize) -> Result<Vec<KeywordRecord>> {
        Ok(self.related.iter().take(limit).cloned().collect())
    }

    async fn keyword_suggestions(&self, _seed: &str, limit: usize) -> Result<Vec<KeywordRecord>> {
        Ok(self.suggestions.iter().take(limit).cloned().collect())
    }
}
