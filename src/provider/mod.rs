//! Keyword-data providers: the DataForSEO Labs client and a static fixture.

pub mod client;
pub mod config;
pub mod fixture;
pub mod parser;
pub mod types;

use anyhow::Result;

use crate::keyword::KeywordRecord;

pub use client::DataForSeoClient;
pub use config::ProviderConfig;
pub use fixture::StaticProvider;
pub use parser::{parse_keyword_suggestions, parse_related_keywords};

/// A source of keyword research data for a seed keyword.
///
/// Implementations return well-formed records only: every record has a
/// non-empty keyword.
#[allow(async_fn_in_trait)]
pub trait KeywordProvider {
    /// Semantically related keywords, each with a connection strength.
    async fn related_keywords(&self, seed: &str, limit: usize) -> Result<Vec<KeywordRecord>>;

    /// Long-tail, autocomplete-style variations of the seed.
    async fn keyword_suggestions(&self, seed: &str, limit: usize) -> Result<Vec<KeywordRecord>>;
}
