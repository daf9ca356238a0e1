//! End-to-end topical map generation for a seed keyword.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use tracing::info;

use crate::clustering::{cluster, merge, Cluster, TopicalMapResult, DEFAULT_CONNECTION_THRESHOLD};
use crate::environment::get_env_var_parsed;
use crate::keyword::KeywordRecord;
use crate::provider::types::{DEFAULT_RELATED_LIMIT, DEFAULT_SUGGESTIONS_LIMIT};
use crate::provider::KeywordProvider;
use crate::TARGET_CLUSTERING;

/// Knobs for a single generation run
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    /// Also fetch long-tail suggestions and merge them with related keywords
    pub include_suggestions: bool,
    /// Inclusive minimum connection strength for clustering
    pub threshold: f64,
    pub related_limit: usize,
    pub suggestions_limit: usize,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            include_suggestions: false,
            threshold: DEFAULT_CONNECTION_THRESHOLD,
            related_limit: DEFAULT_RELATED_LIMIT,
            suggestions_limit: DEFAULT_SUGGESTIONS_LIMIT,
        }
    }
}

impl MapOptions {
    /// Defaults, with the threshold taken from `CONNECTION_THRESHOLD` when set
    pub fn from_env() -> Self {
        Self {
            threshold: get_env_var_parsed("CONNECTION_THRESHOLD", DEFAULT_CONNECTION_THRESHOLD),
            ..Self::default()
        }
    }

    pub fn with_suggestions(mut self, include: bool) -> Self {
        self.include_suggestions = include;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Rejects a threshold that is NaN, infinite or outside 0.0-1.0
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            bail!(
                "Connection threshold must be between 0.0 and 1.0, got {}",
                self.threshold
            );
        }
        Ok(())
    }
}

/// Generates a topical map for `seed`
///
/// Related keywords are always fetched. Suggestions, when enabled, are merged
/// in as the secondary source before clustering.
///
/// # Returns
/// * `Ok(TopicalMapResult)` - Clusters and orphans, owned by the caller
/// * `Err` - If the seed is blank, the threshold is invalid or the provider fails
pub async fn generate_topical_map<P: KeywordProvider>(
    provider: &P,
    seed: &str,
    options: &MapOptions,
) -> Result<TopicalMapResult> {
    let seed = seed.trim();
    if seed.is_empty() {
        bail!("Seed keyword must not be empty");
    }
    options.validate()?;

    info!(target: TARGET_CLUSTERING, "Generating topical map for '{}'", seed);

    let related = provider
        .related_keywords(seed, options.related_limit)
        .await
        .with_context(|| format!("Fetching related keywords for '{}'", seed))?;

    let suggestions = if options.include_suggestions {
        provider
            .keyword_suggestions(seed, options.suggestions_limit)
            .await
            .with_context(|| format!("Fetching keyword suggestions for '{}'", seed))?
    } else {
        Vec::new()
    };

    info!(
        target: TARGET_CLUSTERING,
        "Fetched {} related keywords and {} suggestions",
        related.len(),
        suggestions.len()
    );

    let merged = merge(related, suggestions);
    Ok(cluster(merged, options.threshold))
}

/// Suggestions not already present, compared case-insensitively
///
/// A suggestion that repeats an earlier one in the same batch is dropped too.
pub fn new_suggestions<I, S>(existing: I, suggestions: Vec<KeywordRecord>) -> Vec<KeywordRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = existing
        .into_iter()
        .map(|k| k.as_ref().to_lowercase())
        .collect();

    suggestions
        .into_iter()
        .filter(|suggestion| seen.insert(suggestion.key()))
        .collect()
}

/// Suggestions to add to an existing map, skipping the seed and every mapped keyword
pub fn suggestions_for_map(
    seed: &str,
    map: &TopicalMapResult,
    suggestions: Vec<KeywordRecord>,
) -> Vec<KeywordRecord> {
    let existing = std::iter::once(seed).chain(map.keywords().map(|k| k.keyword.as_str()));
    new_suggestions(existing, suggestions)
}

/// Suggestions to add as children of `cluster`, skipping its current members
pub fn suggestions_for_cluster(
    cluster: &Cluster,
    suggestions: Vec<KeywordRecord>,
) -> Vec<KeywordRecord> {
    new_suggestions(cluster.member_keys(), suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(keyword: &str) -> KeywordRecord {
        KeywordRecord::new(keyword, 10, 0, 0.5)
    }

    #[test]
    fn test_new_suggestions_skips_existing_and_repeats() {
        let fresh = new_suggestions(
            ["AI SEO", "seo tools"],
            vec![kw("ai seo"), kw("seo course"), kw("SEO Course"), kw("Seo Tools")],
        );
        assert_eq!(fresh, vec![kw("seo course")]);
    }

    #[test]
    fn test_suggestions_for_cluster() {
        let mut c = Cluster::new(kw("seo"));
        c.children.push(kw("seo audit"));
        let fresh = suggestions_for_cluster(&c, vec![kw("SEO Audit"), kw("seo audit checklist")]);
        assert_eq!(fresh, vec![kw("seo audit checklist")]);
    }

    #[test]
    fn test_suggestions_for_map_skips_seed_and_orphans() {
        let map = TopicalMapResult {
            clusters: vec![Cluster::new(kw("seo tools"))],
            orphans: vec![kw("weather today")],
        };
        let fresh = suggestions_for_map(
            "SEO",
            &map,
            vec![kw("seo"), kw("Weather Today"), kw("seo tools"), kw("seo for dentists")],
        );
        assert_eq!(fresh, vec![kw("seo for dentists")]);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(MapOptions::default().validate().is_ok());
        assert!(MapOptions::default().with_threshold(0.0).validate().is_ok());
        assert!(MapOptions::default().with_threshold(1.0).validate().is_ok());
        assert!(MapOptions::default().with_threshold(f64::NAN).validate().is_err());
        assert!(MapOptions::default()
            .with_threshold(f64::INFINITY)
            .validate()
            .is_err());
        assert!(MapOptions::default().with_threshold(-0.1).validate().is_err());
        assert!(MapOptions::default().with_threshold(1.5).validate().is_err());
    }

    #[test]
    fn test_default_options() {
        let options = MapOptions::default();
        assert!(!options.include_suggestions);
        assert_eq!(options.threshold, 0.3);
        assert_eq!(options.related_limit, 100);
        assert_eq!(options.suggestions_limit, 50);
    }
}
