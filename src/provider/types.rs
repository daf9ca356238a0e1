//! Request and response shapes for the DataForSEO Labs API.

use serde::{Deserialize, Serialize};
use tokio::time::Duration;

/// Request body entry for the related-keywords and keyword-suggestions endpoints
#[derive(Debug, Clone, Serialize)]
pub struct KeywordRequest<'a> {
    pub keyword: &'a str,
    pub location_code: u32,
    pub language_code: &'a str,
    pub limit: usize,
    pub filters: Vec<(&'static str, &'static str, u64)>,
}

impl<'a> KeywordRequest<'a> {
    /// Builds a request that only returns keywords with a positive search volume
    pub fn new(keyword: &'a str, location_code: u32, language_code: &'a str, limit: usize) -> Self {
        Self {
            keyword,
            location_code,
            language_code,
            limit,
            filters: vec![("keyword_data.keyword_info.search_volume", ">", 0)],
        }
    }
}

/// Top-level API response; only the fields used for keyword extraction
#[derive(Debug, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status_code: Option<u32>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub tasks: Option<Vec<ApiTask>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiTask {
    #[serde(default)]
    pub result: Option<Vec<ApiResult>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiResult {
    #[serde(default)]
    pub items: Option<Vec<ApiItem>>,
}

/// A result item. Related-keyword items nest their data under `keyword_data`;
/// suggestion items may carry `keyword` and `keyword_info` directly.
#[derive(Debug, Default, Deserialize)]
pub struct ApiItem {
    #[serde(default)]
    pub keyword_data: Option<KeywordData>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub keyword_info: Option<KeywordInfo>,
    #[serde(default)]
    pub connection_strength: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KeywordData {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub keyword_info: Option<KeywordInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KeywordInfo {
    #[serde(default)]
    pub search_volume: Option<u64>,
    #[serde(default)]
    pub keyword_difficulty: Option<i64>,
}

// Constants
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const RELATED_KEYWORDS_ENDPOINT: &str = "/dataforseo_labs/google/related_keywords/live";
pub const KEYWORD_SUGGESTIONS_ENDPOINT: &str = "/dataforseo_labs/google/keyword_suggestions/live";
pub const DEFAULT_RELATED_LIMIT: usize = 100;
pub const DEFAULT_SUGGESTIONS_LIMIT: usize = 50;
