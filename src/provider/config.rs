use anyhow::Result;

use crate::environment::{get_env_var_or, get_env_var_parsed, get_required_env_var};

const DEFAULT_BASE_URL: &str = "https://api.dataforseo.com/v3";
/// United States
const DEFAULT_LOCATION_CODE: u32 = 2840;
const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Connection settings for the DataForSEO Labs API
#[derive(Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub login: String,
    pub password: String,
    pub location_code: u32,
    pub language_code: String,
}

impl ProviderConfig {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login: login.into(),
            password: password.into(),
            location_code: DEFAULT_LOCATION_CODE,
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
        }
    }

    /// Reads `DATAFORSEO_LOGIN`, `DATAFORSEO_PASSWORD` (both required),
    /// `DATAFORSEO_BASE_URL`, `LOCATION_CODE` and `LANGUAGE_CODE`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: get_env_var_or("DATAFORSEO_BASE_URL", DEFAULT_BASE_URL),
            login: get_required_env_var("DATAFORSEO_LOGIN")?,
            password: get_required_env_var("DATAFORSEO_PASSWORD")?,
            location_code: get_env_var_parsed("LOCATION_CODE", DEFAULT_LOCATION_CODE),
            language_code: get_env_var_or("LANGUAGE_CODE", DEFAULT_LANGUAGE_CODE),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL of an endpoint path such as `/dataforseo_labs/...`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

// Keeps the password out of logs
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("login", &self.login)
            .field("location_code", &self.location_code)
            .field("language_code", &self.language_code)
            .finish_non_exhaustive()
    }
}
