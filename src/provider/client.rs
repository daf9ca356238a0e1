//! HTTP client for the DataForSEO Labs keyword endpoints.

use anyhow::{anyhow, Result};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use super::config::ProviderConfig;
use super::parser::{parse_keyword_suggestions, parse_related_keywords};
use super::types::{
    ApiResponse, KeywordRequest, KEYWORD_SUGGESTIONS_ENDPOINT, RELATED_KEYWORDS_ENDPOINT,
    REQUEST_TIMEOUT,
};
use super::KeywordProvider;
use crate::keyword::KeywordRecord;
use crate::TARGET_WEB_REQUEST;

/// Status code DataForSEO reports for a successful call
const API_STATUS_OK: u32 = 20000;

/// Message surfaced to callers when the provider cannot be reached
const UNAVAILABLE_MESSAGE: &str = "Unable to fetch keywords. Please try again.";

#[derive(Debug, Clone)]
pub struct DataForSeoClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

/// Create the HTTP client used for all provider calls
pub fn create_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .gzip(true)
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))
}

impl DataForSeoClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        Ok(Self {
            http: create_http_client()?,
            config,
        })
    }

    /// Builds a client from `DATAFORSEO_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ProviderConfig::from_env()?)
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Makes an authenticated POST to a DataForSEO endpoint
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - The decoded response body
    /// * `Err` - "API request failed: <status>" on a non-success status, or a
    ///   generic unavailability error on transport or decoding failure
    async fn request(&self, endpoint: &str, seed: &str, limit: usize) -> Result<ApiResponse> {
        let url = self.config.endpoint_url(endpoint);
        let body = [KeywordRequest::new(
            seed,
            self.config.location_code,
            &self.config.language_code,
            limit,
        )];

        debug!(target: TARGET_WEB_REQUEST, "POST {} for '{}' (limit {})", url, seed, limit);
        let start = Instant::now();

        let response = match self
            .http
            .post(&url)
            .basic_auth(&self.config.login, Some(&self.config.password))
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(
                    target: TARGET_WEB_REQUEST,
                    "DataForSEO request exception for {}: {}", endpoint, e
                );
                return Err(anyhow!(UNAVAILABLE_MESSAGE));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                target: TARGET_WEB_REQUEST,
                "DataForSEO API error for {}: status {} body {}", endpoint, status, detail
            );
            return Err(anyhow!("API request failed: {}", status.as_u16()));
        }

        let parsed: ApiResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(
                    target: TARGET_WEB_REQUEST,
                    "Failed to decode DataForSEO response for {}: {}", endpoint, e
                );
                return Err(anyhow!(UNAVAILABLE_MESSAGE));
            }
        };

        if let Some(code) = parsed.status_code {
            if code != API_STATUS_OK {
                warn!(
                    target: TARGET_WEB_REQUEST,
                    "DataForSEO returned status {} for {}: {}",
                    code,
                    endpoint,
                    parsed.status_message.as_deref().unwrap_or("no message")
                );
            }
        }

        info!(
            target: TARGET_WEB_REQUEST,
            "DataForSEO {} answered in {:.2?}", endpoint, start.elapsed()
        );
        Ok(parsed)
    }
}

impl KeywordProvider for DataForSeoClient {
    async fn related_keywords(&self, seed: &str, limit: usize) -> Result<Vec<KeywordRecord>> {
        let response = self.request(RELATED_KEYWORDS_ENDPOINT, seed, limit).await?;
        Ok(parse_related_keywords(&response))
    }

    async fn keyword_suggestions(&self, seed: &str, limit: usize) -> Result<Vec<KeywordRecord>> {
        let response = self
            .request(KEYWORD_SUGGESTIONS_ENDPOINT, seed, limit)
            .await?;
        Ok(parse_keyword_suggestions(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one connection with `response` and returns the base URL to reach it
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            // Read headers, then the declared body, before answering
            let header_end = loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    return;
                }
                request.extend_from_slice(&buf[..n]);
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let headers = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while request.len() < header_end + content_length {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}", addr)
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    #[test]
    fn test_request_body_shape() {
        let body = [KeywordRequest::new("ai seo", 2840, "en", 100)];
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!([{
                "keyword": "ai seo",
                "location_code": 2840,
                "language_code": "en",
                "limit": 100,
                "filters": [["keyword_data.keyword_info.search_volume", ">", 0]]
            }])
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_reports_unavailable() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let config = ProviderConfig::new("user", "secret").with_base_url("http://127.0.0.1:9");
        let client = DataForSeoClient::new(config).unwrap();

        let err = client.related_keywords("seo", 10).await.unwrap_err();
        assert_eq!(err.to_string(), UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let base_url = serve_once(http_response("500 Internal Server Error", "")).await;
        let config = ProviderConfig::new("user", "secret").with_base_url(base_url);
        let client = DataForSeoClient::new(config).unwrap();

        let err = client.related_keywords("seo", 10).await.unwrap_err();
        assert_eq!(err.to_string(), "API request failed: 500");
    }

    #[tokio::test]
    async fn test_success_response_is_parsed() {
        let body = r#"{"status_code":20000,"tasks":[{"result":[{"items":[{"keyword_data":{"keyword":"seo"}}]}]}]}"#;
        let base_url = serve_once(http_response("200 OK", body)).await;
        let config = ProviderConfig::new("user", "secret").with_base_url(base_url);
        let client = DataForSeoClient::new(config).unwrap();

        let keywords = client.related_keywords("seo", 10).await.unwrap();
        assert_eq!(keywords, vec![KeywordRecord::new("seo", 0, 0, 0.0)]);
    }
}
