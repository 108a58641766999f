//! SearXNG API client
//!
//! Builds query parameters for `/search`, issues GET requests against an instance, and decodes
//! the JSON bodies into the records in [`crate::models`]. No retries: the first transport or
//! status failure is returned to the caller.

use crate::error::ApiError;
use crate::models::{EngineInfo, SearchResponse};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const CLIENT_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound for a single request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameters for one `/search` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Comma-separated categories, passed through as given
    pub categories: Option<String>,
    /// Comma-separated engines, passed through as given
    pub engines: Option<String>,
    pub language: Option<String>,
    pub page: u32,
    pub time_range: Option<String>,
    /// 0, 1 or 2; `Some(0)` is sent, `None` is not
    pub safe_search: Option<u8>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            categories: None,
            engines: None,
            language: None,
            page: 1,
            time_range: None,
            safe_search: None,
        }
    }

    /// Query parameters in request order. `q`, `format` and `pageno` are always present;
    /// string options are dropped when absent or empty.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", self.query.clone()),
            ("format", "json".to_string()),
            ("pageno", self.page.to_string()),
        ];

        let optional = [
            ("categories", &self.categories),
            ("engines", &self.engines),
            ("language", &self.language),
            ("time_range", &self.time_range),
        ];
        for (name, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((name, value.to_string()));
            }
        }

        if let Some(level) = self.safe_search {
            params.push(("safesearch", level.to_string()));
        }
        params
    }
}

fn map_transport_error(url: &str, error: reqwest::Error) -> ApiError {
    let kind = if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connection failed"
    } else if error.is_body() || error.is_decode() {
        "response body"
    } else {
        "request failed"
    };
    debug!(url, kind, error = %error, "Transport error");
    ApiError::NetworkError {
        url: url.to_string(),
        kind,
        source: error,
    }
}

fn build_http_client(timeout: Duration) -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(CLIENT_HTTP_CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        // A 3xx is reported as a status error, never followed.
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("searxng-cli/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))
}

/// Client bound to one SearXNG instance.
#[derive(Debug, Clone)]
pub struct SearxngClient {
    client: Client,
    base_url: String,
}

impl SearxngClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::ConfigError(
                "Cannot create a client without a base_url".to_string(),
            ));
        }
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a search query.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let params = request.query_params();
        debug!(?params, "Search params");

        let data = self.get_json("/search", &params).await?;
        let response = SearchResponse::from_json(data)?;
        debug!(
            results = response.results.len(),
            number_of_results = response.number_of_results,
            "Got search results"
        );
        Ok(response)
    }

    /// Raw instance configuration from `/config`.
    pub async fn get_config(&self) -> Result<Value, ApiError> {
        self.get_json("/config", &[]).await
    }

    /// Engines listed in the instance configuration, in upstream order.
    pub async fn get_engines(&self) -> Result<Vec<EngineInfo>, ApiError> {
        let config = self.get_config().await?;
        engines_from_config(config)
    }

    /// Categories listed in the instance configuration, in upstream order.
    pub async fn get_categories(&self) -> Result<Vec<String>, ApiError> {
        let config = self.get_config().await?;
        Ok(categories_from_config(&config))
    }

    async fn get_json(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| map_transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(url = %url, status = status.as_u16(), "Non-success status");
            return Err(ApiError::HttpStatusError {
                status: status.as_u16(),
                url,
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(&url, e))?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse JSON from {}: {}", url, e))
        })
    }
}

/// Decode the `engines` array of a `/config` payload; absent means none.
pub fn engines_from_config(config: Value) -> Result<Vec<EngineInfo>, ApiError> {
    match config {
        Value::Object(mut map) => match map.remove("engines") {
            Some(Value::Array(items)) => items.into_iter().map(EngineInfo::from_json).collect(),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

/// Read the `categories` array of a `/config` payload; absent means none.
pub fn categories_from_config(config: &Value) -> Vec<String> {
    config
        .get("categories")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
