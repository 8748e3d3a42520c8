use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::Config;

pub const MAX_RESULTS: u32 = 20;

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub max_results: u32,
}

/// Response body; fields we don't read are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub trait WebSearch {
    async fn search(&self, request: &SearchRequest<'_>) -> Result<SearchResponse, SearchError>;
}

pub struct TavilyClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl TavilyClient {
    pub fn new(config: &Config) -> Self {
        TavilyClient {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        }
    }
}

impl WebSearch for TavilyClient {
    async fn search(&self, request: &SearchRequest<'_>) -> Result<SearchResponse, SearchError> {
        info!("POST {} (max_results={})", self.api_url, request.max_results);
        let start = Instant::now();

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        info!(
            "Search answered {} in {}ms",
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            return Err(SearchError::Status { status, body });
        }
        parse_response(&body)
    }
}

pub fn parse_response(body: &str) -> Result<SearchResponse, SearchError> {
    Ok(serde_json::from_str(body)?)
}
