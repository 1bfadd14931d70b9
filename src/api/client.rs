use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;
use super::models::{Game, SeasonAverage};

/// Base URL used when neither the environment nor the config file set one
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const USER_AGENT: &str = concat!("ruistats/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the statistics service
///
/// Every call is a single best-effort GET: no retries, no timeout, no cache.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client talking to `base_url` (trailing slashes are ignored)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Network)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Most recent games, most-recent-first, at most `limit` of them
    pub async fn recent_games(&self, limit: u32) -> Result<Vec<Game>, ApiError> {
        self.get("/hachimura/games", &[("limit", limit.to_string())])
            .await
    }

    /// Per-game averages for one season (e.g. "2024-25")
    pub async fn season_average(&self, season: &str) -> Result<SeasonAverage, ApiError> {
        self.get("/hachimura/season-avg", &[("season", season.to_string())])
            .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("API: GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            debug!("API: {} answered {}", url, status);
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(ApiError::Network)?;
        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }
}
