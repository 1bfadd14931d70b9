/// Trait for providing player statistics, abstracting over the real API client and mock implementations
use async_trait::async_trait;

use crate::api::{ApiError, Client, Game, SeasonAverage};

/// Trait for statistics providers, implemented by both the real Client and MockClient
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Get the most recent games, most-recent-first
    async fn recent_games(&self, limit: u32) -> Result<Vec<Game>, ApiError>;

    /// Get per-game averages for one season
    async fn season_average(&self, season: &str) -> Result<SeasonAverage, ApiError>;
}

/// Implement the trait for the real api::Client
#[async_trait]
impl StatsProvider for Client {
    async fn recent_games(&self, limit: u32) -> Result<Vec<Game>, ApiError> {
        self.recent_games(limit).await
    }

    async fn season_average(&self, season: &str) -> Result<SeasonAverage, ApiError> {
        self.season_average(season).await
    }
}
