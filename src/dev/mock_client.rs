/// Mock stats client for development and testing
use crate::api::{ApiError, Game, SeasonAverage};
use crate::data_provider::StatsProvider;
use async_trait::async_trait;
use tracing::info;

use crate::fixtures;

/// Mock client that returns fixture data instead of making real API calls
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsProvider for MockClient {
    async fn recent_games(&self, limit: u32) -> Result<Vec<Game>, ApiError> {
        info!("MockClient: Returning mock games (limit {})", limit);
        let mut games = fixtures::create_mock_games();
        games.truncate(limit as usize);
        Ok(games)
    }

    async fn season_average(&self, season: &str) -> Result<SeasonAverage, ApiError> {
        info!("MockClient: Returning mock season average for {}", season);
        Ok(SeasonAverage {
            season: season.to_string(),
            ..fixtures::create_mock_season_average()
        })
    }
}
