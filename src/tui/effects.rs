use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::action::Action;
use super::state::DisplayId;
use crate::data_provider::StatsProvider;

/// A fetch in flight, resolving to the action that reports its outcome
pub type ActionFuture = Pin<Box<dyn Future<Output = Action> + Send>>;

/// Effect handler for data fetching operations
///
/// Each method returns a future resolving to the matching *Loaded action,
/// tagged with the requesting display cycle.
pub struct DataEffects {
    client: Arc<dyn StatsProvider>,
    games_limit: u32,
    season: String,
}

impl DataEffects {
    /// Create a new DataEffects handler
    pub fn new(client: Arc<dyn StatsProvider>, games_limit: u32, season: impl Into<String>) -> Self {
        Self {
            client,
            games_limit,
            season: season.into(),
        }
    }

    /// Fetch the most recent games
    pub fn fetch_recent_games(&self, display_id: DisplayId) -> ActionFuture {
        let client = self.client.clone();
        let limit = self.games_limit;
        Box::pin(async move {
            let result = client.recent_games(limit).await;
            Action::RecentGamesLoaded {
                display_id,
                result: result.map_err(|e| e.to_string()),
            }
        })
    }

    /// Fetch the configured season's averages
    pub fn fetch_season_average(&self, display_id: DisplayId) -> ActionFuture {
        let client = self.client.clone();
        let season = self.season.clone();
        Box::pin(async move {
            let result = client.season_average(&season).await;
            Action::SeasonAverageLoaded {
                display_id,
                result: result.map_err(|e| e.to_string()),
            }
        })
    }
}
