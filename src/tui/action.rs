use crate::api::{Game, SeasonAverage};

use super::state::DisplayId;
use super::types::Tab;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading)
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation actions
    NavigateTab(Tab),
    NavigateTabLeft,
    NavigateTabRight,

    /// Tear down the current view and mount it again with a new fetch
    Refresh,

    // Data loaded (from effects), tagged with the display cycle that asked
    RecentGamesLoaded {
        display_id: DisplayId,
        result: Result<Vec<Game>, String>,
    },
    SeasonAverageLoaded {
        display_id: DisplayId,
        result: Result<SeasonAverage, String>,
    },

    Quit,
}
