use std::sync::Arc;

use crate::api::{Game, SeasonAverage};
use crate::config::Config;
use crate::types::{DEFAULT_SEASON, RECENT_GAMES_LIMIT};

use super::types::Tab;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Navigation state (which tab, display id counter)
    pub navigation: NavigationState,

    /// Mounted view instances
    pub views: ViewsState,

    /// System state
    pub system: SystemState,
}

/// Identifies one display cycle of one view
///
/// Fetch results carry the id of the instance that asked for them, so a
/// result for a torn-down or remounted instance can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayId(pub u64);

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_tab: Tab,
    /// Next id handed out by `allocate_display_id`
    pub next_display_id: u64,
}

impl NavigationState {
    pub fn allocate_display_id(&mut self) -> DisplayId {
        let id = DisplayId(self.next_display_id);
        self.next_display_id += 1;
        id
    }
}

/// Fetch lifecycle of a view instance
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(Arc<T>),
    Failure(String),
}

/// A mounted view: its display id and what its fetch has produced so far
#[derive(Debug, Clone, PartialEq)]
pub struct ViewInstance<T> {
    pub display_id: DisplayId,
    pub fetch: FetchState<T>,
}

impl<T> ViewInstance<T> {
    /// Mount a fresh instance waiting on its fetch
    pub fn loading(display_id: DisplayId) -> Self {
        Self {
            display_id,
            fetch: FetchState::Loading,
        }
    }

    /// Apply a fetch result if it belongs to this instance
    ///
    /// Returns false (and leaves the instance untouched) when the result was
    /// issued by another display cycle. The whole payload replaces any held
    /// value.
    pub fn resolve(&mut self, display_id: DisplayId, result: Result<T, String>) -> bool {
        if display_id != self.display_id {
            return false;
        }
        self.fetch = match result {
            Ok(data) => FetchState::Success(Arc::new(data)),
            Err(message) => FetchState::Failure(message),
        };
        true
    }
}

/// View instances; None means the view is not displayed
#[derive(Debug, Clone, Default)]
pub struct ViewsState {
    pub recent_games: Option<ViewInstance<Vec<Game>>>,
    pub season: Option<ViewInstance<SeasonAverage>>,
}

impl ViewsState {
    pub fn is_mounted(&self, tab: Tab) -> bool {
        match tab {
            Tab::RecentGames => self.recent_games.is_some(),
            Tab::Season => self.season.is_some(),
        }
    }

    /// Drop every mounted view and whatever data it held
    pub fn teardown_all(&mut self) {
        self.recent_games = None;
        self.season = None;
    }
}

/// Key help shown in the status bar
pub const KEY_HELP: &str =
    "Keys: ←→ switch view | 1-2 jump to view | r refresh | q quit";

#[derive(Debug, Clone)]
pub struct SystemState {
    pub config: Config,
    /// How many games the recent-games view asks for
    pub games_limit: u32,
    /// Season the season view asks for
    pub season: String,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            config: Config::default(),
            games_limit: RECENT_GAMES_LIMIT,
            season: DEFAULT_SEASON.to_string(),
        }
    }
}
