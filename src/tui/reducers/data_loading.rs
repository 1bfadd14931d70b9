use tracing::debug;

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;

/// Handle all data loading actions (API responses)
///
/// Takes the action by value so a payload moves into its view without a
/// copy. A payload whose display id does not match the mounted view is
/// dropped untouched.
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(state: AppState, action: Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::RecentGamesLoaded { display_id, result } => {
            let mut new_state = state;
            match new_state.views.recent_games.as_mut() {
                Some(view) if view.display_id == display_id => {
                    match &result {
                        Ok(games) => debug!("DATA: Loaded {} recent games", games.len()),
                        Err(e) => debug!("DATA: Failed to load recent games: {}", e),
                    }
                    view.resolve(display_id, result);
                }
                _ => debug!("DATA: Dropping stale recent games for {:?}", display_id),
            }
            Ok((new_state, Effect::None))
        }
        Action::SeasonAverageLoaded { display_id, result } => {
            let mut new_state = state;
            match new_state.views.season.as_mut() {
                Some(view) if view.display_id == display_id => {
                    match &result {
                        Ok(avg) => debug!("DATA: Loaded season averages for {}", avg.season),
                        Err(e) => debug!("DATA: Failed to load season averages: {}", e),
                    }
                    view.resolve(display_id, result);
                }
                _ => debug!("DATA: Dropping stale season averages for {:?}", display_id),
            }
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_games, create_mock_season_average};
    use crate::tui::state::{DisplayId, FetchState, ViewInstance};
    use std::sync::Arc;

    fn reduce(state: AppState, action: Action) -> AppState {
        let name = format!("{:?}", action);
        match reduce_data_loading(state, action) {
            Ok((state, effect)) => {
                assert_eq!(effect, Effect::None);
                state
            }
            Err(_) => panic!("data loading reducer did not handle {}", name),
        }
    }

    fn with_games_view(id: u64) -> AppState {
        let mut state = AppState::default();
        state.views.recent_games = Some(ViewInstance::loading(DisplayId(id)));
        state
    }

    #[test]
    fn test_games_loaded_for_current_view() {
        let games = create_mock_games();
        let state = reduce(
            with_games_view(1),
            Action::RecentGamesLoaded {
                display_id: DisplayId(1),
                result: Ok(games.clone()),
            },
        );

        let view = state.views.recent_games.expect("still mounted");
        assert_eq!(view.fetch, FetchState::Success(Arc::new(games)));
    }

    #[test]
    fn test_games_payload_is_moved_into_view() {
        let games = create_mock_games();
        let buffer = games.as_ptr();

        let state = reduce(
            with_games_view(1),
            Action::RecentGamesLoaded {
                display_id: DisplayId(1),
                result: Ok(games),
            },
        );

        match state.views.recent_games.expect("still mounted").fetch {
            FetchState::Success(stored) => assert_eq!(stored.as_ptr(), buffer),
            other => panic!("Expected Success, got {:?}", other),
        }
    }

    #[test]
    fn test_games_failure_for_current_view() {
        let state = reduce(
            with_games_view(1),
            Action::RecentGamesLoaded {
                display_id: DisplayId(1),
                result: Err("HTTP 500".to_string()),
            },
        );

        let view = state.views.recent_games.expect("still mounted");
        assert_eq!(view.fetch, FetchState::Failure("HTTP 500".to_string()));
    }

    #[test]
    fn test_stale_games_are_dropped() {
        let state = reduce(
            with_games_view(2),
            Action::RecentGamesLoaded {
                display_id: DisplayId(1),
                result: Ok(create_mock_games()),
            },
        );

        assert!(matches!(state.views.recent_games.expect("still mounted").fetch, FetchState::Loading));
    }

    #[test]
    fn test_games_for_unmounted_view_are_dropped() {
        let state = reduce(
            AppState::default(),
            Action::RecentGamesLoaded {
                display_id: DisplayId(0),
                result: Ok(create_mock_games()),
            },
        );

        assert!(state.views.recent_games.is_none());
    }

    #[test]
    fn test_season_loaded_for_current_view() {
        let mut state = AppState::default();
        state.views.season = Some(ViewInstance::loading(DisplayId(5)));
        let avg = create_mock_season_average();

        let state = reduce(
            state,
            Action::SeasonAverageLoaded {
                display_id: DisplayId(5),
                result: Ok(avg.clone()),
            },
        );

        let view = state.views.season.expect("still mounted");
        assert_eq!(view.fetch, FetchState::Success(Arc::new(avg)));
    }

    #[test]
    fn test_season_result_does_not_touch_games_view() {
        let state = reduce(
            with_games_view(1),
            Action::SeasonAverageLoaded {
                display_id: DisplayId(1),
                result: Ok(create_mock_season_average()),
            },
        );

        assert!(state.views.season.is_none());
        assert!(matches!(state.views.recent_games.expect("still mounted").fetch, FetchState::Loading));
    }
}
