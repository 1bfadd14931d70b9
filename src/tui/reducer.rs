use super::action::Action;
use super::component::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_data_loading, reduce_navigation};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// This function is PURE - no side effects, no I/O, no async.
/// All side effects are returned as `Effect` to be executed separately.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Navigation actions
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Data loading actions; Quit is handled by the event loop
    match reduce_data_loading(state, action) {
        Ok(result) => result,
        Err(state) => (state, Effect::None),
    }
}
