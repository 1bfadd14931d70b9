/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into framework Actions.
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::action::Action;
use super::types::Tab;

/// Handle global keys that work regardless of tab
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            debug!("KEY: Refresh requested");
            Some(Action::Refresh)
        }
        _ => None,
    }
}

/// Handle direct tab switching via number keys
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('1') => Some(Action::NavigateTab(Tab::RecentGames)),
        KeyCode::Char('2') => Some(Action::NavigateTab(Tab::Season)),
        _ => None,
    }
}

/// Handle tab cycling (Left/Right)
fn handle_tab_bar_navigation(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::NavigateTabLeft),
        KeyCode::Right => Some(Action::NavigateTabRight),
        _ => None,
    }
}

/// Convert a key event into an action
///
/// Returns None for keys that have no binding.
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    let key_code = key.code;

    handle_global_keys(key_code)
        .or_else(|| handle_number_keys(key_code))
        .or_else(|| handle_tab_bar_navigation(key_code))
}
