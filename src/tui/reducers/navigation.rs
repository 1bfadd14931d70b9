use tracing::{debug, trace};

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::{AppState, ViewInstance};
use crate::tui::types::Tab;

/// Handle all navigation-related actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::NavigateTab(tab) => Ok(navigate_to_tab(state, *tab)),
        Action::NavigateTabLeft => {
            let tab = state.navigation.current_tab.prev();
            Ok(navigate_to_tab(state, tab))
        }
        Action::NavigateTabRight => {
            let tab = state.navigation.current_tab.next();
            Ok(navigate_to_tab(state, tab))
        }
        Action::Refresh => {
            let tab = state.navigation.current_tab;
            debug!("NAV: Refreshing {:?}", tab);
            Ok(mount_view(state, tab))
        }
        _ => Err(state),
    }
}

fn navigate_to_tab(state: AppState, tab: Tab) -> (AppState, Effect) {
    if state.navigation.current_tab == tab && state.views.is_mounted(tab) {
        trace!("NAV: {:?} already displayed", tab);
        return (state, Effect::None);
    }
    trace!("NAV: Navigating to tab: {:?}", tab);
    mount_view(state, tab)
}

/// Start a new display cycle for `tab`
///
/// Every mounted view is torn down first, so at most one view exists and any
/// fetch still in flight for an old instance no longer has a matching id.
fn mount_view(state: AppState, tab: Tab) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.views.teardown_all();
    new_state.navigation.current_tab = tab;

    let display_id = new_state.navigation.allocate_display_id();
    debug!("NAV: Mounting {:?} as {:?}", tab, display_id);

    let effect = match tab {
        Tab::RecentGames => {
            new_state.views.recent_games = Some(ViewInstance::loading(display_id));
            Effect::FetchRecentGames(display_id)
        }
        Tab::Season => {
            new_state.views.season = Some(ViewInstance::loading(display_id));
            Effect::FetchSeasonAverage(display_id)
        }
    };

    (new_state, effect)
}
