use crate::layout_constants::{STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::state::AppState;
use crate::tui::types::Tab;
use crate::tui::widgets::TabBar;

use super::{RecentGamesView, SeasonView, StatusBar};

/// Root App component
///
/// This is the top-level component that renders the entire application.
/// It uses the global AppState as props and delegates rendering to child components.
pub struct App;

impl Component for App {
    type Props = AppState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let content = match props.navigation.current_tab {
            Tab::RecentGames => RecentGamesView.view(&props.views.recent_games, &()),
            Tab::Season => SeasonView.view(&props.views.season, &()),
        };

        vertical(
            [
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ],
            vec![
                Element::widget(TabBar::new(props.navigation.current_tab)),
                content,
                StatusBar.view(props, &()),
            ],
        )
    }
}
