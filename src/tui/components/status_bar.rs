use crate::tui::component::{Component, Element};
use crate::tui::state::{AppState, KEY_HELP};
use crate::tui::types::Tab;
use crate::tui::widgets::StatusBar as StatusBarWidget;

/// StatusBar component - key help on the left, the current view's query on
/// the right
pub struct StatusBar;

impl Component for StatusBar {
    type Props = AppState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let system = &props.system;
        let context = match props.navigation.current_tab {
            Tab::RecentGames => format!("last {} games", system.games_limit),
            Tab::Season => system.season.clone(),
        };
        Element::widget(StatusBarWidget::new(KEY_HELP).with_context(context))
    }
}
