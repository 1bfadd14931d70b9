use crate::api::Game;
use crate::summary::{latest_game, latest_game_rows, NO_GAMES_MESSAGE};
use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::state::{FetchState, ViewInstance};
use crate::tui::widgets::{FetchStatus, PointsChart, RenderableWidget, StatGrid};

/// Recent games view - the latest game's line and a points-per-game chart
///
/// Renders nothing when the view is not mounted.
pub struct RecentGamesView;

impl Component for RecentGamesView {
    type Props = Option<ViewInstance<Vec<Game>>>;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let Some(view) = props else {
            return Element::None;
        };

        match &view.fetch {
            FetchState::Loading => Element::widget(FetchStatus::Loading),
            FetchState::Failure(message) => Element::widget(FetchStatus::Error(message.clone())),
            FetchState::Success(games) => match latest_game(games) {
                None => Element::widget(FetchStatus::Empty(NO_GAMES_MESSAGE.to_string())),
                Some(latest) => {
                    let grid = StatGrid::new("Latest Game", latest_game_rows(latest));
                    let chart = PointsChart::from_games(
                        format!("Points per Game (last {})", games.len()),
                        games,
                    );
                    vertical(
                        [
                            Constraint::Length(grid.preferred_height().unwrap_or(0)),
                            Constraint::Min(0),
                        ],
                        vec![Element::widget(grid), Element::widget(chart)],
                    )
                }
            },
        }
    }
}
