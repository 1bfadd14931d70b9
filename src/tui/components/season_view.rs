use crate::api::SeasonAverage;
use crate::summary::season_rows;
use crate::tui::component::{Component, Element};
use crate::tui::state::{FetchState, ViewInstance};
use crate::tui::widgets::{FetchStatus, StatGrid};

/// Season summary view - one season's per-game averages
pub struct SeasonView;

impl Component for SeasonView {
    type Props = Option<ViewInstance<SeasonAverage>>;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let Some(view) = props else {
            return Element::None;
        };

        match &view.fetch {
            FetchState::Loading => Element::widget(FetchStatus::Loading),
            FetchState::Failure(message) => Element::widget(FetchStatus::Error(message.clone())),
            FetchState::Success(avg) => {
                Element::widget(StatGrid::new("Season Averages", season_rows(avg)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_season_average;
    use crate::tui::renderer::Renderer;
    use crate::tui::state::DisplayId;
    use crate::tui::testing::buffer_text;
    use crate::tui::widgets::testing::test_config;
    use ratatui::{buffer::Buffer, layout::Rect};
    use std::sync::Arc;

    fn render(fetch: FetchState<SeasonAverage>) -> String {
        let props = Some(ViewInstance {
            display_id: DisplayId(0),
            fetch,
        });
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        Renderer::new().render(&SeasonView.view(&props, &()), area, &mut buf, &test_config());
        buffer_text(&buf)
    }

    #[test]
    fn test_success_shows_averages() {
        let text = render(FetchState::Success(Arc::new(create_mock_season_average())));

        assert!(text.contains("Season   2024-25"));
        assert!(text.contains("PPG      18.5"));
        assert!(text.contains("TS%      58.0%"));
        assert!(text.contains("eFG%     54.0%"));
    }

    #[test]
    fn test_absent_percentages_render_as_dash() {
        let mut avg = create_mock_season_average();
        avg.ts = None;
        let text = render(FetchState::Success(Arc::new(avg)));

        assert!(text.contains("TS%      -"));
        assert!(!text.contains("TS%      0.0%"));
    }

    #[test]
    fn test_failure() {
        let text = render(FetchState::Failure("HTTP 404".to_string()));

        assert!(text.contains("Error: HTTP 404"));
        assert!(!text.contains("Season Averages"));
    }

    #[test]
    fn test_loading() {
        assert!(render(FetchState::Loading).contains("Loading..."));
    }
}
