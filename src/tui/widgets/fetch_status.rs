/// FetchStatus widget - a single-line placeholder shown instead of a view's data
///
/// Covers the three states where there is nothing to chart or tabulate:
/// the fetch is pending, it failed, or it succeeded with nothing in it.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;
use crate::layout_constants::CONTENT_MARGIN;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Loading,
    Error(String),
    Empty(String),
}

impl FetchStatus {
    fn text(&self) -> String {
        match self {
            FetchStatus::Loading => "Loading...".to_string(),
            FetchStatus::Error(message) => format!("Error: {}", message),
            FetchStatus::Empty(message) => message.clone(),
        }
    }

    fn style(&self, config: &DisplayConfig) -> Style {
        match self {
            FetchStatus::Error(_) => Style::default().fg(config.error_fg),
            _ => Style::default(),
        }
    }
}

impl RenderableWidget for FetchStatus {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width <= CONTENT_MARGIN || area.height < 2 {
            return;
        }
        // One blank line above, indented like the grids
        buf.set_stringn(
            area.x + CONTENT_MARGIN,
            area.y + 1,
            self.text(),
            (area.width - CONTENT_MARGIN) as usize,
            self.style(config),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
