/// StatusBar widget - displays status information at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with a connector aligned to the vertical bar
/// - Bottom line: left message │ right context label

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    pub message: String,
    /// Short label on the right, e.g. which data the current view shows
    pub context: String,
}

impl StatusBar {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: String::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Column of the vertical bar: room for " context " on its right
    fn bar_position(&self, area_width: u16) -> u16 {
        area_width.saturating_sub(self.context.width() as u16 + 3)
    }

    /// Build the top separator line with connector
    fn build_separator_line(&self, area_width: usize, bar_position: u16, config: &DisplayConfig) -> String {
        let left_part = config.box_chars.horizontal.repeat(bar_position as usize);
        let right_part = config
            .box_chars
            .horizontal
            .repeat(area_width.saturating_sub(bar_position as usize + 1));
        format!("{}{}{}", left_part, config.box_chars.top_junction, right_part)
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let bar_position = self.bar_position(area.width);

        let separator = self.build_separator_line(area.width as usize, bar_position, config);
        buf.set_stringn(area.x, area.y, &separator, area.width as usize, Style::default());

        // Left side: status message with 1 char margin, clipped before the bar
        if bar_position > 2 {
            buf.set_stringn(
                area.x + 1,
                area.y + 1,
                &self.message,
                (bar_position - 2) as usize,
                Style::default(),
            );
        }

        // Right side: vertical bar + context + margin
        let right = format!("{} {} ", config.box_chars.vertical, self.context);
        buf.set_stringn(
            area.x + bar_position,
            area.y + 1,
            &right,
            (area.width - bar_position) as usize,
            Style::default(),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
