/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use crate::config::DisplayConfig;
use crate::formatting::BoxChars;
use super::RenderableWidget;

/// Create a test DisplayConfig with unicode box characters
///
/// This provides consistent theming for tests.
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        use_unicode: true,
        selection_fg: Color::Rgb(253, 185, 39),
        header_fg: Color::Rgb(159, 226, 191),
        error_fg: Color::Red,
        chart_fg: Color::Rgb(253, 185, 39),
        box_chars: BoxChars::unicode(),
    }
}

/// Create a test DisplayConfig with ASCII box characters
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        box_chars: BoxChars::ascii(),
        ..test_config()
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Convert a buffer to a string representation for snapshot testing
///
/// Each line of the buffer is converted to a string, preserving spacing.
pub fn buffer_to_string(buf: &Buffer) -> String {
    (0..buf.area().height)
        .map(|y| buffer_line(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    (0..area.width).map(|x| buf[(x, line)].symbol()).collect()
}

/// Find the (x, y) of the first cell of `needle`, scanning line by line
pub fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    (0..buf.area().height).find_map(|y| {
        let line = buffer_line(buf, y);
        line.find(needle)
            .map(|byte_idx| (line[..byte_idx].chars().count() as u16, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Hello".to_string(),
        };

        let buf = render_widget(&widget, 10, 1);

        assert_eq!(buf[(0, 0)].symbol(), "H");
        assert_eq!(buf[(4, 0)].symbol(), "o");
    }

    #[test]
    fn test_buffer_to_string() {
        let widget = TestWidget {
            text: "Hi".to_string(),
        };

        let buf = render_widget(&widget, 4, 2);

        assert_eq!(buffer_to_string(&buf), "Hi  \n    ");
    }

    #[test]
    fn test_find_text_counts_cells_not_bytes() {
        let widget = TestWidget {
            text: "──ab".to_string(),
        };

        let buf = render_widget(&widget, 6, 1);

        assert_eq!(find_text(&buf, "ab"), Some((2, 0)));
        assert_eq!(find_text(&buf, "zz"), None);
    }
}
