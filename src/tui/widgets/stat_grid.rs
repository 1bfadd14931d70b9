/// StatGrid widget - a titled column of labeled values
///
/// Used for the latest-game card and the season summary. Values line up in a
/// single column after the widest label.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;
use crate::layout_constants::{CONTENT_MARGIN, LABEL_GAP};
use crate::summary::{label_width, StatRow};
use crate::tui::widgets::{render_section_header, RenderableWidget};

#[derive(Debug, Clone)]
pub struct StatGrid {
    pub title: String,
    pub rows: Vec<StatRow>,
}

impl StatGrid {
    pub fn new(title: impl Into<String>, rows: Vec<StatRow>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }

    fn format_row(row: &StatRow, width: usize) -> String {
        format!(
            "{}{:<width$}{}{}",
            " ".repeat(CONTENT_MARGIN as usize),
            row.label,
            " ".repeat(LABEL_GAP),
            row.value,
            width = width
        )
    }
}

impl RenderableWidget for StatGrid {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut y = area.y;
        y += render_section_header(&self.title, CONTENT_MARGIN, area, y, buf, config);

        let width = label_width(&self.rows);
        for row in &self.rows {
            if y >= area.bottom() {
                break;
            }
            let line = Self::format_row(row, width);
            buf.set_stringn(area.x, y, &line, area.width as usize, Style::default());
            y += 1;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        // Header, underline, rows, trailing blank line
        Some(self.rows.len() as u16 + 3)
    }
}
