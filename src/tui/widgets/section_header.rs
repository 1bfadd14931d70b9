//! Titles above each block of stats

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Draw `title` at row `y` with an underline of matching width beneath it
///
/// Returns how many rows were drawn, which is less than 2 when the area ends first.
pub fn render_section_header(
    title: &str,
    margin: u16,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    config: &DisplayConfig,
) -> u16 {
    let indent = " ".repeat(margin as usize);
    let underline = config.box_chars.horizontal.repeat(title.width());
    let style = Style::default().fg(config.header_fg);

    let mut drawn = 0;
    for line in [title, underline.as_str()] {
        let row = y + drawn;
        if row >= area.bottom() {
            break;
        }
        buf.set_stringn(
            area.x,
            row,
            format!("{}{}", indent, line),
            area.width as usize,
            style,
        );
        drawn += 1;
    }
    drawn
}
