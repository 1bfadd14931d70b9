/// Screenshot utilities for capturing terminal output
///
/// Saves the rendered dashboard as a plain text file, handy for bug reports.

use std::fs::File;
use std::io::{self, Write};
use ratatui::{buffer::Buffer, layout::Rect};

/// Write the given area of a buffer to `filename`, one line per row
pub fn save_buffer_screenshot(
    buffer: &Buffer,
    area: Rect,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    write_buffer(buffer, area, &mut file)
}

fn write_buffer(buffer: &Buffer, area: Rect, out: &mut impl Write) -> io::Result<()> {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            write!(out, "{}", buffer[(x, y)].symbol())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Timestamped screenshot filename in the current directory
pub fn screenshot_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("ruistats-screenshot-{}.txt", timestamp)
}
