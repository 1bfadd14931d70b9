/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small, focused components that render themselves directly into
/// a ratatui Buffer and are composed by the components into full views.

#[cfg(test)]
pub mod testing;

pub mod fetch_status;
pub mod points_chart;
pub mod section_header;
pub mod stat_grid;
pub mod status_bar;
pub mod tab_bar;

pub use fetch_status::FetchStatus;
pub use points_chart::PointsChart;
pub use section_header::render_section_header;
pub use stat_grid::StatGrid;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations. This enables:
/// - Direct styling without character position calculations
/// - Composability (widgets can contain other widgets)
/// - Testability (can render to test buffers)
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    /// Returns Some(height) if the widget has a fixed or preferred height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
