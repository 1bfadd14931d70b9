//! Shared layout constants used across CLI and TUI components.

/// Left margin for summary grids and status messages
pub const CONTENT_MARGIN: u16 = 2;

/// Gap between a grid label column and its values
pub const LABEL_GAP: usize = 3;

/// Height of the tab bar (tab line + separator)
pub const TAB_BAR_HEIGHT: u16 = 2;

/// Height of the status bar (separator + message line)
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Number of date labels on the chart's horizontal axis
pub const CHART_DATE_LABELS: usize = 3;

/// Width of the widest bar in the CLI scoring trend
pub const TREND_BAR_WIDTH: usize = 40;
