/// PointsChart widget - points scored per game as a line chart
///
/// The horizontal axis runs oldest game to newest and is labeled with a few
/// game dates. The vertical axis starts at zero.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType, Widget},
};

use crate::api::Game;
use crate::config::DisplayConfig;
use crate::layout_constants::{CHART_DATE_LABELS, CONTENT_MARGIN};
use crate::summary::points_series;
use crate::tui::widgets::{render_section_header, RenderableWidget};

/// Vertical axis maximum is rounded up to a multiple of this
const Y_STEP: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct PointsChart {
    pub title: String,
    /// (game index, points), oldest first
    pub points: Vec<(f64, f64)>,
    /// Game dates, oldest first, parallel to `points`
    pub dates: Vec<NaiveDate>,
}

impl PointsChart {
    /// Build from a most-recent-first game sequence
    pub fn from_games(title: impl Into<String>, games: &[Game]) -> Self {
        Self {
            title: title.into(),
            points: points_series(games),
            dates: games.iter().rev().map(|g| g.date).collect(),
        }
    }

    /// Upper bound of the vertical axis
    pub fn y_max(&self) -> f64 {
        let max = self.points.iter().map(|(_, y)| *y).fold(0.0, f64::max);
        ((max / Y_STEP).ceil() * Y_STEP).max(Y_STEP)
    }

    /// Upper bound of the horizontal axis
    fn x_max(&self) -> f64 {
        (self.points.len().saturating_sub(1) as f64).max(1.0)
    }

    /// Evenly spaced date labels, always including the first and last game
    pub fn date_labels(&self) -> Vec<String> {
        let n = self.dates.len();
        let indices: Vec<usize> = if n <= CHART_DATE_LABELS {
            (0..n).collect()
        } else {
            (0..CHART_DATE_LABELS)
                .map(|i| i * (n - 1) / (CHART_DATE_LABELS - 1))
                .collect()
        };
        indices
            .into_iter()
            .map(|i| self.dates[i].format("%m-%d").to_string())
            .collect()
    }

    fn y_labels(&self) -> Vec<String> {
        let max = self.y_max();
        vec!["0".to_string(), format!("{}", max / 2.0), format!("{}", max)]
    }
}

impl RenderableWidget for PointsChart {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width <= CONTENT_MARGIN || area.height == 0 {
            return;
        }

        let header_height =
            render_section_header(&self.title, CONTENT_MARGIN, area, area.y, buf, config);

        let chart_area = Rect {
            x: area.x + CONTENT_MARGIN,
            y: area.y + header_height,
            width: area.width - CONTENT_MARGIN,
            height: area.height.saturating_sub(header_height),
        };
        if chart_area.height < 3 || self.points.is_empty() {
            return;
        }

        let dataset = Dataset::default()
            .marker(if config.use_unicode {
                Marker::Braille
            } else {
                Marker::Dot
            })
            .graph_type(GraphType::Line)
            .style(Style::default().fg(config.chart_fg))
            .data(&self.points);

        let chart = Chart::new(vec![dataset])
            .x_axis(
                Axis::default()
                    .bounds([0.0, self.x_max()])
                    .labels(self.date_labels()),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, self.y_max()])
                    .labels(self.y_labels()),
            );

        chart.render(chart_area, buf);
    }
}
