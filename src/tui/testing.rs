//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use std::sync::Arc;

use crate::api::{ApiError, Game, SeasonAverage};
use crate::data_provider::StatsProvider;
use crate::fixtures::{create_mock_games, create_mock_season_average};

/// Provider with canned answers
///
/// A `None` payload answers with `ApiError::Http` carrying `status`.
#[derive(Debug, Clone)]
pub struct StubProvider {
    pub games: Option<Vec<Game>>,
    pub season: Option<SeasonAverage>,
    pub status: u16,
}

impl StubProvider {
    /// Answers with the fixture games and season averages
    pub fn ok() -> Self {
        Self {
            games: Some(create_mock_games()),
            season: Some(create_mock_season_average()),
            status: 200,
        }
    }

    /// Answers every request with the given HTTP error status
    pub fn failing(status: u16) -> Self {
        Self {
            games: None,
            season: None,
            status,
        }
    }

    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            games: Some(games),
            ..Self::ok()
        }
    }
}

#[async_trait]
impl StatsProvider for StubProvider {
    async fn recent_games(&self, limit: u32) -> Result<Vec<Game>, ApiError> {
        match &self.games {
            Some(games) => Ok(games.iter().take(limit as usize).cloned().collect()),
            None => Err(ApiError::Http {
                status: self.status,
            }),
        }
    }

    async fn season_average(&self, _season: &str) -> Result<SeasonAverage, ApiError> {
        self.season.clone().ok_or(ApiError::Http {
            status: self.status,
        })
    }
}

/// Creates an Arc-wrapped provider answering with fixture data.
pub fn create_client() -> Arc<dyn StatsProvider> {
    Arc::new(StubProvider::ok())
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// All buffer lines joined with newlines, right-trimmed
pub fn buffer_text(buf: &Buffer) -> String {
    buffer_lines(buf)
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_ok_truncates_to_limit() {
        let games = StubProvider::ok().recent_games(5).await.expect("games");
        assert_eq!(games.len(), 5);
    }

    #[tokio::test]
    async fn test_stub_failing_reports_status() {
        let stub = StubProvider::failing(503);

        let err = stub.recent_games(20).await.expect_err("should fail");
        assert!(matches!(err, ApiError::Http { status: 503 }));

        let err = stub.season_average("2024-25").await.expect_err("should fail");
        assert_eq!(err.to_string(), "HTTP 503");
    }
}
