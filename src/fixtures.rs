/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app without the stats service
///
/// The games are shaped like the service's answers: most-recent-first, with
/// TS% and eFG% filled in the way the service derives them from the box score.
use chrono::NaiveDate;

use crate::api::{Game, Location, SeasonAverage};

/// (date, opponent, location, min, pts, reb, ast, fga, fgm, fg3a, fg3m, fta, ftm)
type GameLine = (&'static str, &'static str, Location, u32, u32, u32, u32, u32, u32, u32, u32, u32, u32);

const MOCK_GAME_LINES: [GameLine; 20] = [
    ("2025-04-13", "POR", Location::Away, 33, 21, 6, 2, 14, 8, 5, 2, 4, 3),
    ("2025-04-11", "HOU", Location::Home, 35, 17, 7, 1, 13, 6, 4, 2, 3, 3),
    ("2025-04-09", "DAL", Location::Home, 31, 14, 5, 3, 11, 5, 3, 1, 3, 3),
    ("2025-04-08", "OKC", Location::Away, 36, 22, 8, 2, 16, 9, 6, 3, 1, 1),
    ("2025-04-06", "OKC", Location::Home, 34, 12, 4, 1, 12, 5, 4, 1, 2, 1),
    ("2025-04-04", "NOP", Location::Home, 29, 18, 6, 2, 12, 7, 3, 2, 2, 2),
    ("2025-04-02", "GSW", Location::Away, 32, 9, 5, 0, 10, 3, 4, 1, 2, 2),
    ("2025-03-31", "HOU", Location::Away, 37, 25, 9, 2, 17, 10, 5, 3, 3, 2),
    ("2025-03-29", "MEM", Location::Away, 30, 16, 3, 4, 11, 6, 5, 3, 1, 1),
    ("2025-03-28", "MEM", Location::Home, 28, 11, 6, 1, 9, 4, 2, 1, 2, 2),
    ("2025-03-26", "IND", Location::Home, 33, 20, 7, 3, 14, 8, 4, 2, 2, 2),
    ("2025-03-24", "ORL", Location::Home, 31, 15, 5, 2, 12, 6, 3, 1, 2, 2),
    ("2025-03-22", "CHI", Location::Away, 34, 19, 8, 1, 15, 7, 6, 3, 2, 2),
    ("2025-03-20", "MIL", Location::Home, 32, 13, 4, 2, 11, 5, 3, 1, 2, 2),
    ("2025-03-18", "DEN", Location::Home, 30, 8, 6, 1, 9, 3, 3, 0, 2, 2),
    ("2025-03-16", "PHX", Location::Away, 35, 23, 7, 3, 15, 9, 4, 2, 4, 3),
    ("2025-03-13", "MIL", Location::Away, 33, 17, 5, 2, 13, 7, 4, 2, 2, 1),
    ("2025-03-11", "BKN", Location::Away, 31, 14, 6, 1, 11, 5, 4, 2, 2, 2),
    ("2025-03-10", "NOP", Location::Home, 27, 10, 4, 2, 8, 4, 2, 1, 2, 1),
    ("2025-03-08", "BOS", Location::Home, 34, 19, 6, 2, 14, 7, 5, 3, 2, 2),
];

fn efg(fgm: u32, fg3m: u32, fga: u32) -> Option<f64> {
    if fga == 0 {
        return None;
    }
    Some((fgm as f64 + 0.5 * fg3m as f64) / fga as f64)
}

fn ts(pts: u32, fga: u32, fta: u32) -> Option<f64> {
    let denom = 2.0 * (fga as f64 + 0.44 * fta as f64);
    if denom == 0.0 {
        return None;
    }
    Some(pts as f64 / denom)
}

fn game_from_line(line: &GameLine) -> Game {
    let (date, opponent, location, min, pts, reb, ast, fga, fgm, fg3a, fg3m, fta, ftm) = *line;
    Game {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default(),
        opponent: opponent.to_string(),
        location,
        min,
        pts,
        reb,
        ast,
        fga,
        fgm,
        fg3a,
        fg3m,
        fta,
        ftm,
        ts: ts(pts, fga, fta),
        efg: efg(fgm, fg3m, fga),
    }
}

/// Create 20 mock games, most-recent-first
pub fn create_mock_games() -> Vec<Game> {
    MOCK_GAME_LINES.iter().map(game_from_line).collect()
}

/// Create mock season averages for 2024-25
pub fn create_mock_season_average() -> SeasonAverage {
    SeasonAverage {
        season: "2024-25".to_string(),
        gp: 41,
        mpg: 30.2,
        ppg: 18.5,
        rpg: 6.7,
        apg: 3.9,
        ts: Some(0.58),
        efg: Some(0.54),
    }
}

/// Create a game with an empty box score, for tests that set only what they check
pub fn create_test_game(date: &str, opponent: &str, location: Location) -> Game {
    Game {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default(),
        opponent: opponent.to_string(),
        location,
        min: 0,
        pts: 0,
        reb: 0,
        ast: 0,
        fga: 0,
        fgm: 0,
        fg3a: 0,
        fg3m: 0,
        fta: 0,
        ftm: 0,
        ts: None,
        efg: None,
    }
}
