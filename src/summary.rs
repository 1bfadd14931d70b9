//! Presentation-ready views of the fetched records.
//!
//! Shared by the TUI widgets and the CLI commands so both surfaces label and
//! format the same numbers the same way.

use crate::api::{Game, SeasonAverage};
use crate::formatting::{format_average, format_makes_attempts, format_percentage};
use crate::team_abbrev::abbrev_to_name;

/// A labeled value in a summary grid
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: String,
}

impl StatRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Shown in place of a latest game when the service returned none
pub const NO_GAMES_MESSAGE: &str = "No games available";

/// The latest game of a most-recent-first sequence, None when empty
pub fn latest_game(games: &[Game]) -> Option<&Game> {
    games.first()
}

/// Reverse a most-recent-first sequence into oldest-first order
pub fn chronological(games: &[Game]) -> Vec<Game> {
    games.iter().rev().cloned().collect()
}

/// (game index, points) pairs in oldest-first order, for charting
pub fn points_series(games: &[Game]) -> Vec<(f64, f64)> {
    games
        .iter()
        .rev()
        .enumerate()
        .map(|(i, game)| (i as f64, game.pts as f64))
        .collect()
}

/// "vs POR" for home games, "@ POR" for away games
pub fn matchup(game: &Game) -> String {
    format!("{} {}", game.location.matchup_prefix(), game.opponent)
}

/// Matchup followed by the opponent's full name when it is known
pub fn matchup_with_name(game: &Game) -> String {
    match abbrev_to_name(&game.opponent) {
        Some(name) => format!("{} ({})", matchup(game), name),
        None => matchup(game),
    }
}

/// Summary rows for a single game
pub fn latest_game_rows(game: &Game) -> Vec<StatRow> {
    vec![
        StatRow::new("Date", game.date.format("%Y-%m-%d").to_string()),
        StatRow::new("Matchup", matchup_with_name(game)),
        StatRow::new("MIN", game.min.to_string()),
        StatRow::new(
            "PTS / REB / AST",
            format!("{} / {} / {}", game.pts, game.reb, game.ast),
        ),
        StatRow::new("FG", format_makes_attempts(game.fgm, game.fga)),
        StatRow::new(
            "3PT / FT",
            format!(
                "{} / {}",
                format_makes_attempts(game.fg3m, game.fg3a),
                format_makes_attempts(game.ftm, game.fta)
            ),
        ),
        StatRow::new(
            "TS% / eFG%",
            format!("{} / {}", format_percentage(game.ts), format_percentage(game.efg)),
        ),
    ]
}

/// Summary rows for one season's averages
pub fn season_rows(avg: &SeasonAverage) -> Vec<StatRow> {
    vec![
        StatRow::new("Season", avg.season.clone()),
        StatRow::new("Games", avg.gp.to_string()),
        StatRow::new("MPG", format_average(avg.mpg)),
        StatRow::new("PPG", format_average(avg.ppg)),
        StatRow::new("RPG", format_average(avg.rpg)),
        StatRow::new("APG", format_average(avg.apg)),
        StatRow::new("TS%", format_percentage(avg.ts)),
        StatRow::new("eFG%", format_percentage(avg.efg)),
    ]
}

/// Width of the widest label, for aligning values in a column
pub fn label_width(rows: &[StatRow]) -> usize {
    rows.iter().map(|r| r.label.len()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Location;
    use crate::fixtures::{create_mock_games, create_mock_season_average, create_test_game};

    fn value<'a>(rows: &'a [StatRow], label: &str) -> &'a str {
        rows.iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
            .unwrap_or_else(|| panic!("no row labeled {}", label))
    }

    #[test]
    fn test_latest_game_of_empty_sequence() {
        assert!(latest_game(&[]).is_none());
    }

    #[test]
    fn test_latest_game_is_first_element() {
        let games = create_mock_games();
        assert_eq!(latest_game(&games), Some(&games[0]));
    }

    #[test]
    fn test_chronological_reverses_exactly() {
        let games = create_mock_games();
        let oldest_first = chronological(&games);

        assert_eq!(oldest_first.len(), games.len());
        assert_eq!(oldest_first.first(), games.last());
        assert_eq!(oldest_first.last(), games.first());
        assert_eq!(chronological(&oldest_first), games);
    }

    #[test]
    fn test_points_series_is_oldest_first() {
        let mut newest = create_test_game("2025-03-03", "DEN", Location::Home);
        newest.pts = 30;
        let mut oldest = create_test_game("2025-03-01", "UTA", Location::Away);
        oldest.pts = 10;

        let series = points_series(&[newest, oldest]);

        assert_eq!(series, vec![(0.0, 10.0), (1.0, 30.0)]);
    }

    #[test]
    fn test_matchup_prefix_by_location() {
        let home = create_test_game("2025-03-01", "POR", Location::Home);
        let away = create_test_game("2025-03-01", "POR", Location::Away);

        assert_eq!(matchup(&home), "vs POR");
        assert_eq!(matchup(&away), "@ POR");
    }

    #[test]
    fn test_matchup_with_unknown_team_has_no_name() {
        let game = create_test_game("2025-03-01", "XYZ", Location::Away);
        assert_eq!(matchup_with_name(&game), "@ XYZ");

        let game = create_test_game("2025-03-01", "POR", Location::Home);
        assert_eq!(matchup_with_name(&game), "vs POR (Portland Trail Blazers)");
    }

    #[test]
    fn test_latest_game_rows() {
        let mut game = create_test_game("2025-04-13", "POR", Location::Away);
        game.pts = 21;
        game.reb = 6;
        game.ast = 2;
        game.fgm = 8;
        game.fga = 14;
        game.fg3m = 2;
        game.fg3a = 5;
        game.ftm = 3;
        game.fta = 4;
        game.ts = Some(0.612);
        game.efg = None;

        let rows = latest_game_rows(&game);

        assert_eq!(value(&rows, "Date"), "2025-04-13");
        assert_eq!(value(&rows, "PTS / REB / AST"), "21 / 6 / 2");
        assert_eq!(value(&rows, "FG"), "8-14");
        assert_eq!(value(&rows, "3PT / FT"), "2-5 / 3-4");
        assert_eq!(value(&rows, "TS% / eFG%"), "61.2% / -");
    }

    #[test]
    fn test_zero_percentage_differs_from_absent_in_game_rows() {
        let mut zero = create_test_game("2025-04-13", "POR", Location::Home);
        zero.ts = Some(0.0);
        zero.efg = Some(0.0);
        let mut absent = zero.clone();
        absent.ts = None;
        absent.efg = None;

        assert_eq!(value(&latest_game_rows(&zero), "TS% / eFG%"), "0.0% / 0.0%");
        assert_eq!(value(&latest_game_rows(&absent), "TS% / eFG%"), "- / -");
    }

    #[test]
    fn test_season_rows() {
        let rows = season_rows(&create_mock_season_average());

        assert_eq!(value(&rows, "Season"), "2024-25");
        assert_eq!(value(&rows, "Games"), "41");
        assert_eq!(value(&rows, "MPG"), "30.2");
        assert_eq!(value(&rows, "PPG"), "18.5");
        assert_eq!(value(&rows, "RPG"), "6.7");
        assert_eq!(value(&rows, "APG"), "3.9");
        assert_eq!(value(&rows, "TS%"), "58.0%");
        assert_eq!(value(&rows, "eFG%"), "54.0%");
    }

    #[test]
    fn test_season_rows_absent_percentages() {
        let mut avg = create_mock_season_average();
        avg.ts = None;
        avg.efg = None;

        let rows = season_rows(&avg);

        assert_eq!(value(&rows, "TS%"), "-");
        assert_eq!(value(&rows, "eFG%"), "-");
    }

    #[test]
    fn test_label_width() {
        let rows = season_rows(&create_mock_season_average());
        assert_eq!(label_width(&rows), "Season".len());
        assert_eq!(label_width(&[]), 0);
    }
}
