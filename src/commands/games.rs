use anyhow::{Context, Result};

use crate::api::Game;
use crate::commands::format_stat_rows;
use crate::config::DisplayConfig;
use crate::data_provider::StatsProvider;
use crate::formatting::format_header;
use crate::layout_constants::{CONTENT_MARGIN, TREND_BAR_WIDTH};
use crate::summary::{chronological, latest_game, latest_game_rows, matchup, NO_GAMES_MESSAGE};

/// Width of the matchup column in the trend ("vs POR")
const MATCHUP_COL_WIDTH: usize = 6;

/// Bar length for `pts` when `max_pts` fills the whole trend width
fn bar_length(pts: u32, max_pts: u32) -> usize {
    if max_pts == 0 {
        return 0;
    }
    ((pts as f64 / max_pts as f64) * TREND_BAR_WIDTH as f64).round() as usize
}

/// One line per game, oldest first, with a bar proportional to points
pub fn format_trend(games: &[Game], display: &DisplayConfig) -> String {
    let max_pts = games.iter().map(|g| g.pts).max().unwrap_or(0);
    let margin = " ".repeat(CONTENT_MARGIN as usize);

    chronological(games)
        .iter()
        .map(|game| {
            let bar = display.box_chars.bar.repeat(bar_length(game.pts, max_pts));
            let line = format!(
                "{}{}  {:<width$}  {} {}",
                margin,
                game.date.format("%m-%d"),
                matchup(game),
                bar,
                game.pts,
                width = MATCHUP_COL_WIDTH
            );
            format!("{}\n", line.trim_end())
        })
        .collect()
}

/// Latest game summary followed by the scoring trend
pub fn format_games(games: &[Game], display: &DisplayConfig) -> String {
    let Some(latest) = latest_game(games) else {
        return format!("{}\n", NO_GAMES_MESSAGE);
    };

    let mut output = String::new();
    output.push_str(&format_header("Latest Game", true, display));
    output.push_str(&format_stat_rows(&latest_game_rows(latest)));
    output.push('\n');
    output.push_str(&format_header(
        &format!("Points per Game (last {})", games.len()),
        false,
        display,
    ));
    output.push_str(&format_trend(games, display));
    output
}

pub async fn run(client: &dyn StatsProvider, limit: u32, display: &DisplayConfig) -> Result<()> {
    let games = client
        .recent_games(limit)
        .await
        .with_context(|| format!("Failed to fetch the last {} games", limit))?;

    print!("{}", format_games(&games, display));
    Ok(())
}
