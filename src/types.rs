/// Shared types used across the application
///
/// This module contains constants that are shared between
/// the library (commands, tui) and the binary (main.rs).

/// Number of games requested for the recent-games view
pub const RECENT_GAMES_LIMIT: u32 = 20;

/// Season requested for the season-summary view
pub const DEFAULT_SEASON: &str = "2024-25";

/// Upper bound accepted by the stats service for `limit`
pub const MAX_GAMES_LIMIT: u32 = 100;
