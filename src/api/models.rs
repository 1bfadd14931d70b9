use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a game was played, from the player's team point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Away,
}

impl Location {
    /// Prefix used in front of the opponent: "vs" at home, "@" on the road
    pub fn matchup_prefix(self) -> &'static str {
        match self {
            Location::Home => "vs",
            Location::Away => "@",
        }
    }
}

/// One game's box-score line for the player
///
/// Makes never exceed attempts; the service guarantees this and it is not
/// re-checked here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Game {
    pub date: NaiveDate,
    pub opponent: String,
    pub location: Location,
    pub min: u32,
    pub pts: u32,
    pub reb: u32,
    pub ast: u32,
    pub fga: u32,
    pub fgm: u32,
    pub fg3a: u32,
    pub fg3m: u32,
    pub fta: u32,
    pub ftm: u32,
    /// True-shooting percentage as a fraction, absent when undefined
    pub ts: Option<f64>,
    /// Effective field-goal percentage as a fraction, absent when undefined
    pub efg: Option<f64>,
}

/// Per-game averages over one season
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeasonAverage {
    pub season: String,
    pub gp: u32,
    pub mpg: f64,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub ts: Option<f64>,
    pub efg: Option<f64>,
}
