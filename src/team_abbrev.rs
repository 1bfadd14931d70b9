use phf::phf_map;

/// NBA team abbreviations as sent by the stats service, mapped to full names
static NBA_TEAMS: phf::Map<&'static str, &'static str> = phf_map! {
    "ATL" => "Atlanta Hawks",
    "BOS" => "Boston Celtics",
    "BKN" => "Brooklyn Nets",
    "CHA" => "Charlotte Hornets",
    "CHI" => "Chicago Bulls",
    "CLE" => "Cleveland Cavaliers",
    "DAL" => "Dallas Mavericks",
    "DEN" => "Denver Nuggets",
    "DET" => "Detroit Pistons",
    "GSW" => "Golden State Warriors",
    "HOU" => "Houston Rockets",
    "IND" => "Indiana Pacers",
    "LAC" => "LA Clippers",
    "LAL" => "Los Angeles Lakers",
    "MEM" => "Memphis Grizzlies",
    "MIA" => "Miami Heat",
    "MIL" => "Milwaukee Bucks",
    "MIN" => "Minnesota Timberwolves",
    "NOP" => "New Orleans Pelicans",
    "NYK" => "New York Knicks",
    "OKC" => "Oklahoma City Thunder",
    "ORL" => "Orlando Magic",
    "PHI" => "Philadelphia 76ers",
    "PHX" => "Phoenix Suns",
    "POR" => "Portland Trail Blazers",
    "SAC" => "Sacramento Kings",
    "SAS" => "San Antonio Spurs",
    "TOR" => "Toronto Raptors",
    "UTA" => "Utah Jazz",
    "WAS" => "Washington Wizards",
};

/// Map a team abbreviation (e.g. "POR") to the team's full name
///
/// Lookup is case-insensitive; unknown abbreviations return None.
pub fn abbrev_to_name(abbrev: &str) -> Option<&'static str> {
    NBA_TEAMS
        .get(abbrev.trim().to_uppercase().as_str())
        .copied()
}
