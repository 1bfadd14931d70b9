use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;

use crate::api::DEFAULT_API_BASE;
use crate::formatting::BoxChars;

/// Environment variable that overrides `api_base`
pub const API_BASE_ENV: &str = "RUISTATS_API_BASE";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub api_base: String,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub header_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub chart_fg: Color,
    /// Derived from `use_unicode` after loading
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            selection_fg: Color::Rgb(253, 185, 39),
            header_fg: Color::Rgb(159, 226, 191),
            error_fg: Color::Red,
            chart_fg: Color::Rgb(253, 185, 39),
            box_chars: BoxChars::unicode(),
        }
    }
}

impl Config {
    /// Apply the API base override, ignoring empty values
    pub fn with_api_base_override(mut self, api_base: Option<String>) -> Self {
        if let Some(base) = api_base {
            let base = base.trim();
            if !base.is_empty() {
                self.api_base = base.to_string();
            }
        }
        self
    }

    fn sync_box_chars(mut self) -> Self {
        self.display.box_chars = BoxChars::from_use_unicode(self.display.use_unicode);
        self
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color name, `#rrggbb`/`#rgb` hex code, or `r,g,b` triple
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();
    named_color(&s)
        .or_else(|| s.strip_prefix('#').and_then(hex_color))
        .or_else(|| rgb_triple(&s))
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        // Lakers colors
        "gold" => Color::Rgb(253, 185, 39),
        "purple" => Color::Rgb(85, 37, 130),
        _ => return None,
    };
    Some(color)
}

fn hex_color(hex: &str) -> Option<Color> {
    let expanded: String = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn rgb_triple(s: &str) -> Option<Color> {
    let channels = s
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
        _ => None,
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Parse a config file's contents, falling back to defaults on error
pub fn parse(content: &str) -> Config {
    toml::from_str::<Config>(content)
        .unwrap_or_else(|_| Config::default())
        .sync_box_chars()
}

fn read_file() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    match fs::read_to_string(&config_path) {
        Ok(content) => parse(&content),
        Err(_) => Config::default(),
    }
}

/// Read the config file and apply the `RUISTATS_API_BASE` override
pub fn read() -> Config {
    read_file().with_api_base_override(std::env::var(API_BASE_ENV).ok())
}
