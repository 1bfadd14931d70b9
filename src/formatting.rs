use crate::config::DisplayConfig;

/// Box-drawing characters for headers and separators
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_junction: String,
    pub bottom_junction: String,
    pub bar: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_junction: "┬".to_string(),
            bottom_junction: "┴".to_string(),
            bar: "█".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_junction: "+".to_string(),
            bottom_junction: "+".to_string(),
            bar: "#".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text length
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

/// Format a shooting fraction as a percentage with one decimal place
///
/// An absent value renders as "-" so that it never reads as "0.0%".
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "-".to_string(),
    }
}

/// Format makes and attempts as "makes-attempts"
pub fn format_makes_attempts(makes: u32, attempts: u32) -> String {
    format!("{}-{}", makes, attempts)
}

/// Format a per-game average the way the service sent it (shortest decimal form)
pub fn format_average(value: f64) -> String {
    format!("{}", value)
}
