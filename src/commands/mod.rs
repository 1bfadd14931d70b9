pub mod games;
pub mod season;

use crate::layout_constants::{CONTENT_MARGIN, LABEL_GAP};
use crate::summary::{label_width, StatRow};

/// Format summary rows as an indented, aligned label/value block
pub fn format_stat_rows(rows: &[StatRow]) -> String {
    let width = label_width(rows);
    let margin = " ".repeat(CONTENT_MARGIN as usize);
    let gap = " ".repeat(LABEL_GAP);

    rows.iter()
        .map(|row| format!("{}{:<width$}{}{}\n", margin, row.label, gap, row.value, width = width))
        .collect()
}
