use ratatui::{
    buffer::Buffer,
    layout::{Constraint as RatatuiConstraint, Layout as RatatuiLayout, Rect},
};

use super::component::{Constraint, Element};
use crate::config::DisplayConfig;

/// Renders virtual element tree to ratatui buffer
///
/// The Renderer takes a virtual Element tree produced by components
/// and renders it to the terminal using ratatui.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(&self, element: &Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        match element {
            Element::Widget(widget) => widget.render(area, buf, config),

            Element::Container { children, constraints } => {
                let chunks = RatatuiLayout::vertical(constraints.iter().map(|c| convert_constraint(*c)))
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    self.render(child, *chunk, buf, config);
                }
            }

            Element::None => {}
        }
    }
}

/// Convert our Constraint type to ratatui's Constraint
fn convert_constraint(constraint: Constraint) -> RatatuiConstraint {
    match constraint {
        Constraint::Length(n) => RatatuiConstraint::Length(n),
        Constraint::Min(n) => RatatuiConstraint::Min(n),
    }
}
