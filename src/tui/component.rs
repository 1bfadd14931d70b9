use ratatui::{buffer::Buffer, layout::Rect};

use super::state::DisplayId;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Core component trait - like React.Component
///
/// Components are the building blocks of the UI. Each component:
/// - Has Props (input data, like React props)
/// - Has State (internal state, like useState)
/// - Renders to an Element tree (virtual DOM)
pub trait Component: Send {
    /// Props type for this component
    type Props: Clone;

    /// Local state type (if any)
    type State: Default + Clone + Send + Sync + 'static;

    /// Render component given props and state (pure function)
    fn view(&self, props: &Self::Props, state: &Self::State) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// Children stacked top to bottom, one constraint per child
    Container {
        children: Vec<Element>,
        constraints: Vec<Constraint>,
    },

    /// Nothing to render
    None,
}

impl Element {
    /// Wrap a widget as an element
    pub fn widget(widget: impl RenderableWidget + Clone + Send + Sync + 'static) -> Self {
        Element::Widget(Box::new(widget))
    }
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
}

/// Side effects to run after reducing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,

    /// Fetch the recent games for the view mounted as this display cycle
    FetchRecentGames(DisplayId),
    /// Fetch the season averages for the view mounted as this display cycle
    FetchSeasonAverage(DisplayId),
}

/// Trait for widgets that can be wrapped in the Element tree
///
/// Blanket-implemented for every `RenderableWidget` that can be cloned and
/// shared across threads, so widgets only implement `RenderableWidget`.
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl<W> ElementWidget for W
where
    W: RenderableWidget + Clone + Send + Sync + 'static,
{
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        RenderableWidget::render(self, area, buf, config);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        RenderableWidget::preferred_height(self)
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        constraints: constraints.to_vec(),
    }
}
