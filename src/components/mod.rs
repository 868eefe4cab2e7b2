use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub mod text_panel;

pub use text_panel::TextPanelComponent;

pub use crate::component_context::ComponentContext;

/// Hosted window content. The window layer treats it as opaque and only
/// asks it to draw into the visible part of its content area.
pub trait Component: std::fmt::Debug {
    fn render(&mut self, buffer: &mut Buffer, area: Rect, ctx: &ComponentContext);
}

impl<T: Component + ?Sized> Component for Box<T> {
    fn render(&mut self, buffer: &mut Buffer, area: Rect, ctx: &ComponentContext) {
        (**self).render(buffer, area, ctx)
    }
}
