//! Shared component rendering context
//!
//! `ComponentContext` carries what a hosted component needs to know about
//! the window it is drawn into, so the component trait stays stable.

/// Context passed to `Component` trait methods.
///
/// - `focused`: whether the hosting window is the active one.
/// - `hidden`: columns and rows of the content area that hang off the left
///   and top of the screen and were clipped away before drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentContext {
    focused: bool,
    hidden: (u16, u16),
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            hidden: (0, 0),
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// `(columns, rows)` clipped off the leading edges.
    pub const fn hidden(&self) -> (u16, u16) {
        self.hidden
    }

    pub const fn with_hidden(mut self, cols: u16, rows: u16) -> Self {
        self.hidden = (cols, rows);
        self
    }
}
