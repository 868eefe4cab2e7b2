pub mod interaction;
pub mod registry;

use std::fmt;

use crate::geometry::{Point, Rect, Size, Viewport};

pub use interaction::{
    EdgeSet, Gesture, InteractionController, PointerEvent, PointerKind, PointerTarget, ResizeEdge,
    WindowControl,
};
pub use registry::WindowRegistry;

/// Opaque window handle. Assigned by the registry from a counter and never
/// reused, even after the window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One open window. `C` is the hosted application's payload; the registry
/// stores it and hands it back but never looks inside.
#[derive(Debug, Clone)]
pub struct WindowRecord<C> {
    id: WindowId,
    app_id: String,
    title: String,
    content: C,
    position: Point,
    size: Size,
    is_minimized: bool,
    is_maximized: bool,
    z_index: u64,
}

impl<C> WindowRecord<C> {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.is_maximized
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    /// Stored geometry, independent of the maximized flag.
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Rectangle to paint and hit-test against. Maximized windows fill the
    /// viewport above its reserved strip; their stored geometry is untouched.
    pub fn frame(&self, viewport: &Viewport) -> Rect {
        if self.is_maximized {
            viewport.maximized_rect()
        } else {
            self.rect()
        }
    }
}

/// Partial geometry update, the channel drag and resize gestures write
/// through. Fields left `None` keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowPatch {
    pub position: Option<Point>,
    pub size: Option<Size>,
}

impl WindowPatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            size: None,
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            position: None,
            size: Some(size),
        }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }
}
