//! Pointer gesture state machine.
//!
//! The controller owns at most one gesture at a time. A pointer-down on a
//! title bar starts a drag, a pointer-down on one of the eight resize handles
//! starts a resize, every subsequent move turns into exactly one
//! [`WindowRegistry::update`] call, and pointer-up ends the gesture wherever
//! the pointer happens to be.

use std::time::{Duration, Instant};

use super::{WindowId, WindowPatch, WindowRegistry};
use crate::constants::DOUBLE_CLICK_WINDOW;
use crate::geometry::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::Left,
        ResizeEdge::Right,
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::TopLeft,
        ResizeEdge::TopRight,
        ResizeEdge::BottomLeft,
        ResizeEdge::BottomRight,
    ];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeEdge::TopLeft
                | ResizeEdge::TopRight
                | ResizeEdge::BottomLeft
                | ResizeEdge::BottomRight
        )
    }

    /// Sides this handle moves. Corners move two.
    pub fn edges(self) -> EdgeSet {
        let mut set = EdgeSet::default();
        match self {
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft => set.left = true,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight => set.right = true,
            _ => {}
        }
        match self {
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight => set.top = true,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight => {
                set.bottom = true
            }
            _ => {}
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct EdgeSet {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeSet {
    /// Whether a resize along these edges also moves the window origin.
    pub fn moves_origin(&self) -> bool {
        self.left || self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowControl {
    Minimize,
    Maximize,
    Close,
}

/// What the host found under the pointer when the button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    TitleBar(WindowId),
    ResizeHandle(WindowId, ResizeEdge),
    Control(WindowId, WindowControl),
    Body(WindowId),
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down(PointerTarget),
    Move,
    Up,
}

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub point: Point,
    pub at: Instant,
}

impl PointerEvent {
    pub fn down(target: PointerTarget, point: Point) -> Self {
        Self::down_at(target, point, Instant::now())
    }

    pub fn down_at(target: PointerTarget, point: Point, at: Instant) -> Self {
        Self {
            kind: PointerKind::Down(target),
            point,
            at,
        }
    }

    pub fn moved(point: Point) -> Self {
        Self {
            kind: PointerKind::Move,
            point,
            at: Instant::now(),
        }
    }

    pub fn up(point: Point) -> Self {
        Self {
            kind: PointerKind::Up,
            point,
            at: Instant::now(),
        }
    }
}

/// The gesture in progress. Drag and resize are mutually exclusive by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        window: WindowId,
        /// Pointer minus window origin at the moment the drag began.
        grab_offset: Point,
        /// Window origin at the moment the drag began, used by `cancel`.
        origin: Point,
    },
    Resizing {
        window: WindowId,
        edges: EdgeSet,
        start_pointer: Point,
        start_size: Size,
        start_position: Point,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn window(&self) -> Option<WindowId> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { window, .. } | Gesture::Resizing { window, .. } => Some(*window),
        }
    }
}

/// Geometry for a resize gesture, given where it started and where the
/// pointer is now.
///
/// The size is clamped to the window minimum per axis. The origin is only
/// part of the patch when the left or top edge participates; the vertical
/// origin never goes above the viewport.
pub fn resize_patch(
    edges: EdgeSet,
    start_pointer: Point,
    start_size: Size,
    start_position: Point,
    pointer: Point,
) -> WindowPatch {
    let delta = pointer - start_pointer;
    let mut size = start_size;
    let mut position = start_position;

    if edges.right {
        size.width = start_size.width.saturating_add(delta.x);
    }
    if edges.left {
        size.width = start_size.width.saturating_sub(delta.x);
        position.x = start_position.x.saturating_add(delta.x);
    }
    if edges.bottom {
        size.height = start_size.height.saturating_add(delta.y);
    }
    if edges.top {
        size.height = start_size.height.saturating_sub(delta.y);
        position.y = start_position.y.saturating_add(delta.y).max(0);
    }

    let patch = WindowPatch::size(size.clamped());
    if edges.moves_origin() {
        patch.with_position(position)
    } else {
        patch
    }
}

#[derive(Debug)]
pub struct InteractionController {
    gesture: Gesture,
    last_title_press: Option<(WindowId, Instant)>,
    double_click_window: Duration,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
            last_title_press: None,
            double_click_window: DOUBLE_CLICK_WINDOW,
        }
    }

    pub fn with_double_click_window(mut self, window: Duration) -> Self {
        self.double_click_window = window;
        self
    }

    /// Forgets the last title-bar press, so the next one starts a drag.
    /// Hosts call this when focus changes through their own chrome.
    pub fn reset_double_click(&mut self) {
        self.last_title_press = None;
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_active(&self) -> bool {
        !self.gesture.is_idle()
    }

    /// Feeds one pointer event through the state machine. Returns `true`
    /// when the event was consumed by the window layer.
    pub fn handle<C>(&mut self, registry: &mut WindowRegistry<C>, event: &PointerEvent) -> bool {
        match event.kind {
            PointerKind::Down(target) => self.pointer_down(registry, target, event.point, event.at),
            PointerKind::Move => self.pointer_move(registry, event.point),
            PointerKind::Up => self.pointer_up(),
        }
    }

    /// Abandons the active gesture and puts the window back where it was
    /// when the gesture started. Returns `false` when nothing was active.
    pub fn cancel<C>(&mut self, registry: &mut WindowRegistry<C>) -> bool {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => false,
            Gesture::Dragging { window, origin, .. } => {
                registry.update(window, WindowPatch::position(origin));
                tracing::debug!(window_id = %window, "drag cancelled");
                true
            }
            Gesture::Resizing {
                window,
                start_size,
                start_position,
                ..
            } => {
                registry.update(
                    window,
                    WindowPatch {
                        position: Some(start_position),
                        size: Some(start_size),
                    },
                );
                tracing::debug!(window_id = %window, "resize cancelled");
                true
            }
        }
    }

    fn pointer_down<C>(
        &mut self,
        registry: &mut WindowRegistry<C>,
        target: PointerTarget,
        point: Point,
        at: Instant,
    ) -> bool {
        if !self.gesture.is_idle() {
            // The pointer already owns a gesture until it is released.
            tracing::trace!(?target, "pointer-down ignored during gesture");
            return true;
        }
        if !matches!(target, PointerTarget::TitleBar(_)) {
            // Only two title presses in a row count as a double press.
            self.last_title_press = None;
        }
        match target {
            PointerTarget::TitleBar(id) => self.begin_drag(registry, id, point, at),
            PointerTarget::ResizeHandle(id, edge) => self.begin_resize(registry, id, edge, point),
            PointerTarget::Control(id, control) => {
                if !registry.contains(id) {
                    return false;
                }
                match control {
                    WindowControl::Minimize => registry.minimize(id),
                    WindowControl::Maximize => registry.maximize(id),
                    WindowControl::Close => registry.close(id),
                }
                true
            }
            PointerTarget::Body(id) => {
                if !registry.contains(id) {
                    return false;
                }
                registry.focus(id);
                true
            }
            PointerTarget::Desktop => false,
        }
    }

    fn begin_drag<C>(
        &mut self,
        registry: &mut WindowRegistry<C>,
        id: WindowId,
        point: Point,
        at: Instant,
    ) -> bool {
        let Some(origin) = registry.get(id).map(|window| window.position()) else {
            return false;
        };
        if let Some((prev_id, prev_at)) = self.last_title_press
            && prev_id == id
            && at.saturating_duration_since(prev_at) <= self.double_click_window
        {
            self.last_title_press = None;
            registry.focus(id);
            registry.maximize(id);
            return true;
        }
        self.last_title_press = Some((id, at));

        registry.focus(id);
        self.gesture = Gesture::Dragging {
            window: id,
            grab_offset: point - origin,
            origin,
        };
        tracing::debug!(window_id = %id, "drag started");
        true
    }

    fn begin_resize<C>(
        &mut self,
        registry: &mut WindowRegistry<C>,
        id: WindowId,
        edge: ResizeEdge,
        point: Point,
    ) -> bool {
        let Some(window) = registry.get(id) else {
            return false;
        };
        if window.is_maximized() {
            return false;
        }
        let start_size = window.size();
        let start_position = window.position();
        registry.focus(id);
        self.gesture = Gesture::Resizing {
            window: id,
            edges: edge.edges(),
            start_pointer: point,
            start_size,
            start_position,
        };
        tracing::debug!(window_id = %id, ?edge, "resize started");
        true
    }

    fn pointer_move<C>(&mut self, registry: &mut WindowRegistry<C>, point: Point) -> bool {
        let Some(window) = self.gesture.window() else {
            return false;
        };
        if !registry.contains(window) {
            // Closed through some other channel mid-gesture.
            self.gesture = Gesture::Idle;
            return false;
        }
        let patch = match self.gesture {
            Gesture::Idle => return false,
            Gesture::Dragging { grab_offset, .. } => {
                let mut position = point - grab_offset;
                position.y = position.y.max(0);
                WindowPatch::position(position)
            }
            Gesture::Resizing {
                edges,
                start_pointer,
                start_size,
                start_position,
                ..
            } => resize_patch(edges, start_pointer, start_size, start_position, point),
        };
        registry.update(window, patch);
        true
    }

    fn pointer_up(&mut self) -> bool {
        let ended = std::mem::take(&mut self.gesture);
        match ended.window() {
            Some(window) => {
                tracing::debug!(window_id = %window, "gesture ended");
                true
            }
            None => false,
        }
    }
}
