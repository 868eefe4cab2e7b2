use std::collections::BTreeMap;

use super::{WindowId, WindowPatch, WindowRecord};
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, OPEN_ORIGIN, OPEN_STAGGER};
use crate::error::RegistryError;
use crate::geometry::{Point, Rect, Size, Viewport};

/// Authoritative set of open windows plus the focus pointer.
///
/// Every mutator is total: an id that is not (or no longer) present is
/// ignored rather than reported, because the host can only ever hold ids the
/// registry handed out. Callers that want a hard failure use [`require`].
///
/// Stacking order comes from a private counter rather than wall-clock time,
/// so each `open`/`focus` gets a strictly larger z than anything before it
/// and two windows never tie.
///
/// [`require`]: WindowRegistry::require
#[derive(Debug)]
pub struct WindowRegistry<C> {
    windows: BTreeMap<WindowId, WindowRecord<C>>,
    active: Option<WindowId>,
    next_window_seq: u64,
    next_z: u64,
}

impl<C> Default for WindowRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> WindowRegistry<C> {
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            active: None,
            next_window_seq: 1,
            next_z: 1,
        }
    }

    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z = z.saturating_add(1);
        z
    }

    /// Creates a window for `content`, stacks it above everything else and
    /// makes it active.
    ///
    /// New windows are staggered diagonally by the number of windows already
    /// open, starting at `(100, 100)`.
    pub fn open(
        &mut self,
        app_id: impl Into<String>,
        title: impl Into<String>,
        content: C,
    ) -> WindowId {
        let seq = self.next_window_seq;
        self.next_window_seq = seq.saturating_add(1);
        let id = WindowId::from_raw(seq);

        let open_count = i32::try_from(self.windows.len()).unwrap_or(i32::MAX);
        let offset = OPEN_STAGGER.saturating_mul(open_count);
        let origin = OPEN_ORIGIN.saturating_add(offset);
        let z_index = self.take_z();
        let record = WindowRecord {
            id,
            app_id: app_id.into(),
            title: title.into(),
            content,
            position: Point::new(origin, origin),
            size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            is_minimized: false,
            is_maximized: false,
            z_index,
        };
        tracing::debug!(window_id = %id, app_id = %record.app_id, z = z_index, "opened window");
        self.windows.insert(id, record);
        self.active = Some(id);
        id
    }

    /// Removes the window. When it was active, focus passes to the remaining
    /// window with the highest z, minimized or not.
    pub fn close(&mut self, id: WindowId) {
        if self.windows.remove(&id).is_none() {
            return;
        }
        tracing::debug!(window_id = %id, "closed window");
        if self.active == Some(id) {
            self.active = self.topmost_id();
            tracing::debug!(active = ?self.active, "active window handed off");
        }
    }

    /// Hides the window. The active pointer is left alone.
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.is_minimized = true;
            tracing::debug!(window_id = %id, "minimized window");
        }
    }

    /// Toggles the maximized flag. Stored position and size do not change,
    /// so toggling back restores the previous geometry.
    pub fn maximize(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.is_maximized = !window.is_maximized;
            tracing::debug!(window_id = %id, maximized = window.is_maximized, "toggled maximize");
        }
    }

    /// Raises the window to the top, un-minimizes it and makes it active.
    pub fn focus(&mut self, id: WindowId) {
        if !self.windows.contains_key(&id) {
            return;
        }
        let z_index = self.take_z();
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_index = z_index;
            window.is_minimized = false;
        }
        self.active = Some(id);
        tracing::debug!(window_id = %id, z = z_index, "focused window");
    }

    /// Applies a geometry patch, then raises the size back to the minimum if
    /// the patch went below it.
    pub fn update(&mut self, id: WindowId, patch: WindowPatch) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        if let Some(position) = patch.position {
            window.position = position;
        }
        if let Some(size) = patch.size {
            window.size = size;
        }
        window.size = window.size.clamped();
        tracing::trace!(
            window_id = %id,
            x = window.position.x,
            y = window.position.y,
            width = window.size.width,
            height = window.size.height,
            "updated window geometry"
        );
    }

    /// Title changes come from the hosted application, never from the
    /// registry's own transitions.
    pub fn set_title(&mut self, id: WindowId, title: impl Into<String>) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.title = title.into();
        }
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord<C>> {
        self.windows.get(&id)
    }

    /// Strict lookup for callers that treat a stale id as a bug.
    pub fn require(&self, id: WindowId) -> Result<&WindowRecord<C>, RegistryError> {
        self.windows
            .get(&id)
            .ok_or(RegistryError::UnknownWindow(id))
    }

    /// Mutable access to the hosted payload, for the application that owns it.
    pub fn content_mut(&mut self, id: WindowId) -> Option<&mut C> {
        self.windows.get_mut(&id).map(|window| &mut window.content)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.active
    }

    /// Every window, minimized ones included, in the order they were opened.
    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord<C>> {
        self.windows.values()
    }

    /// Non-minimized windows from bottom to top: the paint order.
    pub fn visible_in_stacking_order(&self) -> Vec<&WindowRecord<C>> {
        let mut visible: Vec<_> = self
            .windows
            .values()
            .filter(|window| !window.is_minimized)
            .collect();
        visible.sort_by_key(|window| window.z_index);
        visible
    }

    /// The topmost visible window whose frame contains `point`.
    pub fn topmost_at(&self, point: Point, viewport: &Viewport) -> Option<WindowId> {
        self.topmost_overlapping(Rect::new(point.x, point.y, 1, 1), viewport)
    }

    /// The topmost visible window whose frame shares at least one pixel with
    /// `area`. Hosts with coarse pointers hit-test a whole cell this way.
    pub fn topmost_overlapping(&self, area: Rect, viewport: &Viewport) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|window| !window.is_minimized && window.frame(viewport).intersects(&area))
            .max_by_key(|window| window.z_index)
            .map(|window| window.id)
    }

    fn topmost_id(&self) -> Option<WindowId> {
        self.windows
            .values()
            .max_by_key(|window| window.z_index)
            .map(|window| window.id)
    }
}
