//! Shared crate-wide constants.
//!
//! All lengths are viewport pixels unless stated otherwise.

use std::time::Duration;

/// Smallest width any window may have after any mutation.
pub const MIN_WINDOW_WIDTH: i32 = 300;

/// Smallest height any window may have after any mutation.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

/// Width given to freshly opened windows.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;

/// Height given to freshly opened windows.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

/// Top-left corner of the first window opened into an empty registry.
pub const OPEN_ORIGIN: i32 = 100;

/// Diagonal offset applied per already-open window so new windows do not
/// land exactly on top of each other.
pub const OPEN_STAGGER: i32 = 50;

/// Height of the persistent chrome (taskbar) a maximized window leaves
/// uncovered when the host does not say otherwise.
pub const DEFAULT_RESERVED_BOTTOM: i32 = 64;

/// Two pointer-downs on the same title bar closer together than this toggle
/// maximize instead of starting a drag.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);
