//! Cell layout of the frame drawn around each window.
//!
//! ```text
//! ┌──────────────────────────────┐   border row: top resize handles
//! │ Title           [_][□][x]    │   title bar and its buttons
//! │ content                      │
//! └──────────────────────────────┘   border row: bottom resize handles
//! ```
//!
//! The decorator draws from the same functions the hit test reads, so what
//! the user sees and what the pointer finds cannot drift apart.

use crate::geometry::{Point, Rect};
use crate::window::{ResizeEdge, WindowControl};

/// Width of one `[x]` button.
pub const CONTROL_WIDTH: i32 = 3;

/// Buttons in left-to-right order.
pub const CONTROLS: [WindowControl; 3] = [
    WindowControl::Minimize,
    WindowControl::Maximize,
    WindowControl::Close,
];

/// Part of a window's cell rectangle under a given cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeRegion {
    Border(ResizeEdge),
    TitleBar,
    Control(WindowControl),
    Body,
}

pub fn control_label(control: WindowControl) -> &'static str {
    match control {
        WindowControl::Minimize => "[_]",
        WindowControl::Maximize => "[□]",
        WindowControl::Close => "[x]",
    }
}

/// Row of the title bar.
pub fn title_row(rect: Rect) -> i32 {
    rect.y + 1
}

/// Columns `[first, last)` available for title text, left of the buttons.
pub fn title_span(rect: Rect) -> (i32, i32) {
    let first = rect.x + 1;
    let last = control_columns(rect)
        .first()
        .map(|(_, col)| *col)
        .unwrap_or(rect.right() - 1);
    (first, last.max(first))
}

/// Leftmost column of every button, or nothing when the title bar is too
/// narrow to hold all three with a cell of padding.
pub fn control_columns(rect: Rect) -> Vec<(WindowControl, i32)> {
    let needed = CONTROL_WIDTH * CONTROLS.len() as i32 + 1;
    let interior = rect.width - 2;
    if interior < needed {
        return Vec::new();
    }
    let first = rect.right() - 2 - needed + 1;
    CONTROLS
        .iter()
        .enumerate()
        .map(|(idx, control)| (*control, first + CONTROL_WIDTH * idx as i32))
        .collect()
}

/// Area inside the border and below the title bar.
pub fn content_rect(rect: Rect) -> Rect {
    Rect::new(
        rect.x + 1,
        rect.y + 2,
        (rect.width - 2).max(0),
        (rect.height - 3).max(0),
    )
}

/// Classifies `cell` against a window occupying `rect`. Maximized windows
/// have no resize handles; their border answers as body.
pub fn classify(rect: Rect, maximized: bool, cell: Point) -> Option<ChromeRegion> {
    if !rect.contains(cell) {
        return None;
    }
    let top = cell.y == rect.y;
    let bottom = cell.y == rect.bottom() - 1;
    let left = cell.x == rect.x;
    let right = cell.x == rect.right() - 1;
    if top || bottom || left || right {
        if maximized {
            return Some(ChromeRegion::Body);
        }
        let edge = match (top, bottom, left, right) {
            (true, _, true, _) => ResizeEdge::TopLeft,
            (true, _, _, true) => ResizeEdge::TopRight,
            (_, true, true, _) => ResizeEdge::BottomLeft,
            (_, true, _, true) => ResizeEdge::BottomRight,
            (true, _, _, _) => ResizeEdge::Top,
            (_, true, _, _) => ResizeEdge::Bottom,
            (_, _, true, _) => ResizeEdge::Left,
            _ => ResizeEdge::Right,
        };
        return Some(ChromeRegion::Border(edge));
    }
    if cell.y == title_row(rect) {
        let control = control_columns(rect)
            .into_iter()
            .find(|(_, col)| cell.x >= *col && cell.x < col + CONTROL_WIDTH)
            .map(|(control, _)| control);
        return Some(match control {
            Some(control) => ChromeRegion::Control(control),
            None => ChromeRegion::TitleBar,
        });
    }
    Some(ChromeRegion::Body)
}
