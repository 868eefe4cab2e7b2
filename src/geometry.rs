//! Viewport-space value types.
//!
//! The window core works in signed viewport pixels. Hosts that draw into a
//! coarser grid (the terminal shell, for example) convert at their boundary.

use std::ops::{Add, Sub};

use crate::constants::{DEFAULT_RESERVED_BOTTOM, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

/// A point or offset in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Raises each dimension to the window minimum.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

/// Signed origin with signed size. Windows may be dragged partly off the left
/// edge of the viewport, so `x` can go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        self.width > 0
            && self.height > 0
            && point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Whether the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The drawable area a host exposes, plus the strip at the bottom that
/// persistent chrome keeps for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub reserved_bottom: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32, reserved_bottom: i32) -> Self {
        Self {
            width,
            height,
            reserved_bottom,
        }
    }

    /// Area a maximized window occupies.
    pub fn maximized_rect(&self) -> Rect {
        Rect::new(
            0,
            0,
            self.width.max(0),
            self.height.saturating_sub(self.reserved_bottom).max(0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920, 1080, DEFAULT_RESERVED_BOTTOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_clamp_raises_only_small_dimensions() {
        assert_eq!(Size::new(10, 10).clamped(), Size::new(300, 200));
        assert_eq!(Size::new(1024, 50).clamped(), Size::new(1024, 200));
        assert_eq!(Size::new(-5, 700).clamped(), Size::new(300, 700));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(14, 14)));
        assert!(!r.contains(Point::new(15, 10)));
        assert!(!r.contains(Point::new(10, 15)));
        assert!(!Rect::new(0, 0, 0, 5).contains(Point::new(0, 0)));
    }

    #[test]
    fn intersects_ignores_touching_edges() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.intersects(&Rect::new(14, 14, 10, 10)));
        assert!(!r.intersects(&Rect::new(15, 10, 10, 10)));
        assert!(!r.intersects(&Rect::new(0, 0, 10, 10)));
        assert!(!r.intersects(&Rect::new(12, 12, 0, 3)));
    }

    #[test]
    fn maximized_rect_leaves_reserved_strip() {
        let vp = Viewport::new(1280, 800, 64);
        assert_eq!(vp.maximized_rect(), Rect::new(0, 0, 1280, 736));
        let tiny = Viewport::new(100, 20, 64);
        assert_eq!(tiny.maximized_rect().height, 0);
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(140, 90);
        let b = Point::new(40, -10);
        assert_eq!(a - b, Point::new(100, 100));
        assert_eq!(Point::new(100, 100) + b, a);
    }
}
