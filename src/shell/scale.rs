use crate::geometry::{Point, Rect, Viewport};

/// How many viewport pixels one terminal cell stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    px_per_col: i32,
    px_per_row: i32,
}

impl CellScale {
    /// Both factors are raised to at least 1.
    pub fn new(px_per_col: i32, px_per_row: i32) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_row: px_per_row.max(1),
        }
    }

    pub fn px_per_col(&self) -> i32 {
        self.px_per_col
    }

    pub fn px_per_row(&self) -> i32 {
        self.px_per_row
    }

    /// Viewport point at the top-left corner of a cell.
    pub fn to_viewport(&self, col: u16, row: u16) -> Point {
        Point::new(
            i32::from(col) * self.px_per_col,
            i32::from(row) * self.px_per_row,
        )
    }

    /// Viewport pixels a single cell stands for.
    pub fn cell_rect(&self, col: u16, row: u16) -> Rect {
        let origin = self.to_viewport(col, row);
        Rect::new(origin.x, origin.y, self.px_per_col, self.px_per_row)
    }

    /// Cell rectangle covering a viewport rectangle. Left and top edges round
    /// down, right and bottom edges round up, so any pixel of the window lands
    /// in some cell of the result.
    pub fn to_cells(&self, rect: Rect) -> Rect {
        let left = rect.x.div_euclid(self.px_per_col);
        let top = rect.y.div_euclid(self.px_per_row);
        let right = ceil_div(rect.right(), self.px_per_col);
        let bottom = ceil_div(rect.bottom(), self.px_per_row);
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Viewport for a terminal area of `cols` x `rows`, with the bottom
    /// `reserved_rows` kept for the taskbar.
    pub fn viewport(&self, cols: u16, rows: u16, reserved_rows: u16) -> Viewport {
        Viewport::new(
            i32::from(cols) * self.px_per_col,
            i32::from(rows) * self.px_per_row,
            i32::from(reserved_rows) * self.px_per_row,
        )
    }
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(10, 20)
    }
}

fn ceil_div(value: i32, divisor: i32) -> i32 {
    let q = value.div_euclid(divisor);
    if value.rem_euclid(divisor) == 0 { q } else { q + 1 }
}
