use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Writes one symbol at signed cell coordinates, skipping anything outside
/// `bounds`. Windows may hang off any edge of the screen, so callers work in
/// `i32` and let this do the clipping.
pub(crate) fn put_symbol(
    buffer: &mut Buffer,
    bounds: Rect,
    x: i32,
    y: i32,
    symbol: &str,
    style: Style,
) {
    if !in_bounds(bounds, x, y) {
        return;
    }
    if let Some(cell) = buffer.cell_mut((x as u16, y as u16)) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

/// Writes `text` starting at signed coordinates, one char per cell, clipped to
/// `bounds` on both sides.
pub(crate) fn put_str(buffer: &mut Buffer, bounds: Rect, x: i32, y: i32, text: &str, style: Style) {
    let mut tmp = [0u8; 4];
    for (offset, ch) in text.chars().enumerate() {
        let cx = x.saturating_add(offset as i32);
        if cx >= i32::from(bounds.right()) {
            break;
        }
        put_symbol(buffer, bounds, cx, y, ch.encode_utf8(&mut tmp), style);
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Fills every cell of `area` (already clipped) with a blank in `style`.
pub(crate) fn fill(buffer: &mut Buffer, area: Rect, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.reset();
                cell.set_symbol(" ");
                cell.set_style(style);
            }
        }
    }
}

fn in_bounds(bounds: Rect, x: i32, y: i32) -> bool {
    x >= i32::from(bounds.x)
        && x < i32::from(bounds.right())
        && y >= i32::from(bounds.y)
        && y < i32::from(bounds.bottom())
}
