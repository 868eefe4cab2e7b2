use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellArea;
use ratatui::style::{Modifier, Style};

use super::chrome;
use crate::geometry::Rect;
use crate::theme;
use crate::ui::{put_str, put_symbol};
use crate::window::WindowControl;

/// Draws the frame around one window. `cells` is the window's signed cell
/// rectangle and may extend past `bounds` on any side.
pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(
        &self,
        buffer: &mut Buffer,
        bounds: CellArea,
        cells: Rect,
        title: &str,
        focused: bool,
    );
}

#[derive(Debug, Default)]
pub struct TitleBarDecorator;

impl WindowDecorator for TitleBarDecorator {
    fn render_window(
        &self,
        buffer: &mut Buffer,
        bounds: CellArea,
        cells: Rect,
        title: &str,
        focused: bool,
    ) {
        if cells.width < 2 || cells.height < 2 {
            return;
        }
        let header_style = if focused {
            Style::default()
                .bg(theme::decorator_header_bg())
                .fg(theme::decorator_header_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(theme::decorator_inactive_header_bg())
                .fg(theme::decorator_header_fg())
        };
        let border_style = Style::default()
            .fg(theme::decorator_border())
            .bg(theme::window_bg());

        let left = cells.x;
        let top = cells.y;
        let right = cells.right() - 1;
        let bottom = cells.bottom() - 1;

        for x in left..=right {
            let (top_sym, bottom_sym) = if x == left {
                ("┌", "└")
            } else if x == right {
                ("┐", "┘")
            } else {
                ("─", "─")
            };
            put_symbol(buffer, bounds, x, top, top_sym, border_style);
            put_symbol(buffer, bounds, x, bottom, bottom_sym, border_style);
        }
        for y in top + 1..bottom {
            put_symbol(buffer, bounds, left, y, "│", border_style);
            put_symbol(buffer, bounds, right, y, "│", border_style);
        }

        let header_y = chrome::title_row(cells);
        if header_y >= bottom {
            return;
        }
        for x in left + 1..right {
            put_symbol(buffer, bounds, x, header_y, " ", header_style);
        }
        let (first, last) = chrome::title_span(cells);
        let room = (last - first - 1).max(0) as usize;
        let label: String = title.chars().take(room).collect();
        put_str(buffer, bounds, first + 1, header_y, &label, header_style);

        for (control, col) in chrome::control_columns(cells) {
            let style = match control {
                WindowControl::Close => header_style.fg(theme::decorator_close_fg()),
                _ => header_style,
            };
            put_str(
                buffer,
                bounds,
                col,
                header_y,
                chrome::control_label(control),
                style,
            );
        }
    }
}
