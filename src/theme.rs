use ratatui::style::Color;

// Centralized theme colors.

// Desktop
pub fn desktop_bg() -> Color {
    Color::Indexed(24)
}
pub fn desktop_fg() -> Color {
    Color::Gray
}

// Taskbar
pub fn panel_bg() -> Color {
    Color::DarkGray
}
pub fn panel_fg() -> Color {
    Color::Black
}
pub fn panel_inactive_fg() -> Color {
    Color::Gray
}
pub fn panel_active_bg() -> Color {
    Color::Gray
}
pub fn panel_active_fg() -> Color {
    Color::Black
}
pub fn launcher_fg() -> Color {
    Color::White
}

// Decorator
pub fn decorator_header_bg() -> Color {
    Color::Blue
}
pub fn decorator_header_fg() -> Color {
    Color::White
}
pub fn decorator_inactive_header_bg() -> Color {
    Color::DarkGray
}
pub fn decorator_border() -> Color {
    Color::DarkGray
}
pub fn decorator_close_fg() -> Color {
    Color::LightRed
}

// Window body
pub fn window_bg() -> Color {
    Color::Black
}
pub fn window_fg() -> Color {
    Color::White
}
