use ratatui::style::Color;

// Centralized theme colors. RGB values go through `crate::term_color` so
// terminals without truecolor get the nearest xterm-256 entry.

pub const CLOSE_DOT_RGB: (u8, u8, u8) = (255, 95, 86);
pub const MINIMIZE_DOT_RGB: (u8, u8, u8) = (255, 189, 46);
pub const ZOOM_DOT_RGB: (u8, u8, u8) = (39, 201, 63);
pub const LINK_RGB: (u8, u8, u8) = (10, 132, 255);
pub const CANVAS_RGB: (u8, u8, u8) = (28, 28, 30);

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    crate::term_color::map_rgb_to_color(rgb.0, rgb.1, rgb.2)
}

// Traffic-light dots, left to right
pub fn traffic_lights() -> [Color; 3] {
    [
        rgb_to_color(CLOSE_DOT_RGB),
        rgb_to_color(MINIMIZE_DOT_RGB),
        rgb_to_color(ZOOM_DOT_RGB),
    ]
}

// Title bar
pub fn title_bar_bg(focused: bool) -> Color {
    if focused { Color::Gray } else { Color::DarkGray }
}
pub fn title_bar_fg(focused: bool) -> Color {
    if focused { Color::Black } else { Color::Gray }
}
pub fn unfocused_dot() -> Color {
    Color::Gray
}

// Frame
pub fn border(focused: bool) -> Color {
    if focused { Color::White } else { Color::DarkGray }
}
pub fn border_active() -> Color {
    rgb_to_color(LINK_RGB)
}
pub fn body_bg() -> Color {
    Color::Reset
}

// Canvas
pub fn canvas_bg() -> Color {
    rgb_to_color(CANVAS_RGB)
}
pub fn canvas_grid() -> Color {
    Color::DarkGray
}

// Content
pub fn link_fg() -> Color {
    rgb_to_color(LINK_RGB)
}
pub fn muted_fg() -> Color {
    Color::DarkGray
}
pub fn badge_bg() -> Color {
    Color::Magenta
}
pub fn badge_fg() -> Color {
    Color::Black
}
pub fn controls_bg() -> Color {
    Color::DarkGray
}
pub fn controls_fg() -> Color {
    Color::White
}
pub fn placeholder_fg() -> Color {
    Color::Yellow
}

// Status bar
pub fn status_bg() -> Color {
    Color::DarkGray
}
pub fn status_fg() -> Color {
    Color::White
}
