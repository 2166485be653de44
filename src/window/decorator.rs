use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use unicode_width::UnicodeWidthStr;

use super::GestureKind;
use crate::constants::CHROME_TOP_ROWS;
use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

/// Draws window chrome around a body area.
pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        rect: Rect,
        title: &str,
        focused: bool,
        gesture: GestureKind,
    );

    /// Area left for content inside the chrome drawn at `rect`.
    fn body_area(&self, rect: Rect) -> Rect {
        if rect.width < 3 || rect.height <= CHROME_TOP_ROWS + 1 {
            return Rect::new(rect.x, rect.y, 0, 0);
        }
        Rect::new(
            rect.x + 1,
            rect.y + CHROME_TOP_ROWS,
            rect.width - 2,
            rect.height - CHROME_TOP_ROWS - 1,
        )
    }
}

const DOT: &str = "●";
const GRAB_IDLE: &str = "⠿";
const GRAB_ACTIVE: &str = "✥";
// Title text never starts left of the three dots.
const DOTS_WIDTH: u16 = 7;

/// Rounded-window look: traffic-light dots, centred title, and a grab glyph
/// that switches while the window is being moved or resized.
#[derive(Debug, Default)]
pub struct MacDecorator;

impl MacDecorator {
    fn draw_border(&self, frame: &mut UiFrame<'_>, rect: Rect, set: border::Set, style: Style) {
        let left = rect.x;
        let top = rect.y;
        let right = rect.x + rect.width - 1;
        let bottom = rect.y + rect.height - 1;
        for x in left + 1..right {
            frame.set_cell(rect, x, top, set.horizontal_top, style);
            frame.set_cell(rect, x, bottom, set.horizontal_bottom, style);
        }
        for y in top + 1..bottom {
            frame.set_cell(rect, left, y, set.vertical_left, style);
            frame.set_cell(rect, right, y, set.vertical_right, style);
        }
        frame.set_cell(rect, left, top, set.top_left, style);
        frame.set_cell(rect, right, top, set.top_right, style);
        frame.set_cell(rect, left, bottom, set.bottom_left, style);
        frame.set_cell(rect, right, bottom, set.bottom_right, style);
    }

    fn draw_title_bar(
        &self,
        frame: &mut UiFrame<'_>,
        rect: Rect,
        title: &str,
        focused: bool,
        gesture: GestureKind,
    ) {
        let y = rect.y + 1;
        let inner_left = rect.x + 1;
        let inner_width = rect.width - 2;
        let inner_right = inner_left + inner_width;
        let bar = Rect::new(inner_left, y, inner_width, 1);
        let bar_style = Style::default()
            .bg(theme::title_bar_bg(focused))
            .fg(theme::title_bar_fg(focused));

        frame.set_string(bar, inner_left, y, &" ".repeat(inner_width as usize), bar_style);

        let dot_colors = if focused {
            theme::traffic_lights()
        } else {
            [theme::unfocused_dot(); 3]
        };
        for (index, color) in dot_colors.into_iter().enumerate() {
            let x = inner_left + 1 + 2 * index as u16;
            frame.set_cell(bar, x, y, DOT, bar_style.fg(color));
        }

        let grab = if matches!(gesture, GestureKind::Idle) {
            GRAB_IDLE
        } else {
            GRAB_ACTIVE
        };
        let grab_x = inner_right.saturating_sub(2);
        if grab_x >= inner_left + DOTS_WIDTH {
            frame.set_cell(bar, grab_x, y, grab, bar_style);
        }

        let title_min_x = inner_left + DOTS_WIDTH;
        let title_max_x = grab_x.saturating_sub(1);
        if title_max_x <= title_min_x {
            return;
        }
        let available = (title_max_x - title_min_x) as usize;
        let text = truncate_to_width(title, available);
        let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let centred = inner_left + inner_width.saturating_sub(text_width) / 2;
        let start = centred.clamp(title_min_x, title_max_x - text_width);
        let title_style = if focused {
            bar_style.add_modifier(Modifier::BOLD)
        } else {
            bar_style
        };
        frame.set_string(bar, start, y, &text, title_style);
    }
}

impl WindowDecorator for MacDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        rect: Rect,
        title: &str,
        focused: bool,
        gesture: GestureKind,
    ) {
        if rect.width < 3 || rect.height < 3 {
            return;
        }
        let (set, color) = match gesture {
            GestureKind::Resizing => (border::DOUBLE, theme::border_active()),
            GestureKind::Dragging => (border::PLAIN, theme::border_active()),
            GestureKind::Idle => (border::PLAIN, theme::border(focused)),
        };
        self.draw_border(frame, rect, set, Style::default().fg(color));
        self.draw_title_bar(frame, rect, title, focused, gesture);
    }
}
