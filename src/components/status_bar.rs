use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use super::{Component, ComponentContext};
use crate::ui::{UiFrame, truncate_to_width};

/// One-row bar with a left-aligned and a right-aligned segment.
#[derive(Debug, Default)]
pub struct StatusBar {
    left: String,
    right: String,
    style: Style,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn set_right<T: Into<String>>(&mut self, value: T) {
        self.right = value.into();
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let width = area.width as usize;
        let row = Rect { height: 1, ..area };
        frame.set_string(row, area.x, area.y, &" ".repeat(width), self.style);
        frame.set_string(row, area.x, area.y, &self.left, self.style);

        // The right segment is dropped when it would overlap the left one.
        let right = truncate_to_width(&self.right, width);
        let right_width = right.width();
        if !right.is_empty() && right_width + self.left.width() < width {
            let start_x = area.x.saturating_add((width - right_width) as u16);
            frame.set_string(row, start_x, area.y, &right, self.style);
        }
    }
}
