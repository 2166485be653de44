use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};

use super::{Component, ComponentContext};
use crate::constants::WHEEL_SCROLL_LINES;
use crate::content::{RenderedContent, WindowContent, render_content};
use crate::layout::rect_contains;
use crate::theme;
use crate::ui::UiFrame;

/// Vertical scroll position with deltas queued until the content height is
/// known.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollState {
    pub offset: usize,
    pending: isize,
}

impl ScrollState {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.pending = 0;
    }

    pub fn bump(&mut self, delta: isize) {
        self.pending = self.pending.saturating_add(delta);
    }

    pub fn apply(&mut self, total: usize, view: usize) {
        let max_offset = total.saturating_sub(view);
        if self.pending != 0 {
            let delta = self.pending;
            self.pending = 0;
            let next = if delta.is_negative() {
                self.offset.saturating_sub(delta.unsigned_abs())
            } else {
                self.offset.saturating_add(delta as usize)
            };
            self.offset = next.min(max_offset);
        } else if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}

/// A window body: rendered content plus its scroll offset.
#[derive(Debug)]
pub struct ContentView {
    rendered: RenderedContent,
    scroll: ScrollState,
    area: Rect,
}

impl ContentView {
    pub fn new(content: &WindowContent) -> Self {
        Self {
            rendered: render_content(content),
            scroll: ScrollState::default(),
            area: Rect::default(),
        }
    }

    pub fn rendered(&self) -> &RenderedContent {
        &self.rendered
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn offset(&self) -> usize {
        self.scroll.offset
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll.bump(delta);
        self.scroll.apply(self.total_rows(), self.area.height as usize);
    }

    /// Navigation path under the cell `(column, row)`, if it is a link row.
    pub fn link_at(&self, column: u16, row: u16) -> Option<&str> {
        if !rect_contains(self.area, column, row) {
            return None;
        }
        let line = (row - self.area.y) as usize + self.scroll.offset;
        self.rendered.link_at(line)
    }

    fn paragraph(&self) -> Paragraph<'static> {
        let paragraph = Paragraph::new(self.rendered.text().clone())
            .alignment(self.rendered.alignment())
            .style(Style::default().bg(theme::body_bg()));
        if self.rendered.wrap() {
            paragraph.wrap(Wrap { trim: false })
        } else {
            paragraph
        }
    }

    /// Rows the content occupies at the current width, counted with the same
    /// word wrapping the paragraph renders with.
    fn total_rows(&self) -> usize {
        if self.area.width == 0 {
            return self.rendered.line_count();
        }
        self.paragraph().line_count(self.area.width)
    }

    fn overflows(&self) -> bool {
        self.total_rows() > self.area.height as usize
    }
}

impl Component for ContentView {
    fn resize(&mut self, area: Rect, _ctx: &ComponentContext) {
        self.area = area;
        self.scroll.apply(self.total_rows(), area.height as usize);
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.resize(area, ctx);
        if area.width == 0 || area.height == 0 {
            return;
        }
        let offset = u16::try_from(self.scroll.offset).unwrap_or(u16::MAX);
        frame.render_widget(self.paragraph().scroll((offset, 0)), area);

        if ctx.focused() && self.overflows() {
            let x = area.x.saturating_add(area.width - 1);
            let style = Style::default().fg(theme::muted_fg());
            if self.scroll.offset > 0 {
                frame.set_cell(area, x, area.y, "▲", style);
            }
            let max_offset = self.total_rows().saturating_sub(area.height as usize);
            if self.scroll.offset < max_offset {
                frame.set_cell(area, x, area.y + area.height - 1, "▼", style);
            }
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Event::Mouse(mouse) = event else {
            return false;
        };
        if !rect_contains(self.area, mouse.column, mouse.row) {
            return false;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.scroll_by(WHEEL_SCROLL_LINES);
                true
            }
            MouseEventKind::ScrollUp => {
                self.scroll_by(-WHEEL_SCROLL_LINES);
                true
            }
            _ => false,
        }
    }
}
