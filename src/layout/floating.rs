use ratatui::prelude::Rect;

use super::{LogicalRect, Point, Size, clamp_origin, extent, rect_contains};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    fn moves_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    fn moves_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }
}

/// Which part of a window frame a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRegion {
    /// The title bar row: the only place a drag can start.
    TitleBar,
    /// A border cell acting as a resize handle.
    Border(ResizeEdge),
    /// Anything inside the chrome. Clicks here focus but never move.
    Body,
}

/// Classify a cell inside a frame drawn at `rect`.
///
/// The outer ring of cells are resize handles, the row directly under the top
/// border is the title bar, and everything else is body.
pub fn region_at(rect: Rect, column: u16, row: u16) -> Option<FrameRegion> {
    if !rect_contains(rect, column, row) {
        return None;
    }
    if rect.width < 3 || rect.height < 3 {
        return Some(FrameRegion::Body);
    }
    let right = rect.x.saturating_add(rect.width - 1);
    let bottom = rect.y.saturating_add(rect.height - 1);
    let left_edge = column == rect.x;
    let right_edge = column == right;
    let top_edge = row == rect.y;
    let bottom_edge = row == bottom;
    let edge = match (top_edge, bottom_edge, left_edge, right_edge) {
        (true, _, true, _) => Some(ResizeEdge::TopLeft),
        (true, _, _, true) => Some(ResizeEdge::TopRight),
        (_, true, true, _) => Some(ResizeEdge::BottomLeft),
        (_, true, _, true) => Some(ResizeEdge::BottomRight),
        (true, _, _, _) => Some(ResizeEdge::Top),
        (_, true, _, _) => Some(ResizeEdge::Bottom),
        (_, _, true, _) => Some(ResizeEdge::Left),
        (_, _, _, true) => Some(ResizeEdge::Right),
        _ => None,
    };
    if let Some(edge) = edge {
        return Some(FrameRegion::Border(edge));
    }
    if row == rect.y.saturating_add(1) {
        return Some(FrameRegion::TitleBar);
    }
    Some(FrameRegion::Body)
}

/// Move `start` by the pointer delta, keeping the whole rect inside `bounds`.
pub fn apply_drag(start: LogicalRect, grab: Point, pointer: Point, bounds: &LogicalRect) -> LogicalRect {
    let dx = pointer.x.saturating_sub(grab.x);
    let dy = pointer.y.saturating_sub(grab.y);
    let target = Point::new(start.x.saturating_add(dx), start.y.saturating_add(dy));
    LogicalRect::from_parts(clamp_origin(target, start.size(), bounds), start.size())
}

/// Resize `start` by dragging `edge` from `grab` to `pointer`.
///
/// The edge opposite the one being dragged stays anchored. The result is at
/// least `min` on each axis (unless the bounds themselves are smaller) and
/// never crosses `bounds`.
pub fn apply_resize(
    start: LogicalRect,
    edge: ResizeEdge,
    grab: Point,
    pointer: Point,
    min: Size,
    bounds: &LogicalRect,
) -> LogicalRect {
    let dx = pointer.x.saturating_sub(grab.x);
    let dy = pointer.y.saturating_sub(grab.y);
    let min = min.min(bounds.size());
    let min_w = extent(min.width);
    let min_h = extent(min.height);

    let (mut left, mut right) = (start.x, start.right());
    if edge.moves_left() {
        left = left.saturating_add(dx).min(right - min_w).max(bounds.x);
    } else if edge.moves_right() {
        right = right
            .saturating_add(dx)
            .max(left + min_w)
            .min(bounds.right());
    }

    let (mut top, mut bottom) = (start.y, start.bottom());
    if edge.moves_top() {
        top = top.saturating_add(dy).min(bottom - min_h).max(bounds.y);
    } else if edge.moves_bottom() {
        bottom = bottom
            .saturating_add(dy)
            .max(top + min_h)
            .min(bounds.bottom());
    }

    LogicalRect::new(
        left,
        top,
        (right - left).max(1) as u32,
        (bottom - top).max(1) as u32,
    )
}
