//! Logical geometry for the workspace canvas.
//!
//! Window positions and sizes live in logical units, the same units a page
//! collaborator uses when it describes initial placement. [`CellScale`]
//! projects them onto terminal cells for hit testing and drawing.

pub mod floating;

use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Size) -> Size {
        Size {
            width: self.width.min(other.width),
            height: self.height.min(other.height),
        }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// Signed origin with unsigned extent, in logical units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogicalRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl LogicalRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(extent(self.width))
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(extent(self.height))
    }

    pub fn contains_rect(&self, other: &LogicalRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Pull `self` inside `bounds`: the size is capped to the bounds (but kept
    /// at or above `floor` where the bounds allow it) and the origin is moved
    /// the minimum distance needed for the whole rect to fit.
    pub fn clamp_within(&self, bounds: &LogicalRect, floor: Size) -> LogicalRect {
        let floor = floor.min(bounds.size());
        let size = self.size().max(floor).min(bounds.size());
        let origin = clamp_origin(self.origin(), size, bounds);
        LogicalRect::from_parts(origin, size)
    }
}

/// Largest origin such that a rect of `size` placed there stays inside
/// `bounds`, moved as little as possible from `origin`.
pub fn clamp_origin(origin: Point, size: Size, bounds: &LogicalRect) -> Point {
    let max_x = bounds.right().saturating_sub(extent(size.width));
    let max_y = bounds.bottom().saturating_sub(extent(size.height));
    Point {
        x: origin.x.min(max_x).max(bounds.x),
        y: origin.y.min(max_y).max(bounds.y),
    }
}

pub(crate) fn extent(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// How many logical units one terminal cell covers on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    cell_width: u16,
    cell_height: u16,
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
    }
}

impl CellScale {
    pub fn new(cell_width: u16, cell_height: u16) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u16 {
        self.cell_height
    }

    /// Logical rectangle covered by a terminal area, anchored at the origin.
    pub fn bounds_for(&self, area: Rect) -> LogicalRect {
        LogicalRect::new(
            0,
            0,
            area.width as u32 * self.cell_width as u32,
            area.height as u32 * self.cell_height as u32,
        )
    }

    /// Project a logical rect onto cells inside `origin`. The left/top edge
    /// rounds down and the right/bottom edge rounds up, so a rect inside
    /// [`Self::bounds_for`] always lands inside `origin`.
    pub fn to_cells(&self, rect: LogicalRect, origin: Rect) -> Rect {
        let cw = self.cell_width as i32;
        let ch = self.cell_height as i32;
        let left = rect.x.div_euclid(cw);
        let top = rect.y.div_euclid(ch);
        let right = ceil_div(rect.right(), cw);
        let bottom = ceil_div(rect.bottom(), ch);
        Rect {
            x: to_cell(origin.x as i32 + left),
            y: to_cell(origin.y as i32 + top),
            width: to_cell(right - left),
            height: to_cell(bottom - top),
        }
    }

    /// Logical position of the top-left corner of a terminal cell.
    pub fn to_logical(&self, column: u16, row: u16, origin: Rect) -> Point {
        Point {
            x: (column as i32 - origin.x as i32) * self.cell_width as i32,
            y: (row as i32 - origin.y as i32) * self.cell_height as i32,
        }
    }
}

fn ceil_div(value: i32, divisor: i32) -> i32 {
    (value.saturating_add(divisor - 1)).div_euclid(divisor)
}

fn to_cell(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_within_moves_rect_inside() {
        let bounds = LogicalRect::new(0, 0, 640, 384);
        let rect = LogicalRect::new(600, -40, 200, 150);
        let clamped = rect.clamp_within(&bounds, Size::new(200, 150));
        assert_eq!(clamped, LogicalRect::new(440, 0, 200, 150));
        assert!(bounds.contains_rect(&clamped));
    }

    #[test]
    fn clamp_within_caps_oversized_rect() {
        let bounds = LogicalRect::new(0, 0, 300, 200);
        let rect = LogicalRect::new(50, 50, 400, 350);
        let clamped = rect.clamp_within(&bounds, Size::new(200, 150));
        assert_eq!(clamped, LogicalRect::new(0, 0, 300, 200));
    }

    #[test]
    fn clamp_within_raises_size_to_floor() {
        let bounds = LogicalRect::new(0, 0, 640, 384);
        let rect = LogicalRect::new(10, 10, 50, 20);
        let clamped = rect.clamp_within(&bounds, Size::new(200, 150));
        assert_eq!(clamped.size(), Size::new(200, 150));
    }

    #[test]
    fn floor_never_exceeds_tiny_bounds() {
        let bounds = LogicalRect::new(0, 0, 80, 48);
        let rect = LogicalRect::new(0, 0, 350, 300);
        let clamped = rect.clamp_within(&bounds, Size::new(200, 150));
        assert_eq!(clamped, bounds);
    }

    #[test]
    fn cell_projection_stays_inside_area() {
        let scale = CellScale::new(8, 16);
        let area = Rect::new(2, 1, 80, 24);
        let bounds = scale.bounds_for(area);
        assert_eq!(bounds, LogicalRect::new(0, 0, 640, 384));
        let rect = LogicalRect::new(445, 239, 195, 145);
        let cells = scale.to_cells(rect, area);
        assert_eq!(cells.x, 2 + 55);
        assert_eq!(cells.y, 1 + 14);
        assert!(cells.right() <= area.right());
        assert!(cells.bottom() <= area.bottom());
    }

    #[test]
    fn to_logical_is_relative_to_origin() {
        let scale = CellScale::new(8, 16);
        let area = Rect::new(4, 2, 40, 10);
        assert_eq!(scale.to_logical(4, 2, area), Point::new(0, 0));
        assert_eq!(scale.to_logical(10, 5, area), Point::new(48, 48));
    }

    #[test]
    fn zero_scale_is_promoted_to_one() {
        let scale = CellScale::new(0, 0);
        assert_eq!(scale.cell_width(), 1);
        assert_eq!(scale.cell_height(), 1);
    }

    #[test]
    fn rect_contains_edge_cases() {
        let empty = Rect::new(0, 0, 0, 5);
        assert!(!rect_contains(empty, 0, 0));
        let r = Rect::new(1, 1, 3, 3);
        assert!(rect_contains(r, 1, 1));
        assert!(!rect_contains(r, 4, 1));
    }
}
