//! Shared crate-wide constants.

/// Stacking priority given to the front-most window. Every other window sits
/// `BASE - position` below it, so the base must stay above the window count.
pub const DEFAULT_Z_BASE: i32 = 1000;

/// Default resize floor for a window, in logical units.
pub const DEFAULT_MIN_WIDTH: u32 = 200;
pub const DEFAULT_MIN_HEIGHT: u32 = 150;

/// Geometry used when a definition omits its initial placement.
pub const DEFAULT_POSITION: (i32, i32) = (20, 20);
pub const DEFAULT_SIZE: (u32, u32) = (350, 300);

/// Logical units covered by one terminal column / row.
///
/// Terminal cells are roughly twice as tall as they are wide, so a row spans
/// twice the logical height of a column. With the defaults an 80x24 terminal
/// hosts a 640x384 logical canvas.
pub const DEFAULT_CELL_WIDTH: u16 = 8;
pub const DEFAULT_CELL_HEIGHT: u16 = 16;

/// Rows consumed by window chrome above the body: top border plus title bar.
pub const CHROME_TOP_ROWS: u16 = 2;

/// Grid divisions drawn on the workspace background.
pub const CANVAS_GRID_DIVISIONS: u16 = 12;

/// Lines scrolled per mouse wheel notch inside a window body.
pub const WHEEL_SCROLL_LINES: isize = 1;

/// Upper bound accepted for either cell scale axis.
pub const MAX_CELL_SCALE: u16 = 64;
