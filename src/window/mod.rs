pub mod decorator;
pub mod frame;
pub mod stack;

mod workspace;

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_POSITION, DEFAULT_SIZE};
use crate::content::WindowContent;
use crate::layout::{LogicalRect, Point, Size};

pub use frame::{FrameEvent, GestureKind, WindowFrame};
pub use stack::StackOrder;
pub use workspace::{NavigationRequest, WindowDraw, Workspace};

/// Stable identifier of a window, unique within one workspace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for WindowId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Everything the page supplies about one window. Immutable once the
/// workspace is built.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDefinition {
    pub id: WindowId,
    pub title: String,
    pub content: WindowContent,
    pub initial_position: Point,
    pub initial_size: Size,
}

impl WindowDefinition {
    pub fn new(
        id: impl Into<WindowId>,
        title: impl Into<String>,
        content: impl Into<WindowContent>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            initial_position: Point::new(DEFAULT_POSITION.0, DEFAULT_POSITION.1),
            initial_size: Size::new(DEFAULT_SIZE.0, DEFAULT_SIZE.1),
        }
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.initial_position = Point::new(x, y);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = Size::new(width, height);
        self
    }

    pub fn initial_rect(&self) -> LogicalRect {
        LogicalRect::from_parts(self.initial_position, self.initial_size)
    }
}

/// Invalid window definitions handed to [`Workspace::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("window id `{0}` is defined more than once")]
    DuplicateWindowId(WindowId),
    #[error("window definition at index {index} has an empty id")]
    EmptyWindowId { index: usize },
    #[error("z-index base {base} must exceed the window count {count}")]
    ZBaseTooSmall { base: i32, count: usize },
}
