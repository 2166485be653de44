//! A single movable, resizable window panel.
//!
//! The frame owns its transient geometry and gesture state. It never decides
//! where it sits in the stack: every pointer-down produces a
//! [`FrameEvent::FocusRequested`] for the owning workspace to act on.

use crate::layout::floating::{FrameRegion, ResizeEdge, apply_drag, apply_resize};
use crate::layout::{LogicalRect, Point, Size};

use super::{WindowDefinition, WindowId};

/// Notifications a frame raises towards its workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    FocusRequested,
    DragStarted,
    DragStopped,
    ResizeStarted,
    ResizeStopped,
}

/// Visible interaction state, used only for cursor-style affordances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureKind {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

#[derive(Debug, Clone, Copy)]
enum Gesture {
    Idle,
    Dragging {
        grab: Point,
        start: LogicalRect,
    },
    Resizing {
        edge: ResizeEdge,
        grab: Point,
        start: LogicalRect,
    },
}

#[derive(Debug, Clone)]
pub struct WindowFrame {
    id: WindowId,
    title: String,
    rect: LogicalRect,
    min_size: Size,
    gesture: Gesture,
}

impl WindowFrame {
    /// Create the frame at its definition's initial geometry, grown to at
    /// least `min_size`.
    pub fn new(definition: &WindowDefinition, min_size: Size) -> Self {
        let initial = definition.initial_rect();
        Self {
            id: definition.id.clone(),
            title: definition.title.clone(),
            rect: LogicalRect::from_parts(initial.origin(), initial.size().max(min_size)),
            min_size,
            gesture: Gesture::Idle,
        }
    }

    pub fn id(&self) -> &WindowId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rect(&self) -> LogicalRect {
        self.rect
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn gesture(&self) -> GestureKind {
        match self.gesture {
            Gesture::Idle => GestureKind::Idle,
            Gesture::Dragging { .. } => GestureKind::Dragging,
            Gesture::Resizing { .. } => GestureKind::Resizing,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Gesture::Resizing { .. })
    }

    /// Pointer pressed on `region` at logical position `pointer`.
    ///
    /// The focus request always comes first so the window is raised before
    /// any movement is applied. A gesture starts only from the title bar
    /// (drag) or a border (resize), and only while no other gesture is active.
    pub fn pointer_down(&mut self, region: FrameRegion, pointer: Point) -> Vec<FrameEvent> {
        let mut events = vec![FrameEvent::FocusRequested];
        if !matches!(self.gesture, Gesture::Idle) {
            return events;
        }
        match region {
            FrameRegion::TitleBar => {
                self.gesture = Gesture::Dragging {
                    grab: pointer,
                    start: self.rect,
                };
                tracing::trace!(window_id = %self.id, "drag started");
                events.push(FrameEvent::DragStarted);
            }
            FrameRegion::Border(edge) => {
                self.gesture = Gesture::Resizing {
                    edge,
                    grab: pointer,
                    start: self.rect,
                };
                tracing::trace!(window_id = %self.id, ?edge, "resize started");
                events.push(FrameEvent::ResizeStarted);
            }
            FrameRegion::Body => {}
        }
        events
    }

    /// Pointer moved while pressed. Returns whether the geometry changed.
    pub fn pointer_moved(&mut self, pointer: Point, bounds: &LogicalRect) -> bool {
        let next = match self.gesture {
            Gesture::Idle => return false,
            Gesture::Dragging { grab, start } => apply_drag(start, grab, pointer, bounds),
            Gesture::Resizing { edge, grab, start } => {
                apply_resize(start, edge, grab, pointer, self.min_size, bounds)
            }
        };
        let changed = next != self.rect;
        self.rect = next;
        changed
    }

    /// Pointer released: ends the active gesture, if any.
    pub fn pointer_up(&mut self) -> Option<FrameEvent> {
        let ended = self.end_gesture();
        if let Some(event) = ended {
            tracing::trace!(window_id = %self.id, ?event, "gesture finished");
        }
        ended
    }

    /// End the active gesture without a pointer release, e.g. on teardown.
    pub fn cancel_gesture(&mut self) -> Option<FrameEvent> {
        let ended = self.end_gesture();
        if let Some(event) = ended {
            tracing::debug!(window_id = %self.id, ?event, "gesture cancelled");
        }
        ended
    }

    /// Keep the frame inside `bounds`, e.g. after the canvas shrank.
    pub fn constrain(&mut self, bounds: &LogicalRect) {
        self.rect = self.rect.clamp_within(bounds, self.min_size);
    }

    fn end_gesture(&mut self) -> Option<FrameEvent> {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => None,
            Gesture::Dragging { .. } => Some(FrameEvent::DragStopped),
            Gesture::Resizing { .. } => Some(FrameEvent::ResizeStopped),
        }
    }
}
