//! Shared component rendering context
//!
//! `ComponentContext` carries the window state a component may need while
//! rendering or handling events, so the `Component` trait stays stable and
//! components do not grow ad-hoc boolean parameters.

use crate::window::GestureKind;

/// Context passed to `Component` trait methods.
///
/// - `focused`: whether the hosting window is the front-most one.
/// - `gesture`: the hosting window's current drag/resize state.
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext {
    focused: bool,
    gesture: GestureKind,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            gesture: GestureKind::Idle,
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn gesture(&self) -> GestureKind {
        self.gesture
    }

    /// Whether the hosting window is being moved or resized.
    pub const fn interacting(&self) -> bool {
        !matches!(self.gesture, GestureKind::Idle)
    }

    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub const fn with_gesture(mut self, gesture: GestureKind) -> Self {
        self.gesture = gesture;
        self
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::new(false)
    }
}
