//! Focus order of the workspace windows, most recently focused first.

use std::collections::HashMap;

use super::{WindowId, WorkspaceError};

/// Ordered set of window ids, front-most first.
///
/// Holds every known id exactly once for its whole life. The only mutation is
/// [`StackOrder::bring_to_front`], which keeps that invariant by rotating the
/// prefix up to the focused id. An id→position index is kept alongside the
/// order so stacking lookups stay O(1) however many windows there are; focus
/// changes only re-index the rotated prefix.
#[derive(Debug, Clone)]
pub struct StackOrder {
    order: Vec<WindowId>,
    positions: HashMap<WindowId, usize>,
}

impl StackOrder {
    /// Build the identity order of `ids`. Duplicate or empty ids are rejected.
    pub fn new<I>(ids: I) -> Result<Self, WorkspaceError>
    where
        I: IntoIterator<Item = WindowId>,
    {
        let mut order = Vec::new();
        let mut positions = HashMap::new();
        for (index, id) in ids.into_iter().enumerate() {
            if id.as_str().is_empty() {
                return Err(WorkspaceError::EmptyWindowId { index });
            }
            if positions.insert(id.clone(), index).is_some() {
                return Err(WorkspaceError::DuplicateWindowId(id));
            }
            order.push(id);
        }
        Ok(Self { order, positions })
    }

    /// Move `id` to the front, preserving the relative order of the others.
    ///
    /// Returns whether the order changed. Unknown ids leave the order alone.
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        let Some(&pos) = self.positions.get(id) else {
            return false;
        };
        if pos == 0 {
            return false;
        }
        self.order[..=pos].rotate_right(1);
        for (index, moved) in self.order[..=pos].iter().enumerate() {
            if let Some(slot) = self.positions.get_mut(moved) {
                *slot = index;
            }
        }
        true
    }

    /// Position of `id`, where 0 is the front.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn front(&self) -> Option<&WindowId> {
        self.order.first()
    }

    pub fn as_slice(&self) -> &[WindowId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids from the back of the stack to the front: the paint order.
    pub fn back_to_front(&self) -> impl Iterator<Item = &WindowId> {
        self.order.iter().rev()
    }
}
