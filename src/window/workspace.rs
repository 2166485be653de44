//! The workspace: a bounded canvas of floating windows with a single,
//! authoritative stacking order.

use std::collections::HashMap;

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};

use super::decorator::{MacDecorator, WindowDecorator};
use super::{
    FrameEvent, GestureKind, StackOrder, WindowDefinition, WindowFrame, WindowId, WorkspaceError,
};
use crate::components::{Component, ComponentContext, ContentView};
use crate::config::WorkspaceConfig;
use crate::constants::CANVAS_GRID_DIVISIONS;
use crate::layout::floating::{FrameRegion, region_at};
use crate::layout::{LogicalRect, Point, rect_contains};
use crate::theme;
use crate::ui::UiFrame;

/// A click on a link asked the host to navigate in-app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub window_id: WindowId,
    pub path: String,
}

/// One window as it will be painted this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDraw {
    pub id: WindowId,
    pub z_index: i32,
    /// Geometry in logical units.
    pub logical: LogicalRect,
    /// Geometry projected onto terminal cells.
    pub rect: Rect,
    pub focused: bool,
    pub gesture: GestureKind,
}

#[derive(Debug)]
pub struct Workspace {
    config: WorkspaceConfig,
    definitions: Vec<WindowDefinition>,
    frames: Vec<WindowFrame>,
    views: Vec<ContentView>,
    slots: HashMap<WindowId, usize>,
    stack: StackOrder,
    viewport: Rect,
    bounds: Option<LogicalRect>,
    active: Option<usize>,
    events: Vec<(WindowId, FrameEvent)>,
    navigation: Vec<NavigationRequest>,
    decorator: Box<dyn WindowDecorator>,
}

impl Workspace {
    /// Build a workspace over `definitions`, stacked in their given order
    /// (the first definition starts in front).
    pub fn new(
        definitions: Vec<WindowDefinition>,
        config: WorkspaceConfig,
    ) -> Result<Self, WorkspaceError> {
        let stack = StackOrder::new(definitions.iter().map(|d| d.id.clone()))?;
        if i64::from(config.z_base) <= definitions.len() as i64 {
            return Err(WorkspaceError::ZBaseTooSmall {
                base: config.z_base,
                count: definitions.len(),
            });
        }
        let frames = definitions
            .iter()
            .map(|d| WindowFrame::new(d, config.min_size))
            .collect();
        let views = definitions
            .iter()
            .map(|d| ContentView::new(&d.content))
            .collect();
        let slots = definitions
            .iter()
            .enumerate()
            .map(|(slot, d)| (d.id.clone(), slot))
            .collect();
        tracing::debug!(windows = definitions.len(), "workspace created");
        Ok(Self {
            config,
            definitions,
            frames,
            views,
            slots,
            stack,
            viewport: Rect::default(),
            bounds: None,
            active: None,
            events: Vec::new(),
            navigation: Vec::new(),
            decorator: Box::new(MacDecorator),
        })
    }

    pub fn with_decorator(mut self, decorator: Box<dyn WindowDecorator>) -> Self {
        self.decorator = decorator;
        self
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn definitions(&self) -> &[WindowDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Move `id` to the front of the stack. Unknown ids are ignored.
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        if !self.stack.contains(id) {
            tracing::debug!(window_id = id, "focus requested for unknown window");
            return false;
        }
        let changed = self.stack.bring_to_front(id);
        if changed {
            tracing::trace!(window_id = id, "window raised");
        }
        changed
    }

    /// Stacking priority of `id`: the front window gets the configured base
    /// and each window behind it one less.
    pub fn z_index_of(&self, id: &str) -> Option<i32> {
        self.stack
            .position(id)
            .map(|position| self.config.z_base - position as i32)
    }

    pub fn stack_order(&self) -> &[WindowId] {
        self.stack.as_slice()
    }

    pub fn focused(&self) -> Option<&WindowId> {
        self.stack.front()
    }

    pub fn frame(&self, id: &str) -> Option<&WindowFrame> {
        self.slots.get(id).map(|&slot| &self.frames[slot])
    }

    pub fn content_view(&self, id: &str) -> Option<&ContentView> {
        self.slots.get(id).map(|&slot| &self.views[slot])
    }

    /// Logical bounds of the canvas, known once a viewport has been set.
    pub fn bounds(&self) -> Option<LogicalRect> {
        self.bounds
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Window currently being dragged or resized, if any.
    pub fn active_gesture(&self) -> Option<(&WindowId, GestureKind)> {
        self.active
            .map(|slot| (self.frames[slot].id(), self.frames[slot].gesture()))
    }

    /// Record the terminal area hosting the canvas. When the derived bounds
    /// change every window is pulled back inside them.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        let bounds = self.config.cell_scale.bounds_for(area);
        if self.bounds == Some(bounds) {
            return;
        }
        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            "workspace bounds changed"
        );
        for frame in &mut self.frames {
            frame.constrain(&bounds);
        }
        self.bounds = Some(bounds);
    }

    /// Route an input event. Returns whether the workspace consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(event, mouse),
            Event::FocusLost => self.cancel_gesture(),
            _ => false,
        }
    }

    /// End the active gesture without a pointer release.
    pub fn cancel_gesture(&mut self) -> bool {
        let Some(slot) = self.active.take() else {
            return false;
        };
        if let Some(event) = self.frames[slot].cancel_gesture() {
            self.push_event(slot, event);
        }
        true
    }

    pub fn take_events(&mut self) -> Vec<(WindowId, FrameEvent)> {
        std::mem::take(&mut self.events)
    }

    pub fn take_navigation_requests(&mut self) -> Vec<NavigationRequest> {
        std::mem::take(&mut self.navigation)
    }

    /// Windows from back to front, i.e. in ascending z-index.
    pub fn draw_plan(&self) -> Vec<WindowDraw> {
        let front = self.stack.front();
        self.stack
            .back_to_front()
            .filter_map(|id| {
                let slot = *self.slots.get(id)?;
                let frame = &self.frames[slot];
                Some(WindowDraw {
                    id: id.clone(),
                    z_index: self.z_index_of(id.as_str())?,
                    logical: frame.rect(),
                    rect: self.cells_of(slot),
                    focused: front == Some(id),
                    gesture: frame.gesture(),
                })
            })
            .collect()
    }

    /// Paint the canvas and every window into `area`.
    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect) {
        self.set_viewport(area);
        self.render_canvas(frame, area);
        for draw in self.draw_plan() {
            let Some(&slot) = self.slots.get(&draw.id) else {
                continue;
            };
            frame.render_widget(Clear, draw.rect);
            self.decorator.render_window(
                frame,
                draw.rect,
                self.frames[slot].title(),
                draw.focused,
                draw.gesture,
            );
            let body = self.decorator.body_area(draw.rect);
            let ctx = ComponentContext::new(draw.focused).with_gesture(draw.gesture);
            self.views[slot].render(frame, body, &ctx);
        }
    }

    fn render_canvas(&self, frame: &mut UiFrame<'_>, area: Rect) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::canvas_bg())),
            area,
        );
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(theme::canvas_grid()).bg(theme::canvas_bg());
        let divisions = CANVAS_GRID_DIVISIONS as u32;
        for i in 1..divisions {
            let x = area.x + (area.width as u32 * i / divisions) as u16;
            for j in 1..divisions {
                let y = area.y + (area.height as u32 * j / divisions) as u16;
                frame.set_cell(area, x, y, "·", style);
            }
        }
    }

    fn handle_mouse(&mut self, event: &Event, mouse: &MouseEvent) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        let pointer = self
            .config
            .cell_scale
            .to_logical(mouse.column, mouse.row, self.viewport);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer_down(mouse.column, mouse.row, pointer)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(slot) = self.active else {
                    return false;
                };
                self.frames[slot].pointer_moved(pointer, &bounds);
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(slot) = self.active.take() else {
                    return false;
                };
                if let Some(event) = self.frames[slot].pointer_up() {
                    self.push_event(slot, event);
                }
                true
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let Some(slot) = self.hit_test(mouse.column, mouse.row) else {
                    return false;
                };
                let ctx = self.sync_body(slot);
                self.views[slot].handle_event(event, &ctx)
            }
            _ => false,
        }
    }

    fn pointer_down(&mut self, column: u16, row: u16, pointer: Point) -> bool {
        // One pointer: a new press means the release of the running gesture
        // was lost, e.g. outside the terminal.
        if self.cancel_gesture() {
            tracing::debug!("press during gesture; previous gesture ended");
        }
        let Some(slot) = self.hit_test(column, row) else {
            return false;
        };
        let Some(region) = region_at(self.cells_of(slot), column, row) else {
            return false;
        };
        let id = self.frames[slot].id().clone();
        for event in self.frames[slot].pointer_down(region, pointer) {
            match event {
                FrameEvent::FocusRequested => {
                    self.bring_to_front(id.as_str());
                }
                FrameEvent::DragStarted | FrameEvent::ResizeStarted => self.active = Some(slot),
                FrameEvent::DragStopped | FrameEvent::ResizeStopped => {}
            }
            self.push_event(slot, event);
        }
        if region == FrameRegion::Body {
            self.sync_body(slot);
            if let Some(path) = self.views[slot].link_at(column, row) {
                tracing::info!(window_id = %id, path, "navigation requested");
                self.navigation.push(NavigationRequest {
                    window_id: id,
                    path: path.to_owned(),
                });
            }
        }
        true
    }

    /// Front-most window under the cell, if any.
    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.stack
            .as_slice()
            .iter()
            .filter_map(|id| self.slots.get(id).copied())
            .find(|&slot| rect_contains(self.cells_of(slot), column, row))
    }

    fn cells_of(&self, slot: usize) -> Rect {
        self.config
            .cell_scale
            .to_cells(self.frames[slot].rect(), self.viewport)
    }

    /// Bring the body view's area in line with the frame's current geometry,
    /// which may have moved since the last paint.
    fn sync_body(&mut self, slot: usize) -> ComponentContext {
        let body = self.decorator.body_area(self.cells_of(slot));
        let frame = &self.frames[slot];
        let ctx = ComponentContext::new(self.stack.front() == Some(frame.id()))
            .with_gesture(frame.gesture());
        self.views[slot].resize(body, &ctx);
        ctx
    }

    fn push_event(&mut self, slot: usize, event: FrameEvent) {
        self.events.push((self.frames[slot].id().clone(), event));
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.cancel_gesture();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentDescriptor;
    use crate::layout::Size;
    use crossterm::event::KeyModifiers;
    use ratatui::buffer::Buffer;

    const VIEWPORT: Rect = Rect::new(0, 0, 80, 24);

    fn def(id: &str, x: i32, y: i32) -> WindowDefinition {
        WindowDefinition::new(id, id.to_uppercase(), ContentDescriptor::text(id, "body"))
            .with_position(x, y)
            .with_size(240, 160)
    }

    fn workspace(ids: &[&str]) -> Workspace {
        let defs = ids.iter().map(|id| def(id, 0, 0)).collect();
        Workspace::new(defs, WorkspaceConfig::default()).expect("valid workspace")
    }

    fn order(ws: &Workspace) -> Vec<&str> {
        ws.stack_order().iter().map(WindowId::as_str).collect()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// a covers cells (0,0)-(29,9), b (10,4)-(39,13), c (50,12)-(79,21).
    fn overlapping() -> Workspace {
        let defs = vec![def("a", 0, 0), def("b", 80, 64), def("c", 400, 192)];
        let mut ws = Workspace::new(defs, WorkspaceConfig::default()).expect("valid workspace");
        ws.set_viewport(VIEWPORT);
        ws
    }

    #[test]
    fn focus_scenario_reorders_and_rederives_z() {
        let mut ws = workspace(&["a", "b", "c"]);
        assert_eq!(order(&ws), ["a", "b", "c"]);
        assert_eq!(ws.z_index_of("a"), Some(1000));
        assert_eq!(ws.z_index_of("b"), Some(999));
        assert_eq!(ws.z_index_of("c"), Some(998));

        ws.bring_to_front("c");
        assert_eq!(order(&ws), ["c", "a", "b"]);
        assert_eq!(ws.z_index_of("c"), Some(1000));
        assert_eq!(ws.z_index_of("a"), Some(999));
        assert_eq!(ws.z_index_of("b"), Some(998));

        ws.bring_to_front("c");
        assert_eq!(order(&ws), ["c", "a", "b"]);

        ws.bring_to_front("b");
        assert_eq!(order(&ws), ["b", "c", "a"]);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut ws = workspace(&["a", "b"]);
        assert!(!ws.bring_to_front("nonexistent"));
        assert_eq!(order(&ws), ["a", "b"]);
        assert_eq!(ws.z_index_of("nonexistent"), None);
    }

    #[test]
    fn construction_rejects_bad_configuration() {
        let dup = vec![def("a", 0, 0), def("a", 10, 10)];
        assert_eq!(
            Workspace::new(dup, WorkspaceConfig::default()).unwrap_err(),
            WorkspaceError::DuplicateWindowId(WindowId::from("a"))
        );
        let low_base = WorkspaceConfig::default().with_z_base(2);
        assert_eq!(
            Workspace::new(vec![def("a", 0, 0), def("b", 0, 0)], low_base).unwrap_err(),
            WorkspaceError::ZBaseTooSmall { base: 2, count: 2 }
        );
    }

    #[test]
    fn empty_workspace_is_valid() {
        let mut ws = Workspace::new(Vec::new(), WorkspaceConfig::default()).expect("empty is ok");
        ws.set_viewport(VIEWPORT);
        assert!(ws.is_empty());
        assert!(ws.draw_plan().is_empty());
        assert!(!ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 3)));
    }

    #[test]
    fn draw_plan_paints_front_window_last() {
        let mut ws = overlapping();
        ws.bring_to_front("b");
        let plan = ws.draw_plan();
        let ids: Vec<&str> = plan.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert!(plan.windows(2).all(|w| w[0].z_index < w[1].z_index));
        assert!(plan.last().is_some_and(|d| d.focused));
        assert_eq!(plan[2].rect, Rect::new(10, 4, 30, 10));
    }

    #[test]
    fn title_bar_press_focuses_before_drag() {
        let mut ws = overlapping();
        // b's title bar, right of where a overlaps it
        assert!(ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 35, 5)));
        assert_eq!(order(&ws), ["b", "a", "c"]);
        assert!(ws.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 40, 6)));
        assert_eq!(
            ws.frame("b").map(WindowFrame::rect),
            Some(LogicalRect::new(120, 80, 240, 160))
        );
        assert!(ws.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 40, 6)));
        let b = WindowId::from("b");
        assert_eq!(
            ws.take_events(),
            vec![
                (b.clone(), FrameEvent::FocusRequested),
                (b.clone(), FrameEvent::DragStarted),
                (b, FrameEvent::DragStopped),
            ]
        );
        assert!(ws.take_events().is_empty());
    }

    #[test]
    fn press_on_overlap_hits_front_window() {
        let mut ws = overlapping();
        ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 15, 7));
        assert_eq!(order(&ws), ["a", "b", "c"]);
        assert_eq!(ws.take_events(), vec![(WindowId::from("a"), FrameEvent::FocusRequested)]);
    }

    #[test]
    fn body_press_never_drags() {
        let mut ws = overlapping();
        ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 60, 17));
        assert_eq!(order(&ws), ["c", "a", "b"]);
        assert!(ws.active_gesture().is_none());
        assert!(!ws.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 2)));
        assert_eq!(
            ws.frame("c").map(|f| f.rect().origin()),
            Some(Point::new(400, 192))
        );
    }

    #[test]
    fn border_press_resizes_with_floor() {
        let mut ws = overlapping();
        // c's bottom-right corner
        ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 79, 21));
        assert_eq!(
            ws.active_gesture().map(|(id, g)| (id.as_str(), g)),
            Some(("c", GestureKind::Resizing))
        );
        ws.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0));
        assert_eq!(ws.frame("c").map(|f| f.rect().size()), Some(Size::new(200, 150)));
        ws.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert!(ws.active_gesture().is_none());
    }

    #[test]
    fn drag_is_clamped_to_canvas() {
        let mut ws = overlapping();
        ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
        ws.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 200, 200));
        let rect = ws.frame("a").map(WindowFrame::rect).expect("a exists");
        assert_eq!(rect, LogicalRect::new(400, 224, 240, 160));
        assert!(ws.bounds().is_some_and(|b| b.contains_rect(&rect)));
    }

    #[test]
    fn press_after_lost_release_ends_previous_gesture() {
        let mut ws = overlapping();
        ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
        ws.take_events();
        // no release for a; the next press lands on c's title bar
        ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 60, 13));
        assert_eq!(order(&ws), ["c", "a", "b"]);
        let a = WindowId::from("a");
        let c = WindowId::from("c");
        assert_eq!(
            ws.take_events(),
            vec![
                (a, FrameEvent::DragStopped),
                (c.clone(), FrameEvent::FocusRequested),
                (c, FrameEvent::DragStarted),
            ]
        );
        assert_eq!(
            ws.active_gesture().map(|(id, g)| (id.as_str(), g)),
            Some(("c", GestureKind::Dragging))
        );

        ws.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 58, 12));
        assert_eq!(
            ws.frame("c").map(WindowFrame::rect),
            Some(LogicalRect::new(384, 176, 240, 160))
        );
        assert_eq!(
            ws.frame("a").map(WindowFrame::rect),
            Some(LogicalRect::new(0, 0, 240, 160))
        );
    }

    #[test]
    fn shrinking_viewport_reclamps_windows() {
        let mut ws = overlapping();
        ws.set_viewport(Rect::new(0, 0, 40, 12));
        let bounds = ws.bounds().expect("bounds set");
        assert_eq!(bounds, LogicalRect::new(0, 0, 320, 192));
        for draw in ws.draw_plan() {
            assert!(bounds.contains_rect(&draw.logical), "{} escaped", draw.id);
        }
    }

    #[test]
    fn link_click_queues_navigation() {
        let defs = vec![
            WindowDefinition::new(
                "shop",
                "Shop Now",
                ContentDescriptor::link("Visit Store", "/collections/all", "Browse"),
            )
            .with_position(0, 0)
            .with_size(240, 160),
        ];
        let mut ws = Workspace::new(defs, WorkspaceConfig::default()).expect("valid workspace");
        ws.set_viewport(VIEWPORT);
        // body starts at row 2; first body row is the link label
        ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 2));
        assert_eq!(
            ws.take_navigation_requests(),
            vec![NavigationRequest {
                window_id: WindowId::from("shop"),
                path: "/collections/all".into(),
            }]
        );
        ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 6));
        assert!(ws.take_navigation_requests().is_empty());
    }

    #[test]
    fn focus_lost_cancels_gesture() {
        let mut ws = overlapping();
        ws.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
        ws.take_events();
        assert!(ws.handle_event(&Event::FocusLost));
        assert!(ws.active_gesture().is_none());
        assert_eq!(ws.take_events(), vec![(WindowId::from("a"), FrameEvent::DragStopped)]);
    }

    #[test]
    fn render_paints_front_title_over_back_window() {
        let mut ws = overlapping();
        let mut buf = Buffer::empty(VIEWPORT);
        {
            let mut frame = UiFrame::from_parts(VIEWPORT, &mut buf);
            ws.render(&mut frame, VIEWPORT);
        }
        // a is in front: its bottom border crosses b at row 9
        assert_eq!(buf.cell((15, 9)).map(|c| c.symbol()), Some("─"));
        assert_eq!(buf.cell((29, 9)).map(|c| c.symbol()), Some("┘"));
        // b's body continues to the right of a
        assert_eq!(buf.cell((39, 9)).map(|c| c.symbol()), Some("│"));
    }
}
