use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::Rect;
use ratatui::style::Style;

use crate::components::{Component, ComponentContext, StatusBar};
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::theme;
use crate::ui::UiFrame;
use crate::window::{NavigationRequest, Workspace};

const HINTS: &str = " drag title: move · drag edge: resize · click: focus · q: quit";

/// Receives in-app navigation requested by link windows. The workspace
/// forwards paths without resolving them.
pub trait NavigationSink {
    fn navigate(&mut self, request: &NavigationRequest);
}

impl<F> NavigationSink for F
where
    F: FnMut(&NavigationRequest),
{
    fn navigate(&mut self, request: &NavigationRequest) {
        self(request)
    }
}

/// Keeps every request, most recent last.
#[derive(Debug, Default)]
pub struct NavigationLog {
    requests: Vec<NavigationRequest>,
}

impl NavigationLog {
    pub fn requests(&self) -> &[NavigationRequest] {
        &self.requests
    }

    pub fn last(&self) -> Option<&NavigationRequest> {
        self.requests.last()
    }
}

impl NavigationSink for NavigationLog {
    fn navigate(&mut self, request: &NavigationRequest) {
        self.requests.push(request.clone());
    }
}

/// Quit on `q`, `Esc` or `Ctrl+Q`.
pub fn is_quit_event(event: &Event) -> bool {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return false;
    };
    match code {
        KeyCode::Esc => true,
        KeyCode::Char('q') => modifiers.is_empty() || *modifiers == KeyModifiers::CONTROL,
        _ => false,
    }
}

/// Host `workspace` full-screen until the user quits.
///
/// The last row of the output holds a status bar; the rest is the canvas.
/// Navigation requests are handed to `sink` as soon as the event that raised
/// them has been handled.
pub fn run_workspace<O, D, N>(
    output: &mut O,
    input: D,
    workspace: &mut Workspace,
    sink: &mut N,
    poll_interval: Duration,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
    N: NavigationSink + ?Sized,
{
    output.enter()?;
    let result = pump(output, input, workspace, sink, poll_interval);
    let exited = output.exit();
    result.and(exited)
}

fn pump<O, D, N>(
    output: &mut O,
    input: D,
    workspace: &mut Workspace,
    sink: &mut N,
    poll_interval: Duration,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
    N: NavigationSink + ?Sized,
{
    let mut status = StatusBar::new();
    status.set_style(Style::default().bg(theme::status_bg()).fg(theme::status_fg()));
    status.set_left(HINTS);
    let mut event_loop = EventLoop::new(input, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;

    event_loop.run(|_driver, event| {
        let Some(event) = event else {
            output.draw(|mut frame| draw_desktop(&mut frame, workspace, &mut status))?;
            return Ok(ControlFlow::Continue);
        };
        if is_quit_event(&event) {
            tracing::debug!("quit requested");
            return Ok(ControlFlow::Quit);
        }
        workspace.handle_event(&event);
        for (window_id, frame_event) in workspace.take_events() {
            tracing::trace!(window_id = %window_id, event = ?frame_event, "frame event");
        }
        for request in workspace.take_navigation_requests() {
            status.set_right(format!("→ {} ", request.path));
            sink.navigate(&request);
        }
        Ok(ControlFlow::Continue)
    })
}

fn draw_desktop(frame: &mut UiFrame<'_>, workspace: &mut Workspace, status: &mut StatusBar) {
    let area = frame.area();
    if area.height < 2 {
        workspace.render(frame, area);
        return;
    }
    let canvas = Rect {
        height: area.height - 1,
        ..area
    };
    let status_row = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    workspace.render(frame, canvas);
    status.render(frame, status_row, &ComponentContext::default());
}
