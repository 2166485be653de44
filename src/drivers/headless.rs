//! Drivers that need no terminal: a scripted input queue and an in-memory
//! output buffer.
//!
//! Public test support. Hosts embedding the workspace can drive
//! [`crate::runner::run_workspace`] end to end with these, the same way this
//! crate's own integration tests do. Nothing in the binary uses them.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use super::{InputDriver, OutputDriver};
use crate::ui::UiFrame;

#[derive(Debug)]
enum Step {
    Event(Event),
    Idle,
}

/// Replays a fixed list of events. An idle step makes one poll time out, so
/// the runner gets a tick to redraw. Running past the end of the script is an
/// error, so a script that forgets to quit cannot spin forever.
#[derive(Debug, Default)]
pub struct ScriptedInputDriver {
    steps: VecDeque<Step>,
    mouse_capture: bool,
}

impl ScriptedInputDriver {
    pub fn new<I>(events: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        Self {
            steps: events.into_iter().map(Step::Event).collect(),
            mouse_capture: false,
        }
    }

    pub fn push(&mut self, event: Event) {
        self.steps.push_back(Step::Event(event));
    }

    pub fn push_idle(&mut self) {
        self.steps.push_back(Step::Idle);
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture
    }
}

fn exhausted() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
}

impl InputDriver for ScriptedInputDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        match self.steps.front() {
            Some(Step::Event(_)) => Ok(true),
            Some(Step::Idle) => {
                self.steps.pop_front();
                Ok(false)
            }
            None => Err(exhausted()),
        }
    }

    fn read(&mut self) -> io::Result<Event> {
        while let Some(step) = self.steps.pop_front() {
            if let Step::Event(event) = step {
                return Ok(event);
            }
        }
        Err(exhausted())
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse_capture = enabled;
        Ok(())
    }
}

pub struct HeadlessOutputDriver {
    terminal: Terminal<TestBackend>,
    entered: bool,
    frames_drawn: usize,
}

impl HeadlessOutputDriver {
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .map_err(|err| io::Error::other(err.to_string()))?;
        Ok(Self {
            terminal,
            entered: false,
            frames_drawn: 0,
        })
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn entered(&self) -> bool {
        self.entered
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }
}

impl OutputDriver for HeadlessOutputDriver {
    type Backend = TestBackend;

    fn enter(&mut self) -> io::Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        self.entered = false;
        Ok(())
    }

    fn backend(&self) -> &Self::Backend {
        self.terminal.backend()
    }

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>),
    {
        self.terminal
            .draw(move |frame| f(UiFrame::new(frame)))
            .map_err(|err| io::Error::other(err.to_string()))?;
        self.frames_drawn += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    #[test]
    fn script_replays_in_order_then_errors() {
        let key = |c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        let mut driver = ScriptedInputDriver::new([key('a')]);
        driver.push_idle();
        driver.push(key('b'));
        assert!(driver.poll(Duration::ZERO).expect("poll"));
        assert!(matches!(driver.read(), Ok(Event::Key(k)) if k.code == KeyCode::Char('a')));
        assert!(!driver.poll(Duration::ZERO).expect("idle tick"));
        assert!(driver.poll(Duration::ZERO).expect("poll"));
        assert!(matches!(driver.read(), Ok(Event::Key(k)) if k.code == KeyCode::Char('b')));
        let err = driver.poll(Duration::ZERO).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn headless_output_captures_frames() {
        let mut output = HeadlessOutputDriver::new(10, 2).expect("backend");
        output
            .draw(|mut frame| {
                let area = frame.area();
                frame.set_string(area, 0, 0, "desk", ratatui::style::Style::default());
            })
            .expect("draw");
        assert_eq!(output.frames_drawn(), 1);
        assert_eq!(output.buffer().area, Rect::new(0, 0, 10, 2));
        assert_eq!(output.buffer().cell((0, 0)).map(|c| c.symbol()), Some("d"));
    }
}
