use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// The message pump driving the workspace.
///
/// It owns the input driver and is the only place that polls it. Every state
/// transition happens synchronously inside the handler, on this thread.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Run until the handler asks to quit.
    ///
    /// The handler is called with `None` once per tick (the place to draw)
    /// and with `Some(event)` for each input event.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain bursts (drags, wheel spins) before the next draw so
                // rendering never falls behind the input stream.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::headless::ScriptedInputDriver;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn ticks_between_bursts_and_stops_on_quit() {
        let mut driver = ScriptedInputDriver::new([key('a'), key('b')]);
        driver.push_idle();
        driver.push(key('q'));
        driver.push(key('z'));
        let mut event_loop = EventLoop::new(driver, Duration::ZERO);
        let mut seen = Vec::new();
        event_loop
            .run(|_, event| {
                seen.push(match event {
                    Some(Event::Key(KeyEvent {
                        code: KeyCode::Char(c),
                        ..
                    })) => c.to_string(),
                    Some(_) => "other".to_string(),
                    None => "tick".to_string(),
                });
                if seen.last().map(String::as_str) == Some("q") {
                    return Ok(ControlFlow::Quit);
                }
                Ok(ControlFlow::Continue)
            })
            .expect("loop ends on quit");
        assert_eq!(seen, ["tick", "a", "b", "tick", "q"]);
        assert_eq!(event_loop.driver().remaining(), 1);
    }
}
