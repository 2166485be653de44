use crossterm::event::{Event, KeyEventKind};

/// Filters raw terminal events down to the ones the workspace acts on.
///
/// Terminals with the kitty keyboard protocol, and Windows consoles, report
/// key releases (and Windows also auto-repeats); only presses get through.
#[derive(Debug, Default)]
pub struct KeyboardNormalizer;

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        match evt {
            Event::Key(key) => match key.kind {
                KeyEventKind::Release => None,
                KeyEventKind::Repeat if cfg!(windows) => None,
                _ => Some(Event::Key(key)),
            },
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn release_key_is_ignored() {
        let mut norm = KeyboardNormalizer::new();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(norm.normalize(Event::Key(key)).is_none());
    }

    #[test]
    fn press_and_non_key_events_pass_through() {
        let mut norm = KeyboardNormalizer::new();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(norm.normalize(Event::Key(key)).is_some());
        assert!(norm.normalize(Event::Resize(10, 20)).is_some());
    }
}
