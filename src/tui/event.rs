use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Always honoured, whatever has focus
    ForceQuit, // Ctrl+C
    Resize,

    // Navigation
    Escape,
    Submit,
    NextField, // Tab
    PrevField, // Shift+Tab
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Text editing
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,

    // Booking form shortcuts
    Approve, // Ctrl+A
    Reject,  // Ctrl+R
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('a')) => Some(TuiEvent::Approve),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Reject),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) => Some(TuiEvent::NextField),
        (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(map_key(KeyModifiers::CONTROL, KeyCode::Char('c')), Some(TuiEvent::ForceQuit));
        assert_eq!(map_key(KeyModifiers::CONTROL, KeyCode::Char('a')), Some(TuiEvent::Approve));
        assert_eq!(map_key(KeyModifiers::CONTROL, KeyCode::Char('r')), Some(TuiEvent::Reject));
    }

    #[test]
    fn test_plain_and_shifted_chars_are_input() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('a')), Some(TuiEvent::InputChar('a')));
        assert_eq!(map_key(KeyModifiers::SHIFT, KeyCode::Char('A')), Some(TuiEvent::InputChar('A')));
    }

    #[test]
    fn test_tab_directions() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Tab), Some(TuiEvent::NextField));
        assert_eq!(map_key(KeyModifiers::SHIFT, KeyCode::BackTab), Some(TuiEvent::PrevField));
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::F(5)), None);
    }
}
