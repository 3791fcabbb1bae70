//! # TextField Component
//!
//! Single-line text input used by every form.
//!
//! The buffer is internal state; the cursor is a byte offset that always sits
//! on a char boundary. When the text is wider than the field, the view scrolls
//! so the cursor stays visible.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::components::form::{FieldView, FormField};
use crate::tui::event::TuiEvent;

pub struct TextField {
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pos: usize,
    placeholder: &'static str,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        let buffer = value.into();
        Self {
            pos: buffer.len(),
            buffer,
            placeholder: "",
        }
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Trimmed copy of the buffer.
    pub fn trimmed(&self) -> String {
        self.buffer.trim().to_string()
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.pos, text);
        self.pos += text.len();
    }
}

impl FormField for TextField {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                let mut encoded = [0u8; 4];
                self.insert(c.encode_utf8(&mut encoded));
                true
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.insert(&flat);
                true
            }
            TuiEvent::Backspace => {
                if self.pos == 0 {
                    return false;
                }
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                true
            }
            TuiEvent::Delete => {
                if self.pos >= self.buffer.len() {
                    return false;
                }
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                true
            }
            TuiEvent::CursorLeft => {
                if self.pos == 0 {
                    return false;
                }
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                true
            }
            TuiEvent::CursorRight => {
                if self.pos >= self.buffer.len() {
                    return false;
                }
                self.pos = next_char_boundary(&self.buffer, self.pos);
                true
            }
            TuiEvent::CursorHome => {
                self.pos = 0;
                true
            }
            TuiEvent::CursorEnd => {
                self.pos = self.buffer.len();
                true
            }
            _ => false,
        }
    }

    fn view(&self, width: u16) -> FieldView {
        if self.buffer.is_empty() {
            return FieldView {
                text: self.placeholder.to_string(),
                cursor: Some(0),
                is_placeholder: true,
            };
        }

        // Drop leading chars until the text before the cursor fits
        let width = usize::from(width.max(1));
        let mut start = 0;
        while start < self.pos && self.buffer[start..self.pos].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        let mut text = String::new();
        let mut used = 0;
        for c in self.buffer[start..].chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            text.push(c);
        }
        let cursor = self.buffer[start..self.pos].width() as u16;
        FieldView {
            text,
            cursor: Some(cursor),
            is_placeholder: false,
        }
    }

}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_handle_input() {
        let mut field = TextField::new("");
        assert!(field.handle_event(&TuiEvent::InputChar('a')));
        assert!(field.handle_event(&TuiEvent::InputChar('b')));
        assert_eq!(field.value(), "ab");
        assert!(field.handle_event(&TuiEvent::Backspace));
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn test_new_puts_cursor_at_end() {
        let mut field = TextField::new("North");
        type_str(&mut field, "ern");
        assert_eq!(field.value(), "Northern");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::new("360°");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(field.value(), "360!°");
        field.handle_event(&TuiEvent::Delete);
        assert_eq!(field.value(), "360!");
        field.handle_event(&TuiEvent::CursorHome);
        field.handle_event(&TuiEvent::Delete);
        assert_eq!(field.value(), "60!");
    }

    #[test]
    fn test_backspace_at_start_is_ignored() {
        let mut field = TextField::new("x");
        field.handle_event(&TuiEvent::CursorHome);
        assert!(!field.handle_event(&TuiEvent::Backspace));
        assert_eq!(field.value(), "x");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut field = TextField::new("");
        field.handle_event(&TuiEvent::Paste("a\nb\r\nc".to_string()));
        assert_eq!(field.value(), "a b  c");
    }

    #[test]
    fn test_view_placeholder_when_empty() {
        let field = TextField::new("").placeholder("e.g., 1-30 MHz");
        let view = field.view(20);
        assert!(view.is_placeholder);
        assert_eq!(view.text, "e.g., 1-30 MHz");
        assert_eq!(view.cursor, Some(0));
    }

    #[test]
    fn test_view_scrolls_to_keep_cursor_visible() {
        let field = TextField::new("abcdefghij");
        let view = field.view(5);
        assert_eq!(view.text, "ghij");
        assert_eq!(view.cursor, Some(4));
    }

    #[test]
    fn test_view_fits_without_scrolling() {
        let mut field = TextField::new("abc");
        field.handle_event(&TuiEvent::CursorHome);
        let view = field.view(10);
        assert_eq!(view.text, "abc");
        assert_eq!(view.cursor, Some(0));
    }
}
