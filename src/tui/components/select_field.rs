//! # SelectField Component
//!
//! A dropdown stand-in: Left/Right cycle through a fixed list of options.
//! Starts unselected when the caller passes `None`, which the forms use for
//! "Select type" / "Select location" until the admin picks one.

use std::fmt::Display;

use crate::tui::components::form::{FieldView, FormField};
use crate::tui::event::TuiEvent;

pub struct SelectField<T> {
    options: Vec<T>,
    selected: Option<usize>,
    placeholder: &'static str,
    read_only: bool,
}

impl<T: Clone + PartialEq + Display> SelectField<T> {
    pub fn new(options: impl Into<Vec<T>>, value: Option<&T>) -> Self {
        let options = options.into();
        let selected = value.and_then(|v| options.iter().position(|o| o == v));
        Self {
            options,
            selected,
            placeholder: "",
            read_only: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn value(&self) -> Option<&T> {
        self.selected.and_then(|i| self.options.get(i))
    }

    fn step(&mut self, forward: bool) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let last = self.options.len() - 1;
        self.selected = Some(match (self.selected, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => if i == last { 0 } else { i + 1 },
            (Some(i), false) => if i == 0 { last } else { i - 1 },
        });
        true
    }
}

impl<T: Clone + PartialEq + Display> FormField for SelectField<T> {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        if self.read_only {
            return false;
        }
        match event {
            TuiEvent::CursorRight | TuiEvent::InputChar(' ') => self.step(true),
            TuiEvent::CursorLeft => self.step(false),
            _ => false,
        }
    }

    fn view(&self, _width: u16) -> FieldView {
        match self.value() {
            Some(value) if self.read_only => FieldView {
                text: value.to_string(),
                cursor: None,
                is_placeholder: false,
            },
            Some(value) => FieldView {
                text: format!("◂ {value} ▸"),
                cursor: None,
                is_placeholder: false,
            },
            None => FieldView {
                text: format!("◂ {} ▸", self.placeholder),
                cursor: None,
                is_placeholder: true,
            },
        }
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Location, AntennaStatus};

    #[test]
    fn test_starts_unselected_and_cycles_forward() {
        let mut field = SelectField::new(Location::ALL, None).placeholder("Select location");
        assert_eq!(field.value(), None);
        assert!(field.view(30).is_placeholder);

        field.handle_event(&TuiEvent::CursorRight);
        assert_eq!(field.value(), Some(&Location::North));
        field.handle_event(&TuiEvent::CursorRight);
        assert_eq!(field.value(), Some(&Location::South));
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut field = SelectField::new(AntennaStatus::ALL, Some(&AntennaStatus::Available));
        field.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(field.value(), Some(&AntennaStatus::Offline));
        field.handle_event(&TuiEvent::CursorRight);
        assert_eq!(field.value(), Some(&AntennaStatus::Available));
    }

    #[test]
    fn test_view_shows_label() {
        let field = SelectField::new(Location::ALL, Some(&Location::West));
        assert_eq!(field.view(30).text, "◂ West Chamber ▸");
    }

    #[test]
    fn test_read_only_does_not_cycle() {
        let mut field = SelectField::new(Location::ALL, Some(&Location::East)).read_only();
        assert!(!field.handle_event(&TuiEvent::CursorRight));
        assert_eq!(field.value(), Some(&Location::East));
        assert_eq!(field.view(30).text, "East Chamber");
    }
}
