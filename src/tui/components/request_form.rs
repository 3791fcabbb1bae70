//! # Request Form
//!
//! "Book Chamber" dialog opened from a catalog card. Collects contact
//! details, a date and a time window for one antenna. The antenna itself is
//! shown in the header and cannot be changed here.

use chrono::NaiveDate;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::action::Action;
use crate::core::model::Antenna;
use crate::core::request::{BookingRequest, Purpose};
use crate::tui::component::EventHandler;
use crate::tui::components::form::{FormEvent, FormField, FormLayout, FormRow, handle_form_event};
use crate::tui::components::select_field::SelectField;
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

pub struct RequestForm {
    pub antenna_id: u32,
    antenna_name: String,
    summary: String,
    /// Earliest date the request may name.
    today: NaiveDate,
    name: TextField,
    email: TextField,
    phone: TextField,
    date: TextField,
    start_time: TextField,
    end_time: TextField,
    purpose: SelectField<Purpose>,
    notes: TextField,
    focus: usize,
}

impl RequestForm {
    pub fn new(antenna: &Antenna, today: NaiveDate) -> Self {
        Self {
            antenna_id: antenna.id,
            antenna_name: antenna.name.clone(),
            summary: format!(
                "{} · {} · {}",
                antenna.antenna_type, antenna.frequency, antenna.location
            ),
            today,
            name: TextField::new("").placeholder("Enter your full name"),
            email: TextField::new("").placeholder("your.email@example.com"),
            phone: TextField::new("").placeholder("+1 (555) 123-4567"),
            date: TextField::new("").placeholder("YYYY-MM-DD"),
            start_time: TextField::new("").placeholder("HH:MM"),
            end_time: TextField::new("").placeholder("HH:MM"),
            purpose: SelectField::new(Purpose::ALL, None).placeholder("Select purpose"),
            notes: TextField::new("").placeholder("Any special requirements"),
            focus: 0,
        }
    }

    pub fn request(&self) -> BookingRequest {
        BookingRequest {
            name: self.name.trimmed(),
            email: self.email.trimmed(),
            phone: self.phone.trimmed(),
            date: self.date.trimmed(),
            start_time: self.start_time.trimmed(),
            end_time: self.end_time.trimmed(),
            purpose: self.purpose.value().copied(),
            notes: self.notes.trimmed(),
        }
    }
}

impl FormLayout for RequestForm {
    fn title(&self) -> String {
        format!("Book {}", self.antenna_name)
    }

    fn header(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                self.antenna_name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.summary.clone(), Style::default().fg(Color::Gray))),
        ]
    }

    fn help(&self) -> &'static str {
        " Tab Next  ←/→ Choose  Enter Submit  Esc Cancel "
    }

    fn rows(&self) -> Vec<FormRow<'_>> {
        vec![
            FormRow { label: "Full name", required: true, field: &self.name },
            FormRow { label: "Email", required: true, field: &self.email },
            FormRow { label: "Phone", required: true, field: &self.phone },
            FormRow { label: "Date", required: true, field: &self.date },
            FormRow { label: "Start time", required: true, field: &self.start_time },
            FormRow { label: "End time", required: true, field: &self.end_time },
            FormRow { label: "Purpose", required: true, field: &self.purpose },
            FormRow { label: "Notes", required: false, field: &self.notes },
        ]
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.date),
            4 => Some(&mut self.start_time),
            5 => Some(&mut self.end_time),
            6 => Some(&mut self.purpose),
            7 => Some(&mut self.notes),
            _ => None,
        }
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
    }

    fn submit(&self) -> FormEvent {
        FormEvent::Dispatch(Action::SubmitRequest {
            antenna_id: self.antenna_id,
            request: self.request(),
            today: self.today,
        })
    }
}

impl EventHandler for RequestForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        handle_form_event(self, event)
    }
}
