//! # Booking Form
//!
//! Admin dialog for creating or editing a booking. The antenna is chosen
//! from the current antenna names and is fixed once the booking exists.
//!
//! Editing a pending booking also offers the guarded shortcuts: Ctrl+A
//! approves and Ctrl+R rejects, both through the transition check rather
//! than the free-form status field.

use crate::core::action::Action;
use crate::core::model::{Booking, BookingDraft, BookingStatus};
use crate::tui::component::EventHandler;
use crate::tui::components::form::{
    FormEvent, FormField, FormLayout, FormRow, first_editable, handle_form_event,
};
use crate::tui::components::select_field::SelectField;
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

pub struct BookingForm {
    pub editing: Option<u32>,
    /// Status as stored, which decides whether approve/reject are offered.
    stored_status: BookingStatus,
    antenna: SelectField<String>,
    requester: TextField,
    date: TextField,
    time: TextField,
    purpose: TextField,
    status: SelectField<BookingStatus>,
    notes: TextField,
    focus: usize,
}

impl BookingForm {
    pub fn create(antenna_names: Vec<String>) -> Self {
        let mut form = Self::from_draft(None, &BookingDraft::default(), antenna_names, false);
        let focus = first_editable(&form.rows());
        form.focus = focus;
        form
    }

    pub fn edit(booking: &Booking) -> Self {
        let names = vec![booking.antenna_name.clone()];
        let mut form = Self::from_draft(Some(booking.id), &booking.to_draft(), names, true);
        let focus = first_editable(&form.rows());
        form.focus = focus;
        form
    }

    fn from_draft(
        editing: Option<u32>,
        draft: &BookingDraft,
        antenna_names: Vec<String>,
        lock_antenna: bool,
    ) -> Self {
        let antenna = SelectField::new(antenna_names, Some(&draft.antenna_name))
            .placeholder("Select antenna");
        Self {
            editing,
            stored_status: draft.status,
            antenna: if lock_antenna { antenna.read_only() } else { antenna },
            requester: TextField::new(draft.requester.as_str()),
            date: TextField::new(draft.date.as_str()).placeholder("YYYY-MM-DD"),
            time: TextField::new(draft.time.as_str()).placeholder("10:00 - 12:00"),
            purpose: TextField::new(draft.purpose.as_str()),
            status: SelectField::new(BookingStatus::ALL, Some(&draft.status)),
            notes: TextField::new(draft.notes.as_deref().unwrap_or_default()),
            focus: 0,
        }
    }

    pub fn draft(&self) -> BookingDraft {
        BookingDraft {
            antenna_name: self.antenna.value().cloned().unwrap_or_default(),
            requester: self.requester.trimmed(),
            date: self.date.trimmed(),
            time: self.time.trimmed(),
            purpose: self.purpose.trimmed(),
            status: self.status.value().copied().unwrap_or_default(),
            notes: Some(self.notes.trimmed()).filter(|n| !n.is_empty()),
        }
    }

    fn can_decide(&self) -> bool {
        self.editing.is_some() && self.stored_status == BookingStatus::Pending
    }
}

impl FormLayout for BookingForm {
    fn title(&self) -> String {
        match self.editing {
            Some(id) => format!("Edit Booking #{id}"),
            None => "New Booking".to_string(),
        }
    }

    fn help(&self) -> &'static str {
        if self.can_decide() {
            " Tab Next  Enter Save  Ctrl+A Approve  Ctrl+R Reject  Esc Cancel "
        } else {
            " Tab Next  ←/→ Choose  Enter Save  Esc Cancel "
        }
    }

    fn rows(&self) -> Vec<FormRow<'_>> {
        vec![
            FormRow { label: "Antenna", required: true, field: &self.antenna },
            FormRow { label: "Requester", required: true, field: &self.requester },
            FormRow { label: "Date", required: true, field: &self.date },
            FormRow { label: "Time", required: true, field: &self.time },
            FormRow { label: "Purpose", required: false, field: &self.purpose },
            FormRow { label: "Status", required: false, field: &self.status },
            FormRow { label: "Notes", required: false, field: &self.notes },
        ]
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn FormField> {
        match index {
            0 => Some(&mut self.antenna),
            1 => Some(&mut self.requester),
            2 => Some(&mut self.date),
            3 => Some(&mut self.time),
            4 => Some(&mut self.purpose),
            5 => Some(&mut self.status),
            6 => Some(&mut self.notes),
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
        let draft = self.draft();
        FormEvent::Dispatch(match self.editing {
            Some(id) => Action::UpdateBooking { id, draft },
            None => Action::CreateBooking(draft),
        })
    }

    fn handle_shortcut(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        let id = self.editing.filter(|_| self.can_decide())?;
        match event {
            TuiEvent::Approve => Some(FormEvent::Dispatch(Action::ApproveBooking(id))),
            TuiEvent::Reject => Some(FormEvent::Dispatch(Action::RejectBooking(id))),
            _ => None,
        }
    }
}

impl EventHandler for BookingForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        handle_form_event(self, event)
    }
}
