//! # Booking Repository
//!
//! Owns the ordered booking collection and the two status paths:
//!
//! - `approve` / `reject`: guarded by [`BookingStatus::can_transition_to`]
//! - `update`: replaces the whole record, status included, with no transition check
//!
//! Both paths are kept. The admin edit form is allowed to set any status.

use log::debug;

use crate::core::error::{Entity, FieldError, StoreError};
use crate::core::model::{Booking, BookingDraft, BookingStatus, next_id};

#[derive(Debug, Clone, Default)]
pub struct BookingRepository {
    bookings: Vec<Booking>,
}

impl BookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bookings(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: u32) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// New bookings always start out `pending`, whatever the draft says.
    pub fn create(&mut self, draft: BookingDraft) -> Result<&Booking, StoreError> {
        validate(&draft)?;
        let id = next_id(&self.bookings)
            .ok_or(StoreError::IdsExhausted { entity: Entity::Booking })?;
        debug!("Assigning booking id {id} for {:?}", draft.antenna_name);
        self.bookings.push(from_draft(id, BookingDraft { status: BookingStatus::Pending, ..draft }));
        Ok(&self.bookings[self.bookings.len() - 1])
    }

    pub fn update(&mut self, id: u32, draft: BookingDraft) -> Result<&Booking, StoreError> {
        validate(&draft)?;
        let booking = self.find_mut(id)?;
        *booking = from_draft(id, draft);
        Ok(&*booking)
    }

    pub fn approve(&mut self, id: u32) -> Result<&Booking, StoreError> {
        self.transition(id, BookingStatus::Confirmed)
    }

    pub fn reject(&mut self, id: u32) -> Result<&Booking, StoreError> {
        self.transition(id, BookingStatus::Rejected)
    }

    fn transition(&mut self, id: u32, to: BookingStatus) -> Result<&Booking, StoreError> {
        let booking = self.find_mut(id)?;
        if !booking.status.can_transition_to(to) {
            return Err(StoreError::InvalidTransition { id, from: booking.status, to });
        }
        booking.status = to;
        Ok(&*booking)
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Booking, StoreError> {
        self.bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound { entity: Entity::Booking, id })
    }
}

fn from_draft(id: u32, draft: BookingDraft) -> Booking {
    Booking {
        id,
        antenna_name: draft.antenna_name,
        requester: draft.requester,
        date: draft.date,
        time: draft.time,
        purpose: draft.purpose,
        status: draft.status,
        // An emptied notes field is stored as no notes.
        notes: draft.notes.filter(|n| !n.trim().is_empty()),
    }
}

/// Requester, antenna reference, date and time are mandatory.
fn validate(draft: &BookingDraft) -> Result<(), StoreError> {
    let required = [
        ("requester", &draft.requester),
        ("antenna", &draft.antenna_name),
        ("date", &draft.date),
        ("time", &draft.time),
    ];
    StoreError::check(
        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| FieldError::missing(field))
            .collect(),
    )
}
