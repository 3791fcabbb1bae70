//! # Actions
//!
//! Everything that can happen to the booking data becomes an `Action`.
//! Admin saves an antenna form? That's `Action::CreateAntenna(draft)`.
//! Admin presses approve? That's `Action::ApproveBooking(id)`.
//!
//! The `update()` function takes the current state and an action, applies it
//! through the repositories, and records a notification either way.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The returned `Effect` tells the adapter what to do next: close the form
//! that produced the action, quit, or nothing (the form stays open so the
//! draft is not lost).

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::core::error::{Entity, StoreError};
use crate::core::model::{AntennaDraft, BookingDraft};
use crate::core::request::BookingRequest;
use crate::core::state::{App, Level};

#[derive(Debug, Clone)]
pub enum Action {
    CreateAntenna(AntennaDraft),
    UpdateAntenna { id: u32, draft: AntennaDraft },
    DeleteAntenna(u32),
    CreateBooking(BookingDraft),
    UpdateBooking { id: u32, draft: BookingDraft },
    ApproveBooking(u32),
    RejectBooking(u32),
    /// Public request from the catalog. Acknowledged, never stored.
    SubmitRequest {
        antenna_id: u32,
        request: BookingRequest,
        today: NaiveDate,
    },
    /// A message raised by the adapter itself (e.g. a form field it could not parse).
    Notify { level: Level, title: String, message: String },
    DismissNotification,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The write succeeded; the form that raised it can be dismissed.
    CloseForm,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::CreateAntenna(draft) => {
            let result = app.antennas.create(draft).map(|a| format!("{} (id {})", a.name, a.id));
            finish(app, result, "Antenna created successfully.")
        }
        Action::UpdateAntenna { id, draft } => {
            let result = app.antennas.update(id, draft).map(|a| format!("{} (id {})", a.name, a.id));
            finish(app, result, "Antenna updated successfully.")
        }
        Action::DeleteAntenna(id) => {
            let result = app.antennas.remove(id).map(|a| format!("{} (id {})", a.name, a.id));
            finish(app, result, "Antenna deleted successfully.")
        }
        Action::CreateBooking(draft) => {
            let result = app.bookings.create(draft).map(|b| format!("booking {}", b.id));
            finish(app, result, "Booking created successfully.")
        }
        Action::UpdateBooking { id, draft } => {
            let result = app.bookings.update(id, draft).map(|b| format!("booking {}", b.id));
            finish(app, result, "Booking updated successfully.")
        }
        Action::ApproveBooking(id) => {
            let result = app.bookings.approve(id).map(|b| format!("booking {}", b.id));
            finish(app, result, "Booking approved successfully.")
        }
        Action::RejectBooking(id) => {
            let result = app.bookings.reject(id).map(|b| format!("booking {}", b.id));
            finish(app, result, "Booking rejected.")
        }
        Action::SubmitRequest { antenna_id, request, today } => {
            submit_request(app, antenna_id, &request, today)
        }
        Action::Notify { level, title, message } => {
            app.notify(level, title, message);
            Effect::None
        }
        Action::DismissNotification => {
            app.notification = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn finish(app: &mut App, result: Result<String, StoreError>, success: &str) -> Effect {
    match result {
        Ok(subject) => {
            info!("{success} [{subject}]");
            app.notify(Level::Success, "Success", success);
            Effect::CloseForm
        }
        Err(err) => {
            warn!("Write rejected: {err}");
            app.notify(Level::Error, "Error", describe(&err));
            Effect::None
        }
    }
}

fn describe(err: &StoreError) -> String {
    match err {
        StoreError::Validation(errors) => {
            let fields: Vec<String> = errors.iter().map(ToString::to_string).collect();
            format!("Please check the form: {}.", fields.join(", "))
        }
        other => format!("{}.", capitalize(&other.to_string())),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn submit_request(
    app: &mut App,
    antenna_id: u32,
    request: &BookingRequest,
    today: NaiveDate,
) -> Effect {
    let Some(antenna) = app.antennas.get(antenna_id) else {
        let err = StoreError::NotFound { entity: Entity::Antenna, id: antenna_id };
        warn!("Request rejected: {err}");
        app.notify(Level::Error, "Error", describe(&err));
        return Effect::None;
    };
    if !antenna.is_bookable() {
        let message = antenna.unavailable_message();
        warn!("Request rejected: {message}");
        app.notify(Level::Error, "Unavailable", message);
        return Effect::None;
    }
    let name = antenna.name.clone();
    match request.validate(today) {
        Ok(()) => {
            info!("Booking request for {name} acknowledged (not stored)");
            app.notify(
                Level::Success,
                "Booking Confirmed!",
                format!("Your reservation for {name} has been submitted successfully."),
            );
            Effect::CloseForm
        }
        Err(err) => {
            warn!("Request rejected: {err}");
            app.notify(Level::Error, "Error", describe(&err));
            Effect::None
        }
    }
}
