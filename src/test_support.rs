//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveDate;

use crate::core::antennas::AntennaRepository;
use crate::core::bookings::BookingRepository;
use crate::core::model::{AntennaDraft, AntennaStatus, AntennaType, BookingDraft, Location};
use crate::core::request::{BookingRequest, Purpose};
use crate::core::seed;
use crate::core::state::App;

/// Creates a test App with the mock antennas and bookings.
pub fn test_app() -> App {
    App::seeded()
}

pub fn seeded_antennas() -> AntennaRepository {
    seed::antennas()
}

pub fn seeded_bookings() -> BookingRepository {
    seed::bookings()
}

/// A complete, valid antenna draft with the given name.
pub fn antenna_draft(name: &str) -> AntennaDraft {
    AntennaDraft {
        name: name.to_string(),
        antenna_type: Some(AntennaType::HighFrequency),
        frequency: "1-30 MHz".to_string(),
        location: Some(Location::North),
        status: AntennaStatus::Available,
        description: String::new(),
        features: Vec::new(),
        last_maintenance: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    }
}

/// A complete, valid booking draft for the given antenna.
pub fn booking_draft(antenna_name: &str) -> BookingDraft {
    BookingDraft {
        antenna_name: antenna_name.to_string(),
        requester: "Dr. Ada Park".to_string(),
        date: "2024-07-10".to_string(),
        time: "10:00 - 11:00".to_string(),
        purpose: "Calibration".to_string(),
        ..BookingDraft::default()
    }
}

/// A complete, valid public request on `date`.
pub fn booking_request(date: &str) -> BookingRequest {
    BookingRequest {
        name: "Ada Park".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        date: date.to_string(),
        start_time: "09:00".to_string(),
        end_time: "11:30".to_string(),
        purpose: Some(Purpose::Calibration),
        notes: "Needs the turntable".to_string(),
    }
}
