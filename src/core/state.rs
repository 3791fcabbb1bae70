//! # Application State
//!
//! Core business state for chamberdesk. Domain data only - no TUI-specific
//! types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── antennas: AntennaRepository          // canonical antenna list
//! ├── bookings: BookingRepository          // canonical booking list
//! ├── notification: Option<Notification>   // latest toast
//! └── status_message: String               // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! There is no global instance: `main` builds one `App` and passes it by
//! reference, tests build as many as they like.

use crate::core::antennas::AntennaRepository;
use crate::core::bookings::BookingRepository;
use crate::core::model::{AntennaStatus, BookingStatus};
use crate::core::seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A toast shown after a write. `seq` grows with every notification so the
/// UI can tell a fresh one from the one it is already timing out.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
    pub seq: u64,
}

/// Numbers shown on the admin stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_antennas: usize,
    pub available_antennas: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
}

pub struct App {
    pub antennas: AntennaRepository,
    pub bookings: BookingRepository,
    pub notification: Option<Notification>,
    pub status_message: String,
    next_seq: u64,
}

impl App {
    pub fn new(antennas: AntennaRepository, bookings: BookingRepository) -> Self {
        Self {
            antennas,
            bookings,
            notification: None,
            status_message: String::from("NSI Chamber Booking"),
            next_seq: 0,
        }
    }

    /// Starts with the mock antennas and bookings.
    pub fn seeded() -> Self {
        Self::new(seed::antennas(), seed::bookings())
    }

    pub fn empty() -> Self {
        Self::new(AntennaRepository::new(), BookingRepository::new())
    }

    pub fn notify(&mut self, level: Level, title: impl Into<String>, message: impl Into<String>) {
        self.next_seq += 1;
        self.notification = Some(Notification {
            level,
            title: title.into(),
            message: message.into(),
            seq: self.next_seq,
        });
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_antennas: self.antennas.len(),
            available_antennas: self
                .antennas
                .list()
                .iter()
                .filter(|a| a.status == AntennaStatus::Available)
                .count(),
            total_bookings: self.bookings.len(),
            pending_bookings: self
                .bookings
                .list()
                .iter()
                .filter(|b| b.status == BookingStatus::Pending)
                .count(),
        }
    }
}
