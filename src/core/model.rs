//! # Domain Model
//!
//! Antennas, bookings, and the drafts forms build before saving.
//!
//! ```text
//! Antenna                         Booking
//! ├── id: u32                     ├── id: u32
//! ├── name                        ├── antenna_name   (denormalized, not an id)
//! ├── antenna_type                ├── requester
//! ├── frequency                   ├── date
//! ├── location                    ├── time
//! ├── status                      ├── purpose
//! ├── description                 ├── status
//! ├── features: Vec<String>       └── notes: Option<String>
//! └── last_maintenance
//! ```
//!
//! Drafts carry every field except `id`. The repositories assign ids.

use std::fmt;

use chrono::NaiveDate;

/// Band an antenna operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntennaType {
    HighFrequency,
    VeryHighFrequency,
    UltraHighFrequency,
    Microwave,
}

impl AntennaType {
    pub const ALL: [AntennaType; 4] = [
        AntennaType::HighFrequency,
        AntennaType::VeryHighFrequency,
        AntennaType::UltraHighFrequency,
        AntennaType::Microwave,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AntennaType::HighFrequency => "High-Frequency",
            AntennaType::VeryHighFrequency => "Very High Frequency",
            AntennaType::UltraHighFrequency => "Ultra-High Frequency",
            AntennaType::Microwave => "Microwave",
        }
    }
}

/// The test chamber an antenna is installed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    North,
    South,
    East,
    West,
    Central,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::North,
        Location::South,
        Location::East,
        Location::West,
        Location::Central,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Location::North => "North Chamber",
            Location::South => "South Chamber",
            Location::East => "East Chamber",
            Location::West => "West Chamber",
            Location::Central => "Central Chamber",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AntennaStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    Offline,
}

impl AntennaStatus {
    pub const ALL: [AntennaStatus; 4] = [
        AntennaStatus::Available,
        AntennaStatus::Occupied,
        AntennaStatus::Maintenance,
        AntennaStatus::Offline,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AntennaStatus::Available => "available",
            AntennaStatus::Occupied => "occupied",
            AntennaStatus::Maintenance => "maintenance",
            AntennaStatus::Offline => "offline",
        }
    }
}

/// Booking lifecycle.
///
/// ```text
///            approve
///   pending ─────────► confirmed
///      │
///      └─────────────► rejected
///            reject
/// ```
///
/// `completed` is reachable only through a direct edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Rejected,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Rejected,
        BookingStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Completed => "completed",
        }
    }

    /// Whether the guarded path (approve/reject) may move a booking from `self` to `to`.
    pub fn can_transition_to(&self, to: BookingStatus) -> bool {
        matches!(
            (self, to),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Rejected)
        )
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(AntennaType, Location, AntennaStatus, BookingStatus);

#[derive(Debug, Clone, PartialEq)]
pub struct Antenna {
    pub id: u32,
    pub name: String,
    pub antenna_type: AntennaType,
    pub frequency: String,
    pub location: Location,
    pub status: AntennaStatus,
    pub description: String,
    pub features: Vec<String>,
    pub last_maintenance: NaiveDate,
}

impl Antenna {
    /// Only available antennas can be requested from the catalog.
    pub fn is_bookable(&self) -> bool {
        self.status == AntennaStatus::Available
    }

    /// Shown when someone tries to book an antenna that is not available.
    pub fn unavailable_message(&self) -> String {
        format!("{} is currently unavailable ({}).", self.name, self.status)
    }

    /// Editable copy of everything except the id.
    pub fn to_draft(&self) -> AntennaDraft {
        AntennaDraft {
            name: self.name.clone(),
            antenna_type: Some(self.antenna_type),
            frequency: self.frequency.clone(),
            location: Some(self.location),
            status: self.status,
            description: self.description.clone(),
            features: self.features.clone(),
            last_maintenance: self.last_maintenance,
        }
    }
}

/// Unsaved antenna fields. `None` type or location means "not selected yet".
#[derive(Debug, Clone, PartialEq)]
pub struct AntennaDraft {
    pub name: String,
    pub antenna_type: Option<AntennaType>,
    pub frequency: String,
    pub location: Option<Location>,
    pub status: AntennaStatus,
    pub description: String,
    pub features: Vec<String>,
    pub last_maintenance: NaiveDate,
}

impl AntennaDraft {
    /// Blank draft as the "Add New Antenna" form starts out.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            antenna_type: None,
            frequency: String::new(),
            location: None,
            status: AntennaStatus::Available,
            description: String::new(),
            features: Vec::new(),
            last_maintenance: today,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: u32,
    pub antenna_name: String,
    pub requester: String,
    pub date: String,
    pub time: String,
    pub purpose: String,
    pub status: BookingStatus,
    pub notes: Option<String>,
}

impl Booking {
    pub fn to_draft(&self) -> BookingDraft {
        BookingDraft {
            antenna_name: self.antenna_name.clone(),
            requester: self.requester.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            purpose: self.purpose.clone(),
            status: self.status,
            notes: self.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub antenna_name: String,
    pub requester: String,
    pub date: String,
    pub time: String,
    pub purpose: String,
    pub status: BookingStatus,
    pub notes: Option<String>,
}

/// Anything stored under a numeric id.
pub trait Identified {
    fn id(&self) -> u32;
}

impl Identified for Antenna {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Identified for Booking {
    fn id(&self) -> u32 {
        self.id
    }
}

/// `max(existing) + 1`, or 1 for an empty collection. `None` once the
/// highest id is `u32::MAX`.
pub fn next_id<T: Identified>(items: &[T]) -> Option<u32> {
    match items.iter().map(Identified::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
