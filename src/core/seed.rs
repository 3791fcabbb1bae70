//! Mock data the application starts with.

use chrono::NaiveDate;

use crate::core::antennas::AntennaRepository;
use crate::core::bookings::BookingRepository;
use crate::core::model::{
    Antenna, AntennaStatus, AntennaType, Booking, BookingStatus, Location,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn antennas() -> AntennaRepository {
    AntennaRepository::from_antennas(vec![
        Antenna {
            id: 1,
            name: "Aurora Array Alpha".into(),
            antenna_type: AntennaType::HighFrequency,
            frequency: "1-30 MHz".into(),
            location: Location::North,
            status: AntennaStatus::Available,
            description: "Primary HF antenna system for long-range communications".into(),
            features: labels(&["360° Rotation", "Auto-tracking", "Weather Resistant"]),
            last_maintenance: date(2024, 6, 15),
        },
        Antenna {
            id: 2,
            name: "Borealis Beta".into(),
            antenna_type: AntennaType::UltraHighFrequency,
            frequency: "300-3000 MHz".into(),
            location: Location::East,
            status: AntennaStatus::Occupied,
            description: "Advanced UHF system for satellite communications".into(),
            features: labels(&["Dual Polarization", "Low Noise", "High Gain"]),
            last_maintenance: date(2024, 6, 10),
        },
        Antenna {
            id: 3,
            name: "Polaris Prime".into(),
            antenna_type: AntennaType::VeryHighFrequency,
            frequency: "30-300 MHz".into(),
            location: Location::West,
            status: AntennaStatus::Available,
            description: "Versatile VHF antenna for research and testing".into(),
            features: labels(&["Multi-band", "Remote Control", "Data Logging"]),
            last_maintenance: date(2024, 6, 20),
        },
    ])
}

pub fn bookings() -> BookingRepository {
    BookingRepository::from_bookings(vec![
        Booking {
            id: 1,
            antenna_name: "Aurora Array Alpha".into(),
            requester: "Dr. Sarah Chen".into(),
            date: "2024-07-02".into(),
            time: "14:00 - 16:00".into(),
            purpose: "Research Testing".into(),
            status: BookingStatus::Confirmed,
            notes: None,
        },
        Booking {
            id: 2,
            antenna_name: "Polaris Prime".into(),
            requester: "Prof. Mark Wilson".into(),
            date: "2024-07-03".into(),
            time: "09:00 - 12:00".into(),
            purpose: "Signal Analysis".into(),
            status: BookingStatus::Pending,
            notes: None,
        },
    ])
}
