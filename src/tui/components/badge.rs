//! Status colors shared by the catalog cards and the admin tables.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::model::{AntennaStatus, BookingStatus};

pub fn antenna_status_color(status: AntennaStatus) -> Color {
    match status {
        AntennaStatus::Available => Color::Green,
        AntennaStatus::Occupied => Color::Yellow,
        AntennaStatus::Maintenance => Color::Blue,
        AntennaStatus::Offline => Color::Red,
    }
}

pub fn booking_status_color(status: BookingStatus) -> Color {
    match status {
        BookingStatus::Pending => Color::Yellow,
        BookingStatus::Confirmed => Color::Green,
        BookingStatus::Rejected => Color::Red,
        BookingStatus::Completed => Color::Gray,
    }
}

/// `[label]` in the given color, bold.
pub fn badge(label: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{label}]"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
