//! # Public Booking Request
//!
//! What a visitor fills in from the catalog. A request is validated and
//! acknowledged, but never stored: the admin booking list does not change.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::core::error::{FieldError, Problem, StoreError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Research,
    Testing,
    Calibration,
    Communication,
    Education,
    Other,
}

impl Purpose {
    pub const ALL: [Purpose; 6] = [
        Purpose::Research,
        Purpose::Testing,
        Purpose::Calibration,
        Purpose::Communication,
        Purpose::Education,
        Purpose::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Purpose::Research => "Research & Development",
            Purpose::Testing => "Equipment Testing",
            Purpose::Calibration => "Antenna Calibration",
            Purpose::Communication => "Communication Testing",
            Purpose::Education => "Educational Purpose",
            Purpose::Other => "Other",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: Option<Purpose>,
    pub notes: String,
}

impl BookingRequest {
    /// Check every field against `today`, reporting all problems together.
    pub fn validate(&self, today: NaiveDate) -> Result<(), StoreError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::missing("name"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::missing("email"));
        } else if !looks_like_email(email) {
            errors.push(FieldError::malformed("email"));
        }

        if self.phone.trim().is_empty() {
            errors.push(FieldError::missing("phone"));
        }

        match parse_required(&self.date, |s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok()) {
            Ok(date) if date < today => errors.push(FieldError::in_past("date")),
            Ok(_) => {}
            Err(problem) => errors.push(FieldError { field: "date", problem }),
        }

        for (field, value) in [("start time", &self.start_time), ("end time", &self.end_time)] {
            if let Err(problem) =
                parse_required(value, |s| NaiveTime::parse_from_str(s, TIME_FORMAT).ok())
            {
                errors.push(FieldError { field, problem });
            }
        }

        if self.purpose.is_none() {
            errors.push(FieldError::missing("purpose"));
        }

        StoreError::check(errors)
    }
}

/// One `@` with text on both sides and no whitespace.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn parse_required<T>(value: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, Problem> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Problem::Missing);
    }
    parse(value).ok_or(Problem::Malformed)
}
