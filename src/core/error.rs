//! Errors raised by the repositories and request validation.

use std::fmt;

use crate::core::model::BookingStatus;

/// Which collection an id-targeted operation looked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Antenna,
    Booking,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Antenna => f.write_str("antenna"),
            Entity::Booking => f.write_str("booking"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// Required and empty (or whitespace only).
    Missing,
    /// Present but not in the expected shape (e.g. not `YYYY-MM-DD`).
    Malformed,
    /// A date earlier than today.
    InPast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: Problem,
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        Self { field, problem: Problem::Missing }
    }

    pub fn malformed(field: &'static str) -> Self {
        Self { field, problem: Problem::Malformed }
    }

    pub fn in_past(field: &'static str) -> Self {
        Self { field, problem: Problem::InPast }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            Problem::Missing => write!(f, "{} is required", self.field),
            Problem::Malformed => write!(f, "{} is not valid", self.field),
            Problem::InPast => write!(f, "{} must not be in the past", self.field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// One or more fields failed validation. Never empty.
    Validation(Vec<FieldError>),
    /// No entity with this id.
    NotFound { entity: Entity, id: u32 },
    /// Guarded status change from a state that does not allow it.
    InvalidTransition {
        id: u32,
        from: BookingStatus,
        to: BookingStatus,
    },
    /// The collection already holds id `u32::MAX`.
    IdsExhausted { entity: Entity },
}

impl StoreError {
    /// Collects field errors; `Ok(())` when there are none.
    pub fn check(errors: Vec<FieldError>) -> Result<(), StoreError> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(errors))
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(errors) => {
                let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "validation failed: {}", joined.join(", "))
            }
            StoreError::NotFound { entity, id } => write!(f, "no {entity} with id {id}"),
            StoreError::InvalidTransition { id, from, to } => {
                write!(f, "booking {id} cannot move from {from} to {to}")
            }
            StoreError::IdsExhausted { entity } => write!(f, "no free {entity} id left"),
        }
    }
}

impl std::error::Error for StoreError {}
