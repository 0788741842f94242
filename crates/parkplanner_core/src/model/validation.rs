//! Field validation rules shared by all entities.
//!
//! # Responsibility
//! - Define the length constraints for names and trip dates.
//! - Report violations as one typed error consumed by model and repo layers.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - Validation never mutates; callers assign only after `Ok(())`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shortest accepted visitor name.
pub const VISITOR_NAME_MIN_CHARS: usize = 1;
/// Longest accepted visitor name.
pub const VISITOR_NAME_MAX_CHARS: usize = 15;
/// Shortest accepted national park name.
pub const PARK_NAME_MIN_CHARS: usize = 3;
/// Shortest accepted trip date text.
pub const TRIP_DATE_MIN_CHARS: usize = 7;

/// Which trip date a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    /// Returns the wire/field name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start_date",
            Self::End => "end_date",
        }
    }
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Visitor name length is outside `[1, 15]`.
    VisitorNameLength { len: usize },
    /// National park name is shorter than 3 characters.
    ParkNameTooShort { len: usize },
    /// Trip date is shorter than 7 characters.
    DateTooShort { field: DateField, len: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VisitorNameLength { len } => write!(
                f,
                "visitor name must be between {VISITOR_NAME_MIN_CHARS} and {VISITOR_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::ParkNameTooShort { len } => write!(
                f,
                "national park name must be at least {PARK_NAME_MIN_CHARS} characters, got {len}"
            ),
            Self::DateTooShort { field, len } => write!(
                f,
                "{} must be at least {TRIP_DATE_MIN_CHARS} characters, got {len}",
                field.as_str()
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_visitor_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if (VISITOR_NAME_MIN_CHARS..=VISITOR_NAME_MAX_CHARS).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::VisitorNameLength { len })
    }
}

pub(crate) fn validate_park_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len >= PARK_NAME_MIN_CHARS {
        Ok(())
    } else {
        Err(ValidationError::ParkNameTooShort { len })
    }
}

pub(crate) fn validate_trip_date(field: DateField, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len >= TRIP_DATE_MIN_CHARS {
        Ok(())
    } else {
        Err(ValidationError::DateTooShort { field, len })
    }
}
