//! Trip association model.
//!
//! # Responsibility
//! - Link exactly one visitor and one national park with a date range.
//! - Validate date text at construction and on every setter.
//!
//! # Invariants
//! - `visitor` and `national_park` are fixed after construction.
//! - `start_date` and `end_date` each have at least 7 characters.
//! - Dates are free text and are not parsed or ordered.

use crate::model::national_park::ParkId;
use crate::model::validation::{validate_trip_date, DateField, ValidationError};
use crate::model::visitor::VisitorId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(Uuid);

impl TripId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, e.g. one carried by imported trip data.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for TripId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A visit by one visitor to one park.
///
/// Building a `Trip` does not register it anywhere; registration happens
/// when it is handed to a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TripRecord")]
pub struct Trip {
    id: TripId,
    visitor: VisitorId,
    national_park: ParkId,
    start_date: String,
    end_date: String,
}

#[derive(Deserialize)]
struct TripRecord {
    id: TripId,
    visitor: VisitorId,
    national_park: ParkId,
    start_date: String,
    end_date: String,
}

impl TryFrom<TripRecord> for Trip {
    type Error = ValidationError;

    fn try_from(value: TripRecord) -> Result<Self, Self::Error> {
        Self::with_id(
            value.id,
            value.visitor,
            value.national_park,
            value.start_date,
            value.end_date,
        )
    }
}

impl Trip {
    /// Creates a trip with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::DateTooShort` when either date has fewer than 7
    ///   characters. `start_date` is checked first.
    pub fn new(
        visitor: VisitorId,
        national_park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(
            TripId::generate(),
            visitor,
            national_park,
            start_date,
            end_date,
        )
    }

    /// Creates a trip with a caller-provided stable ID.
    pub fn with_id(
        id: TripId,
        visitor: VisitorId,
        national_park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let start_date = start_date.into();
        let end_date = end_date.into();
        validate_trip_date(DateField::Start, &start_date)?;
        validate_trip_date(DateField::End, &end_date)?;
        Ok(Self {
            id,
            visitor,
            national_park,
            start_date,
            end_date,
        })
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn visitor(&self) -> VisitorId {
        self.visitor
    }

    pub fn national_park(&self) -> ParkId {
        self.national_park
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Replaces the start date; the old value survives a rejected update.
    pub fn set_start_date(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_trip_date(DateField::Start, &value)?;
        self.start_date = value;
        Ok(())
    }

    /// Replaces the end date; the old value survives a rejected update.
    pub fn set_end_date(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_trip_date(DateField::End, &value)?;
        self.end_date = value;
        Ok(())
    }
}
