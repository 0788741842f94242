//! National park domain model.
//!
//! # Responsibility
//! - Hold a park's stable identity and immutable name.
//! - Keep the back-reference list of trips received, in creation order.
//!
//! # Invariants
//! - `name` has at least 3 characters and never changes.
//! - `trips` is appended only by registry trip registration.

use crate::model::trip::TripId;
use crate::model::validation::{validate_park_name, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a national park.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParkId(Uuid);

impl ParkId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, e.g. one carried by imported park data.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for ParkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named destination that receives trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NationalParkRecord")]
pub struct NationalPark {
    id: ParkId,
    name: String,
    trips: Vec<TripId>,
}

#[derive(Deserialize)]
struct NationalParkRecord {
    id: ParkId,
    name: String,
}

impl TryFrom<NationalParkRecord> for NationalPark {
    type Error = ValidationError;

    fn try_from(value: NationalParkRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.name)
    }
}

impl NationalPark {
    /// Creates a park with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::ParkNameTooShort` when `name` has fewer than 3 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(ParkId::generate(), name)
    }

    /// Creates a park with a caller-provided stable ID.
    pub fn with_id(id: ParkId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_park_name(&name)?;
        Ok(Self {
            id,
            name,
            trips: Vec::new(),
        })
    }

    pub fn id(&self) -> ParkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trips received by this park, oldest first.
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    /// Number of trips received; repeat visitors count every time.
    pub fn total_visits(&self) -> usize {
        self.trips.len()
    }

    pub(crate) fn record_trip(&mut self, trip_id: TripId) {
        self.trips.push(trip_id);
    }
}

#[cfg(test)]
mod tests {
    use super::NationalPark;
    use crate::model::trip::TripId;
    use crate::model::validation::ValidationError;

    #[test]
    fn two_character_name_is_rejected() {
        let err = NationalPark::new("Oz").unwrap_err();
        assert_eq!(err, ValidationError::ParkNameTooShort { len: 2 });
    }

    #[test]
    fn total_visits_tracks_recorded_trips() {
        let mut park = NationalPark::new("Zion").unwrap();
        assert_eq!(park.total_visits(), 0);

        park.record_trip(TripId::generate());
        park.record_trip(TripId::generate());
        assert_eq!(park.total_visits(), 2);
        assert_eq!(park.total_visits(), park.trips().len());
    }
}
