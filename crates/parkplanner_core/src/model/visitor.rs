//! Visitor domain model.
//!
//! # Responsibility
//! - Hold a visitor's stable identity and validated display name.
//! - Keep the back-reference list of trips taken, in creation order.
//!
//! # Invariants
//! - `name` length is always within `[1, 15]` characters.
//! - `trips` is appended only by registry trip registration.

use crate::model::trip::TripId;
use crate::model::validation::{validate_visitor_name, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorId(Uuid);

impl VisitorId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, e.g. one carried by imported visitor data.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for VisitorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named person who takes trips to national parks.
///
/// Identity is the `id`; two visitors sharing a name are still distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VisitorRecord")]
pub struct Visitor {
    id: VisitorId,
    name: String,
    trips: Vec<TripId>,
}

/// Deserialization shape; trips are never read back so a decoded visitor
/// starts detached from any registry.
#[derive(Deserialize)]
struct VisitorRecord {
    id: VisitorId,
    name: String,
}

impl TryFrom<VisitorRecord> for Visitor {
    type Error = ValidationError;

    fn try_from(value: VisitorRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.name)
    }
}

impl Visitor {
    /// Creates a visitor with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::VisitorNameLength` when `name` is not 1..=15 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(VisitorId::generate(), name)
    }

    /// Creates a visitor with a caller-provided stable ID.
    pub fn with_id(id: VisitorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_visitor_name(&name)?;
        Ok(Self {
            id,
            name,
            trips: Vec::new(),
        })
    }

    pub fn id(&self) -> VisitorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name after validating it.
    ///
    /// On error the previous name is kept. Existing trips are not touched.
    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        validate_visitor_name(&value)?;
        self.name = value;
        Ok(())
    }

    /// Trips taken by this visitor, oldest first.
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    pub(crate) fn record_trip(&mut self, trip_id: TripId) {
        self.trips.push(trip_id);
    }
}
