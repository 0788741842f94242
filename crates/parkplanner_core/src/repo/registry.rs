//! Registry contract and in-memory arena implementation.
//!
//! # Responsibility
//! - Own every visitor, park and trip known to one planning context.
//! - Register trips into both endpoints' back-reference lists.
//!
//! # Invariants
//! - A trip is accepted only when its visitor and park both resolve.
//! - Visitors and parks are accepted only with empty trip lists.
//! - Stored entities change only through their validated setters; a trip's
//!   endpoints never change after registration.
//! - All checks run before any collection is mutated.
//! - Registries only grow; nothing is ever removed.
//! - Listings preserve insertion order.

use crate::model::national_park::{NationalPark, ParkId};
use crate::model::trip::{Trip, TripId};
use crate::model::validation::ValidationError;
use crate::model::visitor::{Visitor, VisitorId};
use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from registry and service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A name or date failed field validation.
    Validation(ValidationError),
    /// No visitor with this ID is registered.
    VisitorNotFound(VisitorId),
    /// No national park with this ID is registered.
    ParkNotFound(ParkId),
    /// No trip with this ID is registered.
    TripNotFound(TripId),
    /// A visitor with this ID is already registered.
    DuplicateVisitor(VisitorId),
    /// A national park with this ID is already registered.
    DuplicatePark(ParkId),
    /// A trip with this ID is already registered.
    DuplicateTrip(TripId),
    /// The visitor already carries trips from another registry.
    VisitorHasTrips(VisitorId),
    /// The national park already carries trips from another registry.
    ParkHasTrips(ParkId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::VisitorNotFound(id) => write!(f, "visitor not found: {id}"),
            Self::ParkNotFound(id) => write!(f, "national park not found: {id}"),
            Self::TripNotFound(id) => write!(f, "trip not found: {id}"),
            Self::DuplicateVisitor(id) => write!(f, "visitor already registered: {id}"),
            Self::DuplicatePark(id) => write!(f, "national park already registered: {id}"),
            Self::DuplicateTrip(id) => write!(f, "trip already registered: {id}"),
            Self::VisitorHasTrips(id) => {
                write!(f, "visitor must be registered without trips: {id}")
            }
            Self::ParkHasTrips(id) => {
                write!(f, "national park must be registered without trips: {id}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Registry interface over the three entity collections.
pub trait PlannerRepository {
    fn add_visitor(&mut self, visitor: Visitor) -> RepoResult<VisitorId>;
    fn add_park(&mut self, park: NationalPark) -> RepoResult<ParkId>;
    /// Registers a trip into the global list and both endpoints.
    fn add_trip(&mut self, trip: Trip) -> RepoResult<TripId>;

    fn visitor(&self, id: VisitorId) -> RepoResult<&Visitor>;
    fn park(&self, id: ParkId) -> RepoResult<&NationalPark>;
    fn trip(&self, id: TripId) -> RepoResult<&Trip>;

    /// Renames a stored visitor; the old name survives a rejected value.
    fn rename_visitor(&mut self, id: VisitorId, name: String) -> RepoResult<()>;
    fn set_trip_start_date(&mut self, id: TripId, value: String) -> RepoResult<()>;
    fn set_trip_end_date(&mut self, id: TripId, value: String) -> RepoResult<()>;

    fn visitors(&self) -> &[Visitor];
    fn parks(&self) -> &[NationalPark];
    fn trips(&self) -> &[Trip];
}

/// Vec-backed registry with ID-to-slot indexes.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    visitors: Vec<Visitor>,
    visitor_slots: HashMap<VisitorId, usize>,
    parks: Vec<NationalPark>,
    park_slots: HashMap<ParkId, usize>,
    trips: Vec<Trip>,
    trip_slots: HashMap<TripId, usize>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn visitor_slot(&self, id: VisitorId) -> RepoResult<usize> {
        self.visitor_slots
            .get(&id)
            .copied()
            .ok_or(RepoError::VisitorNotFound(id))
    }

    fn park_slot(&self, id: ParkId) -> RepoResult<usize> {
        self.park_slots
            .get(&id)
            .copied()
            .ok_or(RepoError::ParkNotFound(id))
    }

    fn trip_slot(&self, id: TripId) -> RepoResult<usize> {
        self.trip_slots
            .get(&id)
            .copied()
            .ok_or(RepoError::TripNotFound(id))
    }
}

impl PlannerRepository for InMemoryRegistry {
    fn add_visitor(&mut self, visitor: Visitor) -> RepoResult<VisitorId> {
        let id = visitor.id();
        if self.visitor_slots.contains_key(&id) {
            return Err(RepoError::DuplicateVisitor(id));
        }
        if !visitor.trips().is_empty() {
            return Err(RepoError::VisitorHasTrips(id));
        }
        self.visitor_slots.insert(id, self.visitors.len());
        self.visitors.push(visitor);
        debug!("event=visitor_registered module=repo status=ok visitor_id={id}");
        Ok(id)
    }

    fn add_park(&mut self, park: NationalPark) -> RepoResult<ParkId> {
        let id = park.id();
        if self.park_slots.contains_key(&id) {
            return Err(RepoError::DuplicatePark(id));
        }
        if !park.trips().is_empty() {
            return Err(RepoError::ParkHasTrips(id));
        }
        self.park_slots.insert(id, self.parks.len());
        self.parks.push(park);
        debug!("event=park_registered module=repo status=ok park_id={id}");
        Ok(id)
    }

    fn add_trip(&mut self, trip: Trip) -> RepoResult<TripId> {
        let id = trip.id();
        if self.trip_slots.contains_key(&id) {
            return Err(RepoError::DuplicateTrip(id));
        }
        let visitor_slot = self.visitor_slot(trip.visitor())?;
        let park_slot = self.park_slot(trip.national_park())?;

        self.visitors[visitor_slot].record_trip(id);
        self.parks[park_slot].record_trip(id);
        self.trip_slots.insert(id, self.trips.len());
        debug!(
            "event=trip_registered module=repo status=ok trip_id={id} visitor_id={} park_id={}",
            trip.visitor(),
            trip.national_park()
        );
        self.trips.push(trip);
        Ok(id)
    }

    fn visitor(&self, id: VisitorId) -> RepoResult<&Visitor> {
        let slot = self.visitor_slot(id)?;
        Ok(&self.visitors[slot])
    }

    fn park(&self, id: ParkId) -> RepoResult<&NationalPark> {
        let slot = self.park_slot(id)?;
        Ok(&self.parks[slot])
    }

    fn trip(&self, id: TripId) -> RepoResult<&Trip> {
        let slot = self.trip_slot(id)?;
        Ok(&self.trips[slot])
    }

    fn rename_visitor(&mut self, id: VisitorId, name: String) -> RepoResult<()> {
        let slot = self.visitor_slot(id)?;
        self.visitors[slot].set_name(name)?;
        Ok(())
    }

    fn set_trip_start_date(&mut self, id: TripId, value: String) -> RepoResult<()> {
        let slot = self.trip_slot(id)?;
        self.trips[slot].set_start_date(value)?;
        Ok(())
    }

    fn set_trip_end_date(&mut self, id: TripId, value: String) -> RepoResult<()> {
        let slot = self.trip_slot(id)?;
        self.trips[slot].set_end_date(value)?;
        Ok(())
    }

    fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    fn parks(&self) -> &[NationalPark] {
        &self.parks
    }

    fn trips(&self) -> &[Trip] {
        &self.trips
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryRegistry, PlannerRepository, RepoError};
    use crate::model::national_park::NationalPark;
    use crate::model::trip::Trip;
    use crate::model::visitor::Visitor;

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut registry = InMemoryRegistry::new();
        let visitor = Visitor::new("Alex").unwrap();
        let park = NationalPark::new("Yosemite").unwrap();

        registry.add_visitor(visitor.clone()).unwrap();
        registry.add_park(park.clone()).unwrap();

        assert_eq!(
            registry.add_visitor(visitor.clone()).unwrap_err(),
            RepoError::DuplicateVisitor(visitor.id())
        );
        assert_eq!(
            registry.add_park(park.clone()).unwrap_err(),
            RepoError::DuplicatePark(park.id())
        );
        assert_eq!(registry.visitors().len(), 1);
        assert_eq!(registry.parks().len(), 1);
    }

    #[test]
    fn duplicate_trip_is_not_registered_twice() {
        let mut registry = InMemoryRegistry::new();
        let visitor_id = registry.add_visitor(Visitor::new("Alex").unwrap()).unwrap();
        let park_id = registry
            .add_park(NationalPark::new("Yosemite").unwrap())
            .unwrap();
        let trip = Trip::new(visitor_id, park_id, "October 1st", "October 5th").unwrap();

        registry.add_trip(trip.clone()).unwrap();
        let err = registry.add_trip(trip.clone()).unwrap_err();

        assert_eq!(err, RepoError::DuplicateTrip(trip.id()));
        assert_eq!(registry.trips().len(), 1);
        assert_eq!(registry.visitor(visitor_id).unwrap().trips(), &[trip.id()]);
        assert_eq!(registry.park(park_id).unwrap().trips(), &[trip.id()]);
    }

    #[test]
    fn visitor_carrying_trips_is_rejected_by_another_registry() {
        let mut first = InMemoryRegistry::new();
        let visitor_id = first.add_visitor(Visitor::new("Alex").unwrap()).unwrap();
        let park_id = first.add_park(NationalPark::new("Yosemite").unwrap()).unwrap();
        first
            .add_trip(Trip::new(visitor_id, park_id, "October 1st", "October 5th").unwrap())
            .unwrap();

        let mut second = InMemoryRegistry::new();
        let visitor = first.visitor(visitor_id).unwrap().clone();
        let park = first.park(park_id).unwrap().clone();

        assert_eq!(
            second.add_visitor(visitor).unwrap_err(),
            RepoError::VisitorHasTrips(visitor_id)
        );
        assert_eq!(
            second.add_park(park).unwrap_err(),
            RepoError::ParkHasTrips(park_id)
        );
        assert!(second.visitors().is_empty());
        assert!(second.parks().is_empty());
    }

    #[test]
    fn validation_error_is_exposed_as_source() {
        use std::error::Error;

        let validation = Visitor::new("").unwrap_err();
        let err = RepoError::from(validation.clone());
        assert_eq!(err.to_string(), validation.to_string());
        assert!(err.source().is_some());
    }
}
