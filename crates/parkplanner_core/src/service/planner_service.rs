//! Park planning use-case service.
//!
//! # Responsibility
//! - Provide creation, mutation and query entry points by identifier.
//! - Delegate storage and back-reference bookkeeping to the registry.
//!
//! # Invariants
//! - Trip endpoints are resolved before dates are validated, and both
//!   happen before anything is registered.
//! - De-duplicated listings keep first-seen order.
//! - Maximum queries break ties in favor of the earliest candidate.

use crate::model::national_park::{NationalPark, ParkId};
use crate::model::trip::{Trip, TripId};
use crate::model::visitor::{Visitor, VisitorId};
use crate::repo::registry::{PlannerRepository, RepoResult};
use log::{debug, warn};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Use-case facade over one registry.
pub struct PlannerService<R: PlannerRepository> {
    repo: R,
}

impl<R: PlannerRepository> PlannerService<R> {
    /// Creates a service using the provided registry.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and registers a visitor.
    pub fn create_visitor(&mut self, name: impl Into<String>) -> RepoResult<VisitorId> {
        let visitor = Visitor::new(name)?;
        self.repo.add_visitor(visitor)
    }

    /// Creates and registers a national park.
    pub fn create_park(&mut self, name: impl Into<String>) -> RepoResult<ParkId> {
        let park = NationalPark::new(name)?;
        self.repo.add_park(park)
    }

    /// Creates a trip and registers it with the visitor, the park and the
    /// global trip list.
    ///
    /// # Errors
    /// - `VisitorNotFound` / `ParkNotFound` when an endpoint is unknown.
    /// - `Validation` when either date is too short.
    ///
    /// No collection changes when an error is returned.
    pub fn create_trip(
        &mut self,
        visitor: VisitorId,
        national_park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> RepoResult<TripId> {
        self.repo.visitor(visitor)?;
        self.repo.park(national_park)?;
        let trip = Trip::new(visitor, national_park, start_date, end_date)?;
        self.repo.add_trip(trip)
    }

    /// Renames a visitor. Trips are not revisited.
    pub fn rename_visitor(&mut self, id: VisitorId, name: impl Into<String>) -> RepoResult<()> {
        match self.repo.rename_visitor(id, name.into()) {
            Ok(()) => {
                debug!("event=visitor_rename module=service status=ok visitor_id={id}");
                Ok(())
            }
            Err(err) => {
                warn!("event=visitor_rename module=service status=error visitor_id={id} error={err}");
                Err(err)
            }
        }
    }

    pub fn set_trip_start_date(&mut self, id: TripId, value: impl Into<String>) -> RepoResult<()> {
        let result = self.repo.set_trip_start_date(id, value.into());
        log_reschedule(id, "start_date", &result);
        result
    }

    pub fn set_trip_end_date(&mut self, id: TripId, value: impl Into<String>) -> RepoResult<()> {
        let result = self.repo.set_trip_end_date(id, value.into());
        log_reschedule(id, "end_date", &result);
        result
    }

    pub fn visitor(&self, id: VisitorId) -> RepoResult<&Visitor> {
        self.repo.visitor(id)
    }

    pub fn park(&self, id: ParkId) -> RepoResult<&NationalPark> {
        self.repo.park(id)
    }

    pub fn trip(&self, id: TripId) -> RepoResult<&Trip> {
        self.repo.trip(id)
    }

    /// Trips taken by a visitor, in creation order.
    pub fn visitor_trips(&self, id: VisitorId) -> RepoResult<Vec<&Trip>> {
        self.resolve_trips(self.repo.visitor(id)?.trips())
    }

    /// Distinct parks a visitor has been to, in first-visit order.
    pub fn visitor_national_parks(&self, id: VisitorId) -> RepoResult<Vec<&NationalPark>> {
        let trips = self.visitor_trips(id)?;
        first_seen(trips.iter().map(|trip| trip.national_park()))
            .into_iter()
            .map(|park_id| self.repo.park(park_id))
            .collect()
    }

    /// Number of the visitor's trips made to `park`.
    pub fn total_visits_at_park(&self, visitor: VisitorId, park: ParkId) -> RepoResult<usize> {
        self.repo.park(park)?;
        Ok(self
            .visitor_trips(visitor)?
            .iter()
            .filter(|trip| trip.national_park() == park)
            .count())
    }

    /// Trips received by a park, in creation order.
    pub fn park_trips(&self, id: ParkId) -> RepoResult<Vec<&Trip>> {
        self.resolve_trips(self.repo.park(id)?.trips())
    }

    /// Distinct visitors of a park, in first-visit order.
    pub fn park_visitors(&self, id: ParkId) -> RepoResult<Vec<&Visitor>> {
        let trips = self.park_trips(id)?;
        first_seen(trips.iter().map(|trip| trip.visitor()))
            .into_iter()
            .map(|visitor_id| self.repo.visitor(visitor_id))
            .collect()
    }

    pub fn park_total_visits(&self, id: ParkId) -> RepoResult<usize> {
        Ok(self.repo.park(id)?.total_visits())
    }

    /// The visitor with the most trips to this park.
    ///
    /// Returns `None` for a park without trips. On a tie the visitor whose
    /// first trip here came earliest wins.
    pub fn best_visitor(&self, id: ParkId) -> RepoResult<Option<&Visitor>> {
        let trips = self.park_trips(id)?;
        let counts = count_first_seen(trips.iter().map(|trip| trip.visitor()));
        match first_max(counts) {
            Some(visitor_id) => self.repo.visitor(visitor_id).map(Some),
            None => Ok(None),
        }
    }

    /// The registered park with the most trips.
    ///
    /// Returns `None` when no park exists. On a tie the earliest registered
    /// park wins.
    pub fn most_visited(&self) -> Option<&NationalPark> {
        let mut best: Option<&NationalPark> = None;
        for park in self.repo.parks() {
            if best.map_or(true, |current| park.total_visits() > current.total_visits()) {
                best = Some(park);
            }
        }
        best
    }

    pub fn all_visitors(&self) -> &[Visitor] {
        self.repo.visitors()
    }

    pub fn all_parks(&self) -> &[NationalPark] {
        self.repo.parks()
    }

    pub fn all_trips(&self) -> &[Trip] {
        self.repo.trips()
    }

    fn resolve_trips(&self, ids: &[TripId]) -> RepoResult<Vec<&Trip>> {
        ids.iter().map(|id| self.repo.trip(*id)).collect()
    }
}

fn log_reschedule(id: TripId, field: &str, result: &RepoResult<()>) {
    match result {
        Ok(()) => {
            debug!("event=trip_reschedule module=service status=ok trip_id={id} field={field}")
        }
        Err(err) => warn!(
            "event=trip_reschedule module=service status=error trip_id={id} field={field} error={err}"
        ),
    }
}

fn first_seen<K: Copy + Eq + Hash>(keys: impl IntoIterator<Item = K>) -> Vec<K> {
    count_first_seen(keys).into_iter().map(|(key, _)| key).collect()
}

fn count_first_seen<K: Copy + Eq + Hash>(keys: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match slots.entry(key) {
            Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

fn first_max<K>(counts: Vec<(K, usize)>) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for (key, count) in counts {
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}
