//! Core domain logic for the park planner.
//! Visitors and national parks are linked through trips; this crate owns
//! their validation rules and the aggregate queries over them.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::national_park::{NationalPark, ParkId};
pub use model::trip::{Trip, TripId};
pub use model::validation::{DateField, ValidationError};
pub use model::visitor::{Visitor, VisitorId};
pub use repo::registry::{InMemoryRegistry, PlannerRepository, RepoError, RepoResult};
pub use service::planner_service::PlannerService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
