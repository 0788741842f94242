//! Domain model for visitors, national parks and the trips linking them.
//!
//! # Responsibility
//! - Define the three entities and their typed stable identifiers.
//! - Enforce field validation at construction and on every setter.
//!
//! # Invariants
//! - Relationships are stored as identifiers, never as references.
//! - Back-reference lists are only appended by registry trip registration.

pub mod national_park;
pub mod trip;
pub mod validation;
pub mod visitor;
