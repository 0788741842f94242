//! Registry layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the registry contract injected into services.
//! - Keep arena and index details away from query orchestration.
//!
//! # Invariants
//! - Each registry instance is independent; there is no process-wide state.
//! - Registry APIs return semantic errors (`*NotFound`, `Duplicate*`).

pub mod registry;
