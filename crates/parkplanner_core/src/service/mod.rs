//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into creation, mutation and query APIs.
//! - Keep the CLI decoupled from arena details.

pub mod planner_service;
