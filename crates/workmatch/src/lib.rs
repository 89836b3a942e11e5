//! Core library for the work-match platform: configuration, telemetry, and
//! the assignment and roster workflows consumed by the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
