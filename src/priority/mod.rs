//! Priority management for Taskboard.
//!
//! Priorities rank tasks by an ascending `level` sort key and carry a
//! display colour with a neutral grey default. Names are unique, and a
//! priority cannot be removed while any task still references it. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
