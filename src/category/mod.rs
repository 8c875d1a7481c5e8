//! Category management for Taskboard.
//!
//! Categories group tasks and carry a display colour. Names are unique
//! across all categories, and a category cannot be removed while any task
//! still references it. The module follows hexagonal architecture:
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
