//! Task management for Taskboard.
//!
//! Tasks carry a three-state lifecycle status and two optional foreign-key
//! references, one to a category and one to a priority. Both references
//! must point at existing rows whenever they are set, and reads enrich
//! each task with the referenced name and colour via a join. Updates use
//! PATCH semantics: only supplied fields are validated and changed. The
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
