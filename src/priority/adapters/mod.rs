//! Adapter implementations of the priority ports.

pub mod memory;
pub mod sqlite;
