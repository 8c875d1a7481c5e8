//! Adapter implementations of the category ports.

pub mod memory;
pub mod sqlite;
