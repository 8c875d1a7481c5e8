//! Shared in-memory store backing the test adapters.
//!
//! All three entity repositories operate on one store so that cross-entity
//! checks (foreign-key existence, delete guards) see the same state, exactly
//! as the SQLite adapters share one database.

use crate::category::domain::Category;
use crate::priority::domain::Priority;
use crate::task::domain::Task;
use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory store shared by the memory adapters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

/// Mutable store contents; maps are keyed by generated id.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) categories: BTreeMap<i64, Category>,
    pub(crate) priorities: BTreeMap<i64, Priority>,
    pub(crate) tasks: BTreeMap<i64, Task>,
    next_category_id: i64,
    next_priority_id: i64,
    next_task_id: i64,
}

impl StoreState {
    pub(crate) const fn next_category_id(&mut self) -> i64 {
        self.next_category_id += 1;
        self.next_category_id
    }

    pub(crate) const fn next_priority_id(&mut self) -> i64 {
        self.next_priority_id += 1;
        self.next_priority_id
    }

    pub(crate) const fn next_task_id(&mut self) -> i64 {
        self.next_task_id += 1;
        self.next_task_id
    }
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires a read guard, surfacing lock poisoning as an I/O error.
    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, io::Error> {
        self.state
            .read()
            .map_err(|err| io::Error::other(err.to_string()))
    }

    /// Acquires a write guard, surfacing lock poisoning as an I/O error.
    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, io::Error> {
        self.state
            .write()
            .map_err(|err| io::Error::other(err.to_string()))
    }
}
