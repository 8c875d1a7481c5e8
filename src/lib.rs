//! Taskboard: a task-tracking web service.
//!
//! This crate provides the core functionality for managing tasks grouped by
//! category and ranked by priority, exposed over a thin REST boundary and
//! backed by a relational SQLite store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (SQLite, in-memory)
//!
//! # Modules
//!
//! - [`category`]: Category records grouping tasks
//! - [`priority`]: Priority records ranking tasks by urgency
//! - [`task`]: Task records referencing categories and priorities
//! - [`http`]: axum routers translating HTTP requests into service calls
//! - [`storage`]: Shared SQLite schema, pooling, and in-memory test store

pub mod category;
pub mod color;
pub mod config;
pub mod http;
pub mod priority;
pub mod storage;
pub mod task;
