//! Unit tests for the category module.

mod domain_tests;
mod service_tests;
