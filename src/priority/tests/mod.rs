//! Unit tests for the priority module.

mod domain_tests;
