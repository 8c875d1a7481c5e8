//! Domain-focused tests for category value types.

use crate::category::domain::{CategoryDomainError, CategoryId, CategoryName};
use rstest::rstest;

#[rstest]
fn category_name_trims_surrounding_whitespace() {
    let name = CategoryName::new("  Work  ").expect("valid name");
    assert_eq!(name.as_str(), "Work");
}

#[rstest]
#[case("")]
#[case("   ")]
fn category_name_rejects_empty_values(#[case] raw: &str) {
    assert_eq!(CategoryName::new(raw), Err(CategoryDomainError::EmptyName));
}

#[rstest]
fn category_name_rejects_values_over_fifty_characters() {
    let raw = "x".repeat(51);
    assert_eq!(
        CategoryName::new(raw.clone()),
        Err(CategoryDomainError::NameTooLong(raw))
    );
}

#[rstest]
fn category_name_accepts_exactly_fifty_characters() {
    let raw = "x".repeat(50);
    let name = CategoryName::new(raw.clone()).expect("boundary length is valid");
    assert_eq!(name.as_str(), raw);
}

#[rstest]
fn empty_name_error_carries_client_facing_message() {
    assert_eq!(
        CategoryDomainError::EmptyName.to_string(),
        "Category name is required"
    );
}

#[rstest]
fn category_id_round_trips_value() {
    let id = CategoryId::new(42);
    assert_eq!(id.value(), 42);
    assert_eq!(id.to_string(), "42");
}
