//! Domain-focused tests for priority value types.

use crate::color::HexColor;
use crate::priority::domain::{PriorityChanges, PriorityDomainError, PriorityName};
use rstest::rstest;

#[rstest]
fn priority_name_trims_surrounding_whitespace() {
    let name = PriorityName::new("  Urgent  ").expect("valid name");
    assert_eq!(name.as_str(), "Urgent");
}

#[rstest]
#[case("")]
#[case("   ")]
fn priority_name_rejects_empty_values(#[case] raw: &str) {
    assert_eq!(PriorityName::new(raw), Err(PriorityDomainError::EmptyName));
}

#[rstest]
fn empty_name_error_carries_client_facing_message() {
    assert_eq!(
        PriorityDomainError::EmptyName.to_string(),
        "Name cannot be empty"
    );
}

#[rstest]
fn changes_default_is_empty() {
    assert!(PriorityChanges::default().is_empty());
}

#[rstest]
fn changes_with_any_field_are_not_empty() {
    let changes = PriorityChanges {
        color: Some(HexColor::default()),
        ..PriorityChanges::default()
    };
    assert!(!changes.is_empty());
}
