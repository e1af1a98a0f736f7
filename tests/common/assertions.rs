//! Custom assertions for privacy filtering tests.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use privacy_filter::{Category, FilterableUnit, Report};

/// Asserts that `pattern` no longer appears in the unit's current content
/// but is still present in its original content.
///
/// # Panics
/// Panics if the pattern survived redaction or the original was altered.
pub fn assert_redacted(unit: &FilterableUnit, pattern: &str) {
    assert!(
        !unit.current_content().contains(pattern),
        "Pattern '{}' should be redacted but was found in unit '{}': {}",
        pattern,
        unit.id(),
        unit.current_content()
    );
    assert!(
        unit.original_content().contains(pattern),
        "Original content of unit '{}' should still contain '{}'",
        unit.id(),
        pattern
    );
}

/// Asserts that `pattern` is still present in the unit's current content.
pub fn assert_preserved(unit: &FilterableUnit, pattern: &str) {
    assert!(
        unit.current_content().contains(pattern),
        "Pattern '{}' should be preserved but was not found in unit '{}': {}",
        pattern,
        unit.id(),
        unit.current_content()
    );
}

/// Asserts the unit's markers equal `expected` exactly.
pub fn assert_markers(unit: &FilterableUnit, expected: &[(Category, usize)]) {
    let actual: Vec<(Category, usize)> = unit
        .privacy_markers()
        .iter()
        .map(|(c, n)| (c.clone(), *n))
        .collect();
    let mut expected = expected.to_vec();
    expected.sort();
    assert_eq!(
        actual,
        expected,
        "Unexpected privacy markers for unit '{}'",
        unit.id()
    );
}

/// Asserts that a unit is absent from a report.
pub fn assert_omitted(report: &Report, unit_id: &str) {
    assert!(
        !report.contains_unit(unit_id),
        "Unit '{}' should be omitted from the '{}' report",
        unit_id,
        report.meeting_type
    );
}
