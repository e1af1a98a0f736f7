//! Burgerservicenummer (BSN) domain logic.
//!
//! By default every bare nine-digit number is treated as a BSN, favouring
//! recall. The eleven-test can be enabled to drop numbers that cannot be a
//! valid BSN, at the cost of missing mistyped ones.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// BSN pattern matcher.
#[derive(Debug, Clone)]
pub struct BsnMatcher {
    category: Category,
    checksum: bool,
}

impl BsnMatcher {
    /// Creates a matcher that flags any nine-digit number.
    pub fn new() -> Self {
        Self {
            category: Category::Bsn,
            checksum: false,
        }
    }

    /// Only reports candidates that pass the eleven-test.
    pub fn with_checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\b[0-9]{9}\b").expect("Valid BSN regex"));
        &PATTERN
    }

    /// Validates a nine-digit string with the BSN eleven-test.
    ///
    /// The weighted sum `9*d1 + 8*d2 + ... + 2*d8 - 1*d9` must be a
    /// non-zero multiple of 11.
    pub fn eleven_test(digits: &str) -> bool {
        if digits.len() != 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        let sum: i64 = digits
            .bytes()
            .map(|b| i64::from(b - b'0'))
            .zip([9, 8, 7, 6, 5, 4, 3, 2, -1])
            .map(|(digit, weight)| digit * weight)
            .sum();

        sum != 0 && sum % 11 == 0
    }
}

impl Default for BsnMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for BsnMatcher {
    fn category(&self) -> &Category {
        &self.category
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.pattern()
            .find_iter(text)
            .filter(|m| !self.checksum || Self::eleven_test(m.as_str()))
            .map(|m| m.range())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_nine_digits() {
        let matcher = BsnMatcher::new();
        assert_eq!(matcher.extract_all("BSN: 123456789"), vec!["123456789"]);
    }

    #[test]
    fn test_longer_numbers_ignored() {
        let matcher = BsnMatcher::new();
        assert!(!matcher.is_match("Ordernummer 1234567890"));
        assert!(!matcher.is_match("12345678"));
    }

    #[test]
    fn test_eleven_test() {
        assert!(BsnMatcher::eleven_test("111222333"));
        assert!(BsnMatcher::eleven_test("123456782"));
        assert!(!BsnMatcher::eleven_test("123456789"));
        assert!(!BsnMatcher::eleven_test("000000000"));
        assert!(!BsnMatcher::eleven_test("12345678a"));
    }

    #[test]
    fn test_checksum_mode_filters_candidates() {
        let matcher = BsnMatcher::new().with_checksum(true);
        let text = "BSN 111222333, klantnummer 123456789";
        assert_eq!(matcher.extract_all(text), vec!["111222333"]);
    }
}
