//! Dutch phone number domain logic.
//!
//! This module encapsulates the rules for detecting Dutch phone numbers in
//! transcribed speech, where digits are frequently separated by spaces.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Dutch phone number pattern matcher.
///
/// A number starts with a country or trunk prefix followed by nine digits,
/// the first of which is never zero:
/// - 0612345678
/// - 06 12 34 56 78
/// - +31 6 12345678
/// - 0031 20 123 4567
#[derive(Debug, Clone)]
pub struct PhoneNumberMatcher {
    category: Category,
}

impl PhoneNumberMatcher {
    /// Creates a new phone number matcher.
    pub fn new() -> Self {
        Self {
            category: Category::Phone,
        }
    }

    /// Returns the regex pattern for Dutch phone numbers.
    ///
    /// Whitespace is only consumed between digits, so a trailing space
    /// is never part of the match.
    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?:\+31|\b0031|\b0)\s*[1-9](?:\s*[0-9]){8}\b")
                .expect("Valid phone number regex")
        });
        &PATTERN
    }
}

impl Default for PhoneNumberMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for PhoneNumberMatcher {
    fn category(&self) -> &Category {
        &self.category
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
