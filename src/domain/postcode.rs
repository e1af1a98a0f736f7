//! Dutch postcode detection.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches Dutch postcodes: four digits and two uppercase letters,
/// optionally separated by whitespace (`1234 AB`, `1234AB`).
#[derive(Debug, Clone)]
pub struct PostcodeMatcher {
    category: Category,
}

impl PostcodeMatcher {
    pub fn new() -> Self {
        Self {
            category: Category::Postcode,
        }
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b[0-9]{4}\s*[A-Z]{2}\b").expect("Valid postcode regex")
        });
        &PATTERN
    }
}

impl Default for PostcodeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for PostcodeMatcher {
    fn category(&self) -> &Category {
        &self.category
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
