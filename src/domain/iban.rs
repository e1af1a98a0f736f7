//! Dutch IBAN detection.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches Dutch IBANs: `NL`, two check digits, a four-letter bank code and
/// a ten-digit account number (`NL91ABNA0417164300`).
#[derive(Debug, Clone)]
pub struct IbanMatcher {
    category: Category,
}

impl IbanMatcher {
    pub fn new() -> Self {
        Self {
            category: Category::Iban,
        }
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\bNL[0-9]{2}[A-Z]{4}[0-9]{10}\b").expect("Valid IBAN regex")
        });
        &PATTERN
    }
}

impl Default for IbanMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for IbanMatcher {
    fn category(&self) -> &Category {
        &self.category
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iban_extraction() {
        let matcher = IbanMatcher::new();
        assert_eq!(
            matcher.extract_all("IBAN NL91ABNA0417164300"),
            vec!["NL91ABNA0417164300"]
        );
    }

    #[test]
    fn test_foreign_and_spaced_ibans_ignored() {
        let matcher = IbanMatcher::new();
        assert!(!matcher.is_match("DE89370400440532013000"));
        assert!(!matcher.is_match("NL91 ABNA 0417 1643 00"));
    }
}
