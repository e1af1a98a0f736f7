//! Operator-defined regex detectors.

use super::{Category, PatternMatcher};
use crate::error::{FilterError, FilterResult};
use regex::Regex;

/// A detector compiled from a configured regular expression.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    category: Category,
    regex: Regex,
}

impl RegexMatcher {
    /// Compiles `pattern` for the given category name.
    ///
    /// Fails with a configuration error when the pattern does not compile
    /// or matches the empty string, which would redact between every
    /// character.
    pub fn new(name: &str, pattern: &str) -> FilterResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| FilterError::Configuration {
            subject: name.to_string(),
            reason: e.to_string(),
        })?;

        if regex.is_match("") {
            return Err(FilterError::configuration(
                name,
                "pattern matches the empty string",
            ));
        }

        Ok(Self {
            category: Category::from(name),
            regex,
        })
    }
}

impl PatternMatcher for RegexMatcher {
    fn category(&self) -> &Category {
        &self.category
    }

    fn pattern(&self) -> &Regex {
        &self.regex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_regex() {
        let matcher = RegexMatcher::new("case_number", r"ZK-\d{6}").unwrap();
        assert_eq!(matcher.category(), &Category::from("case_number"));
        assert_eq!(matcher.extract_all("Zaak ZK-123456 loopt"), vec!["ZK-123456"]);
    }

    #[test]
    fn test_invalid_regex_is_configuration_error() {
        let err = RegexMatcher::new("broken", "(unclosed").unwrap_err();
        assert!(matches!(err, FilterError::Configuration { ref subject, .. } if subject == "broken"));
    }

    #[test]
    fn test_empty_matching_pattern_rejected() {
        assert!(RegexMatcher::new("anything", ".*").is_err());
    }
}
