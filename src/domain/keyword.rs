//! Keyword-list detectors.
//!
//! Keywords are literal terms matched case-insensitively. They often contain
//! characters with regex meaning, so every term is escaped before compiling.

use super::{Category, PatternMatcher};
use crate::error::{FilterError, FilterResult};
use regex::{Regex, RegexBuilder};

/// A detector for a list of literal, case-insensitive keywords.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    category: Category,
    regex: Regex,
}

impl KeywordMatcher {
    pub fn new<I, S>(name: &str, keywords: I) -> FilterResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(FilterError::configuration(name, "keyword list is empty"));
        }

        // Longest first so overlapping terms report the widest span.
        keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        keywords.dedup();

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let regex = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .map_err(|e| FilterError::configuration(name, e.to_string()))?;

        Ok(Self {
            category: Category::from(name),
            regex,
        })
    }
}

impl PatternMatcher for KeywordMatcher {
    fn category(&self) -> &Category {
        &self.category
    }

    fn pattern(&self) -> &Regex {
        &self.regex
    }
}

/// Returns true if any keyword occurs in `text`, ignoring case.
///
/// Plain substring containment: no word boundaries, no regex.
pub fn contains_any_keyword<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let haystack = text.to_lowercase();
    keywords.iter().any(|keyword| {
        let needle = keyword.as_ref().trim().to_lowercase();
        !needle.is_empty() && haystack.contains(&needle)
    })
}
