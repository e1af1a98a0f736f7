//! The pattern catalog: an ordered, versioned list of detectors.
//!
//! Scanning applies every detector in catalog order. A span already claimed
//! by an earlier detector cannot be claimed by a later one, so results are
//! deterministic and never overlap.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    BsnMatcher, Category, EmailMatcher, IbanMatcher, PatternMatcher, PhoneNumberMatcher,
    PostcodeMatcher,
};
use crate::error::{FilterError, FilterResult};

/// Version of the built-in detector set.
pub const BUILTIN_CATALOG_VERSION: u32 = 1;

/// A single detected span in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// The outcome of scanning one piece of text.
///
/// Offsets refer to the scanned text. `matches` is ordered by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub matches: Vec<Match>,
    pub counts: BTreeMap<Category, usize>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Total number of matches across all categories.
    pub fn total(&self) -> usize {
        self.matches.len()
    }

    pub fn count(&self, category: &Category) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }
}

/// Ordered set of named detectors.
pub struct PatternCatalog {
    version: u32,
    matchers: Vec<Box<dyn PatternMatcher>>,
}

impl PatternCatalog {
    /// Creates a catalog with no detectors.
    pub fn empty() -> Self {
        Self {
            version: BUILTIN_CATALOG_VERSION,
            matchers: Vec::new(),
        }
    }

    /// Creates the standard catalog: phone, email, bsn, postcode, iban.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.matchers.push(Box::new(PhoneNumberMatcher::new()));
        catalog.matchers.push(Box::new(EmailMatcher::new()));
        catalog.matchers.push(Box::new(BsnMatcher::new()));
        catalog.matchers.push(Box::new(PostcodeMatcher::new()));
        catalog.matchers.push(Box::new(IbanMatcher::new()));
        catalog
    }

    /// Appends a detector after all existing ones.
    ///
    /// Category names must be unique within a catalog.
    pub fn register(&mut self, matcher: Box<dyn PatternMatcher>) -> FilterResult<()> {
        if self.contains(matcher.category()) {
            return Err(FilterError::configuration(
                matcher.category().name(),
                "category is already registered in this catalog",
            ));
        }
        self.matchers.push(matcher);
        Ok(())
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with_matcher(mut self, matcher: Box<dyn PatternMatcher>) -> FilterResult<Self> {
        self.register(matcher)?;
        Ok(self)
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.matchers.iter().any(|m| m.category() == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.matchers.iter().map(|m| m.category())
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Scans `text` with every detector in catalog order.
    pub fn scan(&self, text: &str) -> ScanResult {
        // start offset -> (end offset, index of the claiming matcher)
        let mut claimed: BTreeMap<usize, (usize, usize)> = BTreeMap::new();

        for (idx, matcher) in self.matchers.iter().enumerate() {
            for span in matcher.find_spans(text) {
                let overlaps_prev = claimed
                    .range(..=span.start)
                    .next_back()
                    .is_some_and(|(_, (end, _))| *end > span.start);
                let overlaps_next = claimed
                    .range(span.start..)
                    .next()
                    .is_some_and(|(start, _)| *start < span.end);
                if overlaps_prev || overlaps_next {
                    continue;
                }
                claimed.insert(span.start, (span.end, idx));
            }
        }

        let mut counts = BTreeMap::new();
        let matches: Vec<Match> = claimed
            .into_iter()
            .map(|(start, (end, idx))| {
                let category = self.matchers[idx].category().clone();
                *counts.entry(category.clone()).or_insert(0) += 1;
                Match {
                    category,
                    start,
                    end,
                }
            })
            .collect();

        if !matches.is_empty() {
            debug!(matches = matches.len(), ?counts, "scan found privacy-sensitive data");
        }

        ScanResult { matches, counts }
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for PatternCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternCatalog")
            .field("version", &self.version)
            .field("categories", &self.categories().collect::<Vec<_>>())
            .finish()
    }
}
