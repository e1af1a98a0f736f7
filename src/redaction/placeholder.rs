//! Built-in replacement strategies.

use std::borrow::Cow;

use super::strategy::RedactionStrategy;
use crate::domain::Category;

/// Default replacement used by [`FixedReplacementStrategy::default`].
pub const DEFAULT_REPLACEMENT_TEXT: &str = "[PRIVACY_FILTERED]";

/// Replaces each span with a category-tagged audit placeholder,
/// e.g. `[PRIVACY_FILTERED_EMAIL]`.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderStrategy;

impl PlaceholderStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl RedactionStrategy for PlaceholderStrategy {
    fn replacement(&self, category: &Category) -> Cow<'_, str> {
        Cow::Owned(category.placeholder())
    }

    fn name(&self) -> &str {
        "category-placeholder"
    }
}

/// Replaces every span with the same configured text.
///
/// Category counts are still recorded in the privacy markers.
#[derive(Debug, Clone)]
pub struct FixedReplacementStrategy {
    text: String,
}

impl FixedReplacementStrategy {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for FixedReplacementStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_REPLACEMENT_TEXT)
    }
}

impl RedactionStrategy for FixedReplacementStrategy {
    fn replacement(&self, _category: &Category) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn name(&self) -> &str {
        "fixed-replacement"
    }
}
