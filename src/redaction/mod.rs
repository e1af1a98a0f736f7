//! Redaction strategies and implementations.
//!
//! This module provides a strategy pattern for replacement text, and the
//! [`Redactor`] that applies a strategy to scanned content while leaving
//! the original text untouched.

pub mod placeholder;
pub mod strategy;

pub use placeholder::{FixedReplacementStrategy, PlaceholderStrategy, DEFAULT_REPLACEMENT_TEXT};
pub use strategy::{RedactionResult, RedactionStrategy};

use crate::catalog::ScanResult;

/// Applies a [`RedactionStrategy`] to scanned text.
pub struct Redactor {
    strategy: Box<dyn RedactionStrategy>,
}

impl Redactor {
    /// Creates a new redactor with the specified strategy.
    pub fn new(strategy: Box<dyn RedactionStrategy>) -> Self {
        Self { strategy }
    }

    /// Creates a redactor that writes `[PRIVACY_FILTERED_<CATEGORY>]` markers.
    pub fn with_placeholder_strategy() -> Self {
        Self::new(Box::new(PlaceholderStrategy::new()))
    }

    /// Produces redacted content from `original` and its scan result.
    pub fn redact(&self, original: &str, scan: &ScanResult) -> RedactionResult {
        self.strategy.redact(original, scan)
    }

    pub fn strategy(&self) -> &dyn RedactionStrategy {
        self.strategy.as_ref()
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::with_placeholder_strategy()
    }
}

impl std::fmt::Debug for Redactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redactor")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
