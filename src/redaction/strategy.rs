//! Redaction strategy trait and supporting types.
//!
//! This module defines the core abstraction for redaction strategies,
//! allowing different replacement texts (category placeholders, a single
//! fixed marker) behind one interface.

use std::borrow::Cow;
use std::collections::BTreeMap;

use tracing::warn;

use crate::catalog::ScanResult;
use crate::domain::Category;

/// Statistics and output of a redaction operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionResult {
    /// Redacted text
    pub content: String,

    /// Number of spans replaced
    pub instances_redacted: usize,

    /// Replaced spans per category
    pub markers: BTreeMap<Category, usize>,
}

impl RedactionResult {
    /// Creates a result for text that needed no redaction.
    pub fn unchanged(text: &str) -> Self {
        Self {
            content: text.to_string(),
            ..Default::default()
        }
    }

    /// Returns true if any redactions were applied.
    pub fn has_redactions(&self) -> bool {
        self.instances_redacted > 0
    }
}

/// Strategy for replacing detected spans.
pub trait RedactionStrategy: Send + Sync {
    /// Replacement text for a span of the given category.
    fn replacement(&self, category: &Category) -> Cow<'_, str>;

    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;

    /// Rewrites `text` using the spans in `scan`.
    ///
    /// Output is built front to back in one pass. `scan` must come from
    /// scanning this same `text`; spans that do not fit it are skipped and
    /// left out of the counts.
    fn redact(&self, text: &str, scan: &ScanResult) -> RedactionResult {
        if scan.is_empty() {
            return RedactionResult::unchanged(text);
        }

        let mut content = String::with_capacity(text.len());
        let mut markers = BTreeMap::new();
        let mut instances_redacted = 0;
        let mut cursor = 0;

        for m in &scan.matches {
            let fits = m.start >= cursor
                && m.start <= m.end
                && m.end <= text.len()
                && text.is_char_boundary(m.start)
                && text.is_char_boundary(m.end);
            if !fits {
                warn!(
                    start = m.start,
                    end = m.end,
                    category = %m.category,
                    "skipping span that does not fit the text"
                );
                continue;
            }

            content.push_str(&text[cursor..m.start]);
            content.push_str(&self.replacement(&m.category));
            cursor = m.end;

            *markers.entry(m.category.clone()).or_insert(0) += 1;
            instances_redacted += 1;
        }
        content.push_str(&text[cursor..]);

        RedactionResult {
            content,
            instances_redacted,
            markers,
        }
    }
}
