//! Content scanning.
//!
//! Two distinct questions are answered here. [`ContentScanner::scan`] counts
//! regulated data per category for redaction. [`ContentScanner::scan_with_policy`]
//! is a yes/no gate over a meeting type's keyword lists and excluded roles,
//! used when assembling reports. They are deliberately kept apart: a text can
//! trip the keyword gate while containing nothing to redact.

use tracing::{debug, warn};

use crate::catalog::{PatternCatalog, ScanResult};
use crate::domain::keyword::contains_any_keyword;
use crate::error::{FilterError, FilterResult};
use crate::policy::MeetingTypePolicy;

/// Default upper bound on the size of a single scanned unit (1 MiB).
pub const DEFAULT_MAX_SCAN_BYTES: usize = 1024 * 1024;

/// Applies a [`PatternCatalog`] and policy keyword lists to text.
#[derive(Debug)]
pub struct ContentScanner {
    catalog: PatternCatalog,
    max_scan_bytes: usize,
}

impl ContentScanner {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self {
            catalog,
            max_scan_bytes: DEFAULT_MAX_SCAN_BYTES,
        }
    }

    /// Sets the largest text, in bytes, that [`try_scan`](Self::try_scan) accepts.
    pub fn with_max_scan_bytes(mut self, max_scan_bytes: usize) -> Self {
        self.max_scan_bytes = max_scan_bytes;
        self
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn max_scan_bytes(&self) -> usize {
        self.max_scan_bytes
    }

    /// Quantitative scan over the catalog. Never mutates `text`.
    pub fn scan(&self, text: &str) -> ScanResult {
        self.catalog.scan(text)
    }

    /// Like [`scan`](Self::scan), but refuses oversized input with a
    /// [`FilterError::Scan`] attributed to `unit_id`.
    pub fn try_scan(&self, unit_id: &str, text: &str) -> FilterResult<ScanResult> {
        if text.len() > self.max_scan_bytes {
            warn!(
                unit_id,
                bytes = text.len(),
                limit = self.max_scan_bytes,
                "content exceeds scan limit"
            );
            return Err(FilterError::scan(
                unit_id,
                format!(
                    "content is {} bytes, scan limit is {} bytes",
                    text.len(),
                    self.max_scan_bytes
                ),
            ));
        }
        Ok(self.scan(text))
    }

    /// Keyword gate used by report assembly.
    ///
    /// Returns true as soon as any keyword from the policy's medical terms,
    /// personal data or sensitive topics occurs in `text` (case-insensitive
    /// substring), or when `role` is excluded from reports.
    pub fn scan_with_policy(
        &self,
        text: &str,
        role: Option<&str>,
        policy: &MeetingTypePolicy,
    ) -> bool {
        if role.is_some_and(|r| policy.is_excluded(r)) {
            debug!(role, meeting_type = %policy.name, "role excluded from report");
            return true;
        }

        policy
            .privacy_filters
            .groups()
            .any(|(group, terms)| {
                let hit = contains_any_keyword(text, terms);
                if hit {
                    debug!(group, meeting_type = %policy.name, "keyword filter matched");
                }
                hit
            })
    }
}

impl Default for ContentScanner {
    fn default() -> Self {
        Self::new(PatternCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::presets;

    #[test]
    fn test_keyword_gate_distinct_from_scan() {
        let scanner = ContentScanner::default();
        let policy = presets::participatie_intake();
        let text = "We hebben de medicatie besproken";

        assert!(scanner.scan_with_policy(text, None, &policy));
        assert!(scanner.scan(text).is_empty());
    }

    #[test]
    fn test_excluded_role_trips_gate() {
        let scanner = ContentScanner::default();
        let policy = presets::participatie_intake();
        assert!(scanner.scan_with_policy("Goedemorgen", Some("huisarts"), &policy));
        assert!(!scanner.scan_with_policy("Goedemorgen", Some("client"), &policy));
    }

    #[test]
    fn test_try_scan_rejects_oversized_input() {
        let scanner = ContentScanner::default().with_max_scan_bytes(8);
        let err = scanner.try_scan("t-9", "0612345678").unwrap_err();
        assert!(matches!(err, FilterError::Scan { ref unit_id, .. } if unit_id == "t-9"));
        assert!(scanner.try_scan("t-9", "kort").is_ok());
    }
}
