//! Redaction of JSON documents.
//!
//! Every string leaf of a document is scanned and redacted in place; object
//! keys, numbers and structure are left alone. Used to filter API responses
//! before they leave the service.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::domain::Category;
use crate::orchestrator::REVIEW_PENDING_MARKER;
use crate::redaction::Redactor;
use crate::scanner::ContentScanner;

/// Summary of a JSON filtering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonFilterReport {
    /// String values that were rewritten
    pub values_redacted: usize,

    /// Replaced spans per category across the whole document
    pub markers: BTreeMap<Category, usize>,

    /// Paths of values that could not be scanned and were withheld
    pub withheld: Vec<String>,
}

/// Redacts all string values in `value`.
///
/// A value that cannot be scanned is replaced by the review marker; the
/// rest of the document is still filtered.
pub fn filter_json(
    value: &mut Value,
    scanner: &ContentScanner,
    redactor: &Redactor,
) -> JsonFilterReport {
    let mut report = JsonFilterReport::default();
    walk(value, "$", scanner, redactor, &mut report);
    report
}

fn walk(
    value: &mut Value,
    path: &str,
    scanner: &ContentScanner,
    redactor: &Redactor,
    report: &mut JsonFilterReport,
) {
    match value {
        Value::String(text) => match scanner.try_scan(path, text) {
            Ok(scan) if scan.is_empty() => {}
            Ok(scan) => {
                let result = redactor.redact(text, &scan);
                for (category, count) in result.markers {
                    *report.markers.entry(category).or_insert(0) += count;
                }
                report.values_redacted += 1;
                *text = result.content;
            }
            Err(err) => {
                warn!(path, error = %err, "withholding JSON value");
                report.withheld.push(path.to_string());
                *text = REVIEW_PENDING_MARKER.to_string();
            }
        },
        Value::Array(items) => {
            for (idx, item) in items.iter_mut().enumerate() {
                walk(item, &format!("{}[{}]", path, idx), scanner, redactor, report);
            }
        }
        Value::Object(map) => {
            for (key, item) in map.iter_mut() {
                walk(item, &format!("{}.{}", path, key), scanner, redactor, report);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
