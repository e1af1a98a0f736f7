//! Privacy filtering for meeting transcriptions and reports.
//!
//! This library detects regulated Dutch personal data (phone numbers, email
//! addresses, BSN numbers, postcodes, IBANs) in transcribed conversations
//! and report sections, replaces it with category-tagged audit placeholders,
//! and applies meeting-type role policy when reports are assembled.
//!
//! # Features
//!
//! - **Pattern Catalog**: Ordered, extensible detectors with deterministic, non-overlapping results
//! - **Audit Placeholders**: `[PRIVACY_FILTERED_<CATEGORY>]` markers plus per-category counts
//! - **Idempotent Filtering**: A unit is redacted at most once; its original text is always kept
//! - **Role Policy**: Exclude or anonymize participant roles per meeting type
//! - **Keyword Gates**: Case-insensitive medical, personal and sensitive-topic keyword filters
//!
//! # Architecture
//!
//! - [`domain`]: Detectors for each data category
//! - [`catalog`]: The ordered detector set and its scan results
//! - [`scanner`]: Quantitative scans and the policy keyword gate
//! - [`redaction`]: Replacement strategies
//! - [`policy`]: Meeting-type policy and role decisions
//! - [`orchestrator`]: Per-unit filtering, batches and report assembly
//! - [`store`]: Persistence collaborator with at-most-once commits
//! - [`config`]: TOML configuration
//! - [`error`]: Error handling
//!
//! # Quick Start
//!
//! ```
//! use privacy_filter::{FilterOrchestrator, FilterableUnit};
//!
//! let orchestrator = FilterOrchestrator::default();
//! let mut unit = FilterableUnit::new("t-1", "Bel mij op 0612345678");
//!
//! orchestrator.filter_unit(&mut unit);
//!
//! assert_eq!(unit.current_content(), "Bel mij op [PRIVACY_FILTERED_PHONE]");
//! assert_eq!(unit.original_content(), "Bel mij op 0612345678");
//! assert!(unit.contains_privacy_info());
//! ```
//!
//! # Examples
//!
//! ## Assemble a Report
//!
//! ```
//! use privacy_filter::policy::presets;
//! use privacy_filter::{FilterOrchestrator, FilterableUnit};
//!
//! let orchestrator = FilterOrchestrator::default();
//! let policy = presets::participatie_intake();
//! let units = vec![
//!     FilterableUnit::new("t-1", "Goedemorgen").with_speaker("Anna de Vries").with_role("casemanager"),
//!     FilterableUnit::new("t-2", "Ik kijk mee").with_speaker("Dr. Bakker").with_role("huisarts"),
//! ];
//!
//! let report = orchestrator.assemble_report(&policy, &units);
//! assert_eq!(report.entries.len(), 1);
//! assert_eq!(report.entries[0].speaker, "Case Manager");
//! ```
//!
//! ## Pattern Matching
//!
//! ```
//! use privacy_filter::domain::{PatternMatcher, PhoneNumberMatcher};
//!
//! let matcher = PhoneNumberMatcher::new();
//! let phones = matcher.extract_all("Bel 06 12 34 56 78 of +31 20 1234567");
//! assert_eq!(phones.len(), 2);
//! ```

// Public API
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod json;
pub mod orchestrator;
pub mod policy;
pub mod redaction;
pub mod scanner;
pub mod store;
pub mod unit;

// Re-exports for convenient access
pub use catalog::{Match, PatternCatalog, ScanResult};
pub use config::PrivacyConfig;
pub use domain::{Category, PatternMatcher};
pub use error::{FilterError, FilterResult};
pub use json::{filter_json, JsonFilterReport};
pub use orchestrator::{
    FilterOrchestrator, Report, ReportEntry, FILTERED_CONTENT_MARKER, REVIEW_PENDING_MARKER,
};
pub use policy::{anonymized_label, MeetingTypePolicy, PrivacyLevel};
pub use redaction::{
    FixedReplacementStrategy, PlaceholderStrategy, RedactionResult, RedactionStrategy, Redactor,
};
pub use scanner::ContentScanner;
pub use store::{CommitOutcome, MemoryStore, UnitStore};
pub use unit::{FilterOutcome, FilterableUnit};
