//! Filter orchestration.
//!
//! [`FilterOrchestrator`] composes the scanner, the redactor and meeting-type
//! policy. It filters individual units (redaction with audit markers), whole
//! batches in parallel, units held in a [`UnitStore`], undoes filtering on
//! request, and assembles the per-meeting report view with role exclusion
//! and anonymization.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::PatternCatalog;
use crate::domain::Category;
use crate::error::FilterResult;
use crate::policy::{
    anonymized_label, MeetingTypePolicy, PrivacyLevel, GENERIC_PARTICIPANT_LABEL,
};
use crate::redaction::Redactor;
use crate::scanner::ContentScanner;
use crate::store::{CommitOutcome, UnitStore};
use crate::unit::{FilterOutcome, FilterableUnit};

/// Text shown in reports in place of content that tripped a keyword filter.
pub const FILTERED_CONTENT_MARKER: &str = "Content filtered for privacy";

/// Text shown in reports for units whose scan failed.
pub const REVIEW_PENDING_MARKER: &str = "Content withheld pending privacy review";

/// One line of an assembled report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub unit_id: String,
    pub speaker: String,
    pub role: Option<String>,
    pub privacy_level: PrivacyLevel,
    /// The role only reports in its professional capacity.
    pub professional_context_only: bool,
    pub text: String,
    pub privacy_markers: BTreeMap<Category, usize>,
    pub content_filtered: bool,
    pub speaker_anonymized: bool,
    pub needs_review: bool,
}

/// Report view of a meeting's units under a meeting-type policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub meeting_type: String,
    pub entries: Vec<ReportEntry>,
    /// Number of units omitted because their role is excluded.
    pub excluded: usize,
    /// Roles present in the units but not allowed for this meeting type.
    pub unlisted_roles: BTreeSet<String>,
}

impl Report {
    pub fn contains_unit(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.unit_id == id)
    }
}

/// Coordinates scanning, redaction and role policy per content unit.
#[derive(Debug)]
pub struct FilterOrchestrator {
    scanner: ContentScanner,
    redactor: Redactor,
    enabled: bool,
}

impl FilterOrchestrator {
    pub fn new(scanner: ContentScanner, redactor: Redactor) -> Self {
        Self {
            scanner,
            redactor,
            enabled: true,
        }
    }

    /// When disabled, units pass through untouched.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn scanner(&self) -> &ContentScanner {
        &self.scanner
    }

    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    /// Decides what filtering would do to `unit` without changing it.
    pub fn evaluate(&self, unit: &FilterableUnit) -> FilterOutcome {
        if unit.contains_privacy_info() {
            debug!(unit_id = unit.id(), "unit already filtered");
            return FilterOutcome::AlreadyFiltered;
        }
        if !self.enabled {
            return FilterOutcome::Disabled;
        }

        let scan = match self.scanner.try_scan(unit.id(), unit.original_content()) {
            Ok(scan) => scan,
            Err(err) => {
                warn!(unit_id = unit.id(), error = %err, "flagging unit for manual review");
                return FilterOutcome::NeedsReview {
                    reason: err.to_string(),
                };
            }
        };

        if scan.is_empty() {
            return FilterOutcome::Clean;
        }

        let result = self.redactor.redact(unit.original_content(), &scan);
        FilterOutcome::Redacted {
            content: result.content,
            markers: result.markers,
        }
    }

    /// Filters a unit in place. Calling this again on the same unit is a no-op.
    pub fn filter_unit(&self, unit: &mut FilterableUnit) -> FilterOutcome {
        let outcome = self.evaluate(unit);
        if unit.apply(&outcome) && outcome.is_redacted() {
            info!(
                unit_id = unit.id(),
                markers = ?unit.privacy_markers(),
                "privacy filtering applied"
            );
        }
        outcome
    }

    /// Filters many units in parallel.
    ///
    /// Outcomes are returned in input order. A failing unit is flagged for
    /// review and does not affect its siblings.
    pub fn filter_batch(&self, units: &mut [FilterableUnit]) -> Vec<FilterOutcome> {
        units
            .par_iter_mut()
            .map(|unit| self.filter_unit(unit))
            .collect()
    }

    /// Filters a unit held in `store`, committing the outcome atomically.
    ///
    /// If a concurrent pass commits first, the result is
    /// [`FilterOutcome::AlreadyFiltered`] and nothing is written.
    pub fn filter_stored(&self, store: &dyn UnitStore, id: &str) -> FilterResult<FilterOutcome> {
        let unit = store.load(id)?;
        let outcome = self.evaluate(&unit);

        match outcome {
            FilterOutcome::Redacted { .. } | FilterOutcome::NeedsReview { .. } => {
                match store.commit_filtered(id, &outcome)? {
                    CommitOutcome::AlreadyFiltered => {
                        debug!(unit_id = id, "lost filtering race, keeping stored result");
                        Ok(FilterOutcome::AlreadyFiltered)
                    }
                    CommitOutcome::Applied | CommitOutcome::Unchanged => Ok(outcome),
                }
            }
            _ => Ok(outcome),
        }
    }

    /// Undoes filtering on a unit: its current content reverts to the
    /// original text and its markers are cleared. Returns true if the unit
    /// was filtered before.
    pub fn restore_unit(&self, unit: &mut FilterableUnit) -> bool {
        let restored = unit.restore_original();
        if restored {
            info!(unit_id = unit.id(), "privacy filtering removed");
        }
        restored
    }

    /// Undoes filtering on every unit; returns how many were restored.
    pub fn restore_batch(&self, units: &mut [FilterableUnit]) -> usize {
        units
            .iter_mut()
            .map(|unit| self.restore_unit(unit))
            .filter(|&restored| restored)
            .count()
    }

    /// Undoes filtering on a unit held in `store`.
    pub fn restore_stored(&self, store: &dyn UnitStore, id: &str) -> FilterResult<bool> {
        let restored = store.restore_original(id)?;
        if restored {
            info!(unit_id = id, "privacy filtering removed");
        }
        Ok(restored)
    }

    /// Builds the report view of `units` under `policy`.
    ///
    /// Units whose role is excluded are omitted. When the meeting type has
    /// auto-anonymization enabled, text that trips a keyword filter is
    /// replaced by [`FILTERED_CONTENT_MARKER`] and anonymized roles are shown
    /// by their role label. Displayed text is always the redacted content,
    /// whether or not the unit was filtered beforehand.
    pub fn assemble_report(&self, policy: &MeetingTypePolicy, units: &[FilterableUnit]) -> Report {
        let mut entries = Vec::with_capacity(units.len());
        let mut excluded = 0;
        let mut unlisted_roles = BTreeSet::new();

        for unit in units {
            let role = unit.speaker_role();
            if role.is_some_and(|r| policy.is_excluded(r)) {
                excluded += 1;
                continue;
            }
            if let Some(role) = role.filter(|r| !policy.is_allowed_role(r)) {
                unlisted_roles.insert(role.to_string());
            }

            let (mut text, markers, needs_review) = match self.evaluate(unit) {
                FilterOutcome::Redacted { content, markers } => (content, markers, false),
                FilterOutcome::NeedsReview { .. } => {
                    (REVIEW_PENDING_MARKER.to_string(), BTreeMap::new(), true)
                }
                FilterOutcome::AlreadyFiltered
                | FilterOutcome::Clean
                | FilterOutcome::Disabled => (
                    unit.current_content().to_string(),
                    unit.privacy_markers().clone(),
                    unit.needs_review(),
                ),
            };

            let mut speaker = unit
                .speaker_name()
                .map(str::to_string)
                .unwrap_or_else(|| {
                    role.map_or(GENERIC_PARTICIPANT_LABEL, anonymized_label)
                        .to_string()
                });
            let mut content_filtered = false;
            let mut speaker_anonymized = false;

            if policy.auto_anonymize {
                if !needs_review
                    && self
                        .scanner
                        .scan_with_policy(unit.original_content(), role, policy)
                {
                    text = FILTERED_CONTENT_MARKER.to_string();
                    content_filtered = true;
                }

                if let Some(role) = role.filter(|r| policy.is_anonymized(r)) {
                    speaker = anonymized_label(role).to_string();
                    speaker_anonymized = true;
                }
            }

            entries.push(ReportEntry {
                unit_id: unit.id().to_string(),
                speaker,
                role: role.map(str::to_string),
                privacy_level: role
                    .map(|r| policy.privacy_level(r))
                    .unwrap_or_default(),
                professional_context_only: role
                    .is_some_and(|r| policy.is_professional_context_only(r)),
                text,
                privacy_markers: markers,
                content_filtered,
                speaker_anonymized,
                needs_review,
            });
        }

        if !unlisted_roles.is_empty() {
            warn!(
                meeting_type = %policy.name,
                roles = ?unlisted_roles,
                "units from roles not allowed for this meeting type"
            );
        }

        info!(
            meeting_type = %policy.name,
            entries = entries.len(),
            excluded,
            "report assembled"
        );

        Report {
            meeting_type: policy.name.clone(),
            entries,
            excluded,
            unlisted_roles,
        }
    }
}

impl Default for FilterOrchestrator {
    fn default() -> Self {
        Self::new(
            ContentScanner::new(PatternCatalog::builtin()),
            Redactor::default(),
        )
    }
}
