//! Filterable content units.
//!
//! A unit is one transcription line or report section. Its original content
//! is kept verbatim for audit; only the current content is ever rewritten,
//! and only by the first successful filtering pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// Result of evaluating a unit against the catalog, before it is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FilterOutcome {
    /// Sensitive data was found and replaced.
    Redacted {
        content: String,
        markers: BTreeMap<Category, usize>,
    },

    /// Nothing to redact.
    Clean,

    /// The unit was filtered before; nothing was evaluated.
    AlreadyFiltered,

    /// Filtering is switched off.
    Disabled,

    /// Scanning failed; the unit stays unfiltered and is flagged.
    NeedsReview { reason: String },
}

impl FilterOutcome {
    pub fn is_redacted(&self) -> bool {
        matches!(self, Self::Redacted { .. })
    }

    pub fn needs_review(&self) -> bool {
        matches!(self, Self::NeedsReview { .. })
    }
}

/// A transcription line or report section subject to privacy filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterableUnit {
    id: String,

    #[serde(default)]
    speaker_name: Option<String>,

    #[serde(default)]
    speaker_role: Option<String>,

    #[serde(alias = "text")]
    original_content: String,

    #[serde(default)]
    current_content: Option<String>,

    #[serde(default)]
    contains_privacy_info: bool,

    #[serde(default)]
    privacy_markers: BTreeMap<Category, usize>,

    #[serde(default)]
    needs_review: bool,
}

impl FilterableUnit {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            speaker_name: None,
            speaker_role: None,
            original_content: content.into(),
            current_content: None,
            contains_privacy_info: false,
            privacy_markers: BTreeMap::new(),
            needs_review: false,
        }
    }

    pub fn with_speaker(mut self, name: impl Into<String>) -> Self {
        self.speaker_name = Some(name.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.speaker_role = Some(role.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn speaker_name(&self) -> Option<&str> {
        self.speaker_name.as_deref()
    }

    pub fn speaker_role(&self) -> Option<&str> {
        self.speaker_role.as_deref()
    }

    /// The text as first produced. Never altered by filtering.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    /// The text to display and persist; equals the original until filtered.
    pub fn current_content(&self) -> &str {
        self.current_content
            .as_deref()
            .unwrap_or(&self.original_content)
    }

    pub fn contains_privacy_info(&self) -> bool {
        self.contains_privacy_info
    }

    pub fn privacy_markers(&self) -> &BTreeMap<Category, usize> {
        &self.privacy_markers
    }

    pub fn needs_review(&self) -> bool {
        self.needs_review
    }

    /// Applies an outcome to this unit. Returns true if the unit changed.
    ///
    /// A redaction is applied at most once: once `contains_privacy_info`
    /// is set, further outcomes are ignored.
    pub fn apply(&mut self, outcome: &FilterOutcome) -> bool {
        if self.contains_privacy_info {
            return false;
        }

        match outcome {
            FilterOutcome::Redacted { content, markers } => {
                self.current_content = Some(content.clone());
                self.privacy_markers = markers.clone();
                self.contains_privacy_info = true;
                self.needs_review = false;
                true
            }
            FilterOutcome::NeedsReview { .. } => {
                let changed = !self.needs_review;
                self.needs_review = true;
                changed
            }
            FilterOutcome::Clean | FilterOutcome::AlreadyFiltered | FilterOutcome::Disabled => {
                false
            }
        }
    }

    /// Reverts to the original text and clears the privacy markers.
    /// Returns true if the unit was filtered before.
    ///
    /// Afterwards the unit can be filtered again.
    pub fn restore_original(&mut self) -> bool {
        if !self.contains_privacy_info {
            return false;
        }
        self.current_content = None;
        self.contains_privacy_info = false;
        self.privacy_markers.clear();
        true
    }
}
