//! Test fixtures and unit builders.
//!
//! Provides a builder for meeting transcripts, following the Builder
//! pattern for clean test setup.

use privacy_filter::{FilterableUnit, MeetingTypePolicy};

/// Builder for a sequence of transcription units.
///
/// # Example
///
/// ```ignore
/// let units = TranscriptBuilder::new()
///     .line("Anna", "client", "Bel mij op 0612345678")
///     .line("Dr. Bakker", "huisarts", "De diagnose is bekend")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuilder {
    units: Vec<FilterableUnit>,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line with a generated id (`t-1`, `t-2`, ...).
    pub fn line(mut self, speaker: &str, role: &str, text: &str) -> Self {
        let id = format!("t-{}", self.units.len() + 1);
        self.units
            .push(FilterableUnit::new(id, text).with_speaker(speaker).with_role(role));
        self
    }

    /// Adds a line without speaker information.
    pub fn anonymous_line(mut self, text: &str) -> Self {
        let id = format!("t-{}", self.units.len() + 1);
        self.units.push(FilterableUnit::new(id, text));
        self
    }

    pub fn build(self) -> Vec<FilterableUnit> {
        self.units
    }
}

/// A WMO kitchen-table conversation touching every policy rule.
pub fn wmo_transcript() -> Vec<FilterableUnit> {
    TranscriptBuilder::new()
        .line("Anna de Vries", "client", "Mijn nummer is 0612345678")
        .line("Kees Jansen", "wmo_consulent", "Dank u, ik noteer het")
        .line("Dr. Bakker", "huisarts", "De diagnose is al gesteld")
        .line("Piet de Vries", "mantelzorger", "Er zijn ook schulden")
        .line("Sanne Smit", "begeleider", "Ik kom elke dinsdag langs")
        .build()
}

/// A minimal policy with one keyword and explicit role sets.
pub fn custom_policy() -> MeetingTypePolicy {
    MeetingTypePolicy::from_json(
        r#"{
            "name": "test_overleg",
            "privacy_filters": {"medical_terms": ["diagnose"]},
            "participant_filters": {
                "exclude_from_report": ["huisarts", "dubbel"],
                "anonymize_roles": ["client", "dubbel"]
            },
            "auto_anonymize": true
        }"#,
    )
    .expect("valid test policy")
}
