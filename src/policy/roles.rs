//! Role-based policy decisions.
//!
//! Exclusion takes precedence over anonymization when a role appears in both
//! sets: excluded content never reaches a report, so there is nothing left to
//! anonymize.

use super::{MeetingTypePolicy, PrivacyLevel};

/// Label used for roles without a fixed anonymized label.
pub const GENERIC_PARTICIPANT_LABEL: &str = "Participant";

/// Neutral, human-readable label for a participant role.
///
/// This is a fixed lookup table; unknown roles map to
/// [`GENERIC_PARTICIPANT_LABEL`].
pub fn anonymized_label(role: &str) -> &'static str {
    match role {
        "client" => "Client",
        "casemanager" => "Case Manager",
        "consulent" => "Consultant",
        "wmo_consulent" => "WMO Consultant",
        "zorgprofessional" => "Care Professional",
        "begeleider" => "Support Worker",
        "mantelzorger" => "Informal Caregiver",
        _ => GENERIC_PARTICIPANT_LABEL,
    }
}

impl MeetingTypePolicy {
    /// Content from this role is omitted from reports.
    pub fn is_excluded(&self, role: &str) -> bool {
        self.participant_filters.exclude_from_report.contains(role)
    }

    /// This role's speaker name is replaced by its anonymized label.
    pub fn is_anonymized(&self, role: &str) -> bool {
        self.participant_filters.anonymize_roles.contains(role)
    }

    pub fn is_professional_context_only(&self, role: &str) -> bool {
        self.participant_filters
            .professional_context_only
            .contains(role)
    }

    /// Privacy level for `role`, `standard` when unspecified.
    pub fn privacy_level(&self, role: &str) -> PrivacyLevel {
        self.privacy_levels_by_role
            .get(role)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether `role` may take part in this meeting type.
    pub fn is_allowed_role(&self, role: &str) -> bool {
        self.allowed_participant_roles.is_empty()
            || self.allowed_participant_roles.iter().any(|r| r == role)
    }
}
