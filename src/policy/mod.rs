//! Meeting-type privacy policy.
//!
//! Meeting types are stored upstream as records with loosely-typed JSON
//! columns. [`MeetingTypePolicy::from_json`] maps such a record onto typed
//! structures once, at the boundary, and validates it.

pub mod presets;
pub mod roles;

pub use roles::{anonymized_label, GENERIC_PARTICIPANT_LABEL};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FilterError, FilterResult};

/// Keyword filters layered on top of the pattern catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyFilters {
    #[serde(default, deserialize_with = "null_as_default")]
    pub medical_terms: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub personal_data: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sensitive_topics: Vec<String>,
}

impl PrivacyFilters {
    /// The three keyword groups with their names.
    pub fn groups(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            ("medical_terms", self.medical_terms.as_slice()),
            ("personal_data", self.personal_data.as_slice()),
            ("sensitive_topics", self.sensitive_topics.as_slice()),
        ]
        .into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.groups().all(|(_, terms)| terms.is_empty())
    }
}

/// Role-based participant rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantFilters {
    /// Roles whose content is left out of generated reports entirely.
    #[serde(default, deserialize_with = "null_as_default")]
    pub exclude_from_report: BTreeSet<String>,

    /// Roles whose speaker name is replaced by a neutral role label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub anonymize_roles: BTreeSet<String>,

    /// Roles whose contributions are only reported in professional context.
    #[serde(default, deserialize_with = "null_as_default")]
    pub professional_context_only: BTreeSet<String>,
}

/// Privacy level assigned to a participant role.
///
/// Upstream levels are free-form strings; unknown values are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrivacyLevel {
    #[default]
    Standard,
    Strict,
    Limited,
    FullPrivacy,
    MaximumPrivacy,
    ProfessionalContext,
    FamilyContext,
    CareProfessionalOnly,
    SupportContext,
    Other(String),
}

impl PrivacyLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "standard",
            Self::Strict => "strict",
            Self::Limited => "limited",
            Self::FullPrivacy => "full_privacy",
            Self::MaximumPrivacy => "maximum_privacy",
            Self::ProfessionalContext => "professional_context",
            Self::FamilyContext => "family_context",
            Self::CareProfessionalOnly => "care_professional_only",
            Self::SupportContext => "support_context",
            Self::Other(level) => level,
        }
    }
}

impl From<String> for PrivacyLevel {
    fn from(level: String) -> Self {
        match level.as_str() {
            "standard" => Self::Standard,
            "strict" => Self::Strict,
            "limited" => Self::Limited,
            "full_privacy" => Self::FullPrivacy,
            "maximum_privacy" => Self::MaximumPrivacy,
            "professional_context" => Self::ProfessionalContext,
            "family_context" => Self::FamilyContext,
            "care_professional_only" => Self::CareProfessionalOnly,
            "support_context" => Self::SupportContext,
            _ => Self::Other(level),
        }
    }
}

impl From<PrivacyLevel> for String {
    fn from(level: PrivacyLevel) -> Self {
        match level {
            PrivacyLevel::Other(level) => level,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PrivacyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Privacy configuration of one meeting type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTypePolicy {
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub privacy_filters: PrivacyFilters,

    #[serde(default, deserialize_with = "null_as_default")]
    pub participant_filters: ParticipantFilters,

    #[serde(default, deserialize_with = "null_as_default")]
    pub privacy_levels_by_role: BTreeMap<String, PrivacyLevel>,

    /// Roles that may take part; empty means unrestricted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowed_participant_roles: Vec<String>,

    /// Whether report assembly applies keyword gating and anonymization.
    #[serde(default, deserialize_with = "null_as_default")]
    pub auto_anonymize: bool,
}

impl MeetingTypePolicy {
    /// Creates an empty policy that filters nothing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parses and validates a meeting-type record.
    ///
    /// Unknown columns (agenda templates, report templates, metadata) are
    /// ignored.
    pub fn from_json(json: &str) -> FilterResult<Self> {
        let policy: Self = serde_json::from_str(json).map_err(|e| {
            FilterError::configuration("meeting type", format!("invalid policy JSON: {}", e))
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Same as [`from_json`](Self::from_json) for an already-parsed value.
    pub fn from_value(value: serde_json::Value) -> FilterResult<Self> {
        let policy: Self = serde_json::from_value(value).map_err(|e| {
            FilterError::configuration("meeting type", format!("invalid policy JSON: {}", e))
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Rejects blank names, keywords and roles.
    pub fn validate(&self) -> FilterResult<()> {
        if self.name.trim().is_empty() {
            return Err(FilterError::configuration(
                "meeting type",
                "name must not be empty",
            ));
        }

        for (group, terms) in self.privacy_filters.groups() {
            if terms.iter().any(|t| t.trim().is_empty()) {
                return Err(FilterError::configuration(
                    format!("{}.privacy_filters.{}", self.name, group),
                    "keywords must not be blank",
                ));
            }
        }

        let filters = &self.participant_filters;
        let role_sets = [
            ("exclude_from_report", &filters.exclude_from_report),
            ("anonymize_roles", &filters.anonymize_roles),
            ("professional_context_only", &filters.professional_context_only),
        ];
        for (set, roles) in role_sets {
            if roles.iter().any(|r| r.trim().is_empty()) {
                return Err(FilterError::configuration(
                    format!("{}.participant_filters.{}", self.name, set),
                    "roles must not be blank",
                ));
            }
        }

        Ok(())
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
