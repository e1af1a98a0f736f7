//! Built-in meeting types.

use super::{MeetingTypePolicy, ParticipantFilters, PrivacyFilters, PrivacyLevel};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn levels(items: &[(&str, PrivacyLevel)]) -> std::collections::BTreeMap<String, PrivacyLevel> {
    items
        .iter()
        .map(|(role, level)| (role.to_string(), level.clone()))
        .collect()
}

/// Intake conversation for municipal participation programmes.
pub fn participatie_intake() -> MeetingTypePolicy {
    MeetingTypePolicy {
        name: "participatie_intake".to_string(),
        display_name: Some("Participatie Intake".to_string()),
        privacy_filters: PrivacyFilters {
            medical_terms: strings(&["diagnose", "medicatie", "therapie", "psychiater"]),
            personal_data: strings(&["bsn", "sofinummer", "adres_volledig"]),
            sensitive_topics: strings(&["schulden", "uitkering_bedrag", "persoonlijke_problemen"]),
        },
        participant_filters: ParticipantFilters {
            exclude_from_report: strings(&["huisarts", "psycholoog", "therapeut"])
                .into_iter()
                .collect(),
            anonymize_roles: strings(&["casemanager", "consulent"]).into_iter().collect(),
            professional_context_only: Default::default(),
        },
        privacy_levels_by_role: levels(&[
            ("client", PrivacyLevel::FullPrivacy),
            ("casemanager", PrivacyLevel::ProfessionalContext),
            ("consulent", PrivacyLevel::ProfessionalContext),
            ("begeleider", PrivacyLevel::ProfessionalContext),
        ]),
        allowed_participant_roles: strings(&["client", "casemanager", "consulent", "begeleider"]),
        auto_anonymize: true,
    }
}

/// Regular meeting between professionals; no anonymization.
pub fn algemeen_overleg() -> MeetingTypePolicy {
    MeetingTypePolicy {
        name: "algemeen_overleg".to_string(),
        display_name: Some("Algemeen Overleg".to_string()),
        privacy_filters: PrivacyFilters {
            medical_terms: Vec::new(),
            personal_data: strings(&["bsn", "sofinummer"]),
            sensitive_topics: Vec::new(),
        },
        participant_filters: ParticipantFilters::default(),
        privacy_levels_by_role: levels(&[
            ("teamleider", PrivacyLevel::Standard),
            ("medewerker", PrivacyLevel::Standard),
            ("projectleider", PrivacyLevel::Standard),
            ("extern_adviseur", PrivacyLevel::Limited),
        ]),
        allowed_participant_roles: strings(&[
            "teamleider",
            "medewerker",
            "projectleider",
            "extern_adviseur",
        ]),
        auto_anonymize: false,
    }
}

/// WMO kitchen-table conversation held at the client's home.
pub fn wmo_keukentafel() -> MeetingTypePolicy {
    MeetingTypePolicy {
        name: "wmo_keukentafel".to_string(),
        display_name: Some("WMO Keukentafelgesprek".to_string()),
        privacy_filters: PrivacyFilters {
            medical_terms: strings(&[
                "diagnose",
                "medicatie",
                "ziektebeeld",
                "behandeling",
                "huisarts",
                "specialist",
                "ziekenhuis",
                "therapie",
            ]),
            personal_data: strings(&["bsn", "sofinummer", "adres_volledig", "geboortedatum"]),
            sensitive_topics: strings(&[
                "financiele_situatie",
                "schulden",
                "uitkering_bedrag",
                "familie_problemen",
                "relationele_problemen",
            ]),
        },
        participant_filters: ParticipantFilters {
            exclude_from_report: strings(&[
                "huisarts",
                "medisch_specialist",
                "psychiater",
                "psycholoog",
                "therapeut",
            ])
            .into_iter()
            .collect(),
            anonymize_roles: strings(&["wmo_consulent", "begeleider"]).into_iter().collect(),
            professional_context_only: strings(&["zorgprofessional", "maatschappelijk_werker"])
                .into_iter()
                .collect(),
        },
        privacy_levels_by_role: levels(&[
            ("client", PrivacyLevel::MaximumPrivacy),
            ("mantelzorger", PrivacyLevel::FamilyContext),
            ("wmo_consulent", PrivacyLevel::ProfessionalContext),
            ("zorgprofessional", PrivacyLevel::CareProfessionalOnly),
            ("begeleider", PrivacyLevel::SupportContext),
        ]),
        allowed_participant_roles: strings(&[
            "client",
            "mantelzorger",
            "wmo_consulent",
            "zorgprofessional",
            "begeleider",
        ]),
        auto_anonymize: true,
    }
}

/// All built-in meeting types.
pub fn all() -> Vec<MeetingTypePolicy> {
    vec![participatie_intake(), algemeen_overleg(), wmo_keukentafel()]
}

/// Looks up a built-in meeting type by name.
pub fn by_name(name: &str) -> Option<MeetingTypePolicy> {
    all().into_iter().find(|policy| policy.name == name)
}
