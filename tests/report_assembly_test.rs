//! Report assembly tests.
//!
//! Verify role exclusion, role anonymization and the keyword gate, and
//! that these stay independent of text redaction.

use privacy_filter::policy::presets;
use privacy_filter::{
    Category, FilterOrchestrator, FilterableUnit, MeetingTypePolicy, FILTERED_CONTENT_MARKER,
};

mod common;
use common::*;

#[test]
fn test_excluded_role_omitted_regardless_of_content() {
    let orchestrator = FilterOrchestrator::default();
    let report = orchestrator.assemble_report(&presets::wmo_keukentafel(), &wmo_transcript());

    assert_omitted(&report, "t-3");
    assert_eq!(report.excluded, 1);
    assert_eq!(report.entries.len(), 4);
}

#[test]
fn test_exclusion_applies_without_auto_anonymize() {
    let mut policy = presets::participatie_intake();
    policy.auto_anonymize = false;
    let units = TranscriptBuilder::new()
        .line("Dr. Bakker", "huisarts", "Alles in orde")
        .build();

    let report = FilterOrchestrator::default().assemble_report(&policy, &units);
    assert!(report.entries.is_empty());
}

#[test]
fn test_anonymized_role_gets_label() {
    let orchestrator = FilterOrchestrator::default();
    let report = orchestrator.assemble_report(&presets::wmo_keukentafel(), &wmo_transcript());

    let consultant = &report.entries[1];
    assert_eq!(consultant.unit_id, "t-2");
    assert_eq!(consultant.speaker, "WMO Consultant");
    assert!(consultant.speaker_anonymized);

    let support = report.entries.iter().find(|e| e.unit_id == "t-5").unwrap();
    assert_eq!(support.speaker, "Support Worker");
}

#[test]
fn test_anonymization_independent_of_redaction() {
    let policy = custom_policy();
    let units = TranscriptBuilder::new()
        .line("Anna de Vries", "client", "Bel mij op 0612345678")
        .build();

    let report = FilterOrchestrator::default().assemble_report(&policy, &units);
    let entry = &report.entries[0];
    assert_eq!(entry.speaker, "Client");
    assert_eq!(entry.text, "Bel mij op [PRIVACY_FILTERED_PHONE]");
    assert_eq!(entry.privacy_markers.get(&Category::Phone), Some(&1));
}

#[test]
fn test_exclusion_wins_over_anonymization() {
    let units = TranscriptBuilder::new()
        .line("X", "dubbel", "Hallo")
        .build();
    let report = FilterOrchestrator::default().assemble_report(&custom_policy(), &units);
    assert_omitted(&report, "t-1");
}

#[test]
fn test_keyword_gate_masks_text() {
    let orchestrator = FilterOrchestrator::default();
    let report = orchestrator.assemble_report(&presets::wmo_keukentafel(), &wmo_transcript());

    let caregiver = report.entries.iter().find(|e| e.unit_id == "t-4").unwrap();
    assert_eq!(caregiver.text, FILTERED_CONTENT_MARKER);
    assert!(caregiver.content_filtered);
    // mantelzorger is not an anonymized role in this meeting type
    assert_eq!(caregiver.speaker, "Piet de Vries");
}

#[test]
fn test_keyword_gate_and_scan_are_distinct() {
    let orchestrator = FilterOrchestrator::default();
    let policy = presets::participatie_intake();
    let text = "De psychiater heeft therapie voorgesteld";

    assert!(orchestrator.scanner().scan_with_policy(text, None, &policy));
    assert!(orchestrator.scanner().scan(text).is_empty());

    let mut unit = FilterableUnit::new("u", text);
    orchestrator.filter_unit(&mut unit);
    assert!(!unit.contains_privacy_info());
}

#[test]
fn test_placeholder_does_not_trip_personal_data_keyword() {
    // "bsn" is a personal_data keyword; the gate looks at the spoken text,
    // not at the audit placeholder.
    let policy = MeetingTypePolicy {
        auto_anonymize: true,
        ..presets::algemeen_overleg()
    };
    assert!(policy
        .privacy_filters
        .personal_data
        .contains(&"bsn".to_string()));
    let units = TranscriptBuilder::new()
        .line("Piet", "teamleider", "Het nummer is 123456789")
        .build();

    let report = FilterOrchestrator::default().assemble_report(&policy, &units);
    assert_eq!(report.entries[0].text, "Het nummer is [PRIVACY_FILTERED_BSN]");
    assert!(!report.entries[0].content_filtered);
}

#[test]
fn test_entries_keep_input_order() {
    let units = TranscriptBuilder::new()
        .anonymous_line("een")
        .anonymous_line("twee")
        .anonymous_line("drie")
        .build();
    let report =
        FilterOrchestrator::default().assemble_report(&presets::algemeen_overleg(), &units);
    let ids: Vec<_> = report.entries.iter().map(|e| e.unit_id.as_str()).collect();
    assert_eq!(ids, vec!["t-1", "t-2", "t-3"]);
    assert_eq!(report.entries[0].speaker, "Participant");
}

#[test]
fn test_report_does_not_mutate_units() {
    let units = wmo_transcript();
    let before = units.clone();
    FilterOrchestrator::default().assemble_report(&presets::wmo_keukentafel(), &units);
    assert_eq!(units, before);
}

#[test]
fn test_report_serializes_markers_by_name() {
    let units = TranscriptBuilder::new()
        .line("Anna", "client", "IBAN NL91ABNA0417164300")
        .build();
    let report =
        FilterOrchestrator::default().assemble_report(&presets::algemeen_overleg(), &units);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["entries"][0]["privacy_markers"]["iban"], 1);
}
