//! Concurrency tests.
//!
//! The catalog and orchestrator are shared read-only across threads; the
//! store guarantees each unit is filtered at most once.

use std::sync::Arc;
use std::thread;

use privacy_filter::{
    Category, FilterOrchestrator, FilterOutcome, FilterableUnit, MemoryStore, UnitStore,
};

#[test]
fn test_batch_outcomes_in_input_order() {
    let orchestrator = FilterOrchestrator::default();
    let mut units: Vec<FilterableUnit> = (0..64)
        .map(|i| {
            let text = if i % 2 == 0 {
                format!("Regel {} met nummer 0612345678", i)
            } else {
                format!("Regel {} zonder gegevens", i)
            };
            FilterableUnit::new(format!("t-{}", i), text)
        })
        .collect();

    let outcomes = orchestrator.filter_batch(&mut units);

    assert_eq!(outcomes.len(), 64);
    for (i, (unit, outcome)) in units.iter().zip(&outcomes).enumerate() {
        assert_eq!(unit.id(), format!("t-{}", i));
        assert_eq!(outcome.is_redacted(), i % 2 == 0);
        assert_eq!(unit.contains_privacy_info(), i % 2 == 0);
    }
}

#[test]
fn test_batch_failure_is_local_to_unit() {
    let orchestrator = privacy_filter::PrivacyConfig {
        max_scan_bytes: 32,
        ..Default::default()
    }
    .build_orchestrator()
    .unwrap();

    let mut units = vec![
        FilterableUnit::new("ok-1", "BSN 123456789"),
        FilterableUnit::new("big", "x".repeat(100)),
        FilterableUnit::new("ok-2", "Mail x@y.nl"),
    ];

    let outcomes = orchestrator.filter_batch(&mut units);

    assert!(outcomes[0].is_redacted());
    assert!(outcomes[1].needs_review());
    assert!(outcomes[2].is_redacted());
    assert!(units[1].needs_review());
    assert_eq!(units[1].original_content(), "x".repeat(100));
}

#[test]
fn test_empty_batch() {
    let orchestrator = FilterOrchestrator::default();
    assert!(orchestrator.filter_batch(&mut []).is_empty());
}

#[test]
fn test_concurrent_passes_commit_once() {
    let store = Arc::new(MemoryStore::new());
    store
        .save(FilterableUnit::new("shared", "Bel 0612345678, BSN 123456789"))
        .unwrap();
    let orchestrator = Arc::new(FilterOrchestrator::default());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let orchestrator = Arc::clone(&orchestrator);
            thread::spawn(move || orchestrator.filter_stored(store.as_ref(), "shared").unwrap())
        })
        .collect();

    let outcomes: Vec<FilterOutcome> = handles
        .into_iter()
        .map(|h| h.join().expect("filter thread panicked"))
        .collect();

    let applied = outcomes.iter().filter(|o| o.is_redacted()).count();
    assert_eq!(applied, 1, "exactly one pass should commit: {:?}", outcomes);
    assert!(outcomes
        .iter()
        .all(|o| o.is_redacted() || *o == FilterOutcome::AlreadyFiltered));

    let unit = store.load("shared").unwrap();
    assert_eq!(
        unit.current_content(),
        "Bel [PRIVACY_FILTERED_PHONE], BSN [PRIVACY_FILTERED_BSN]"
    );
    assert_eq!(unit.privacy_markers().get(&Category::Phone), Some(&1));
    assert_eq!(unit.original_content(), "Bel 0612345678, BSN 123456789");
}

#[test]
fn test_filter_stored_clean_unit_writes_nothing() {
    let store = MemoryStore::new();
    store.save(FilterableUnit::new("c", "Niets bijzonders")).unwrap();

    let outcome = FilterOrchestrator::default()
        .filter_stored(&store, "c")
        .unwrap();

    assert_eq!(outcome, FilterOutcome::Clean);
    assert!(!store.load("c").unwrap().contains_privacy_info());
}

#[test]
fn test_filter_stored_missing_unit() {
    let store = MemoryStore::new();
    assert!(FilterOrchestrator::default()
        .filter_stored(&store, "ontbreekt")
        .is_err());
}

#[test]
fn test_restore_stored_then_refilter() {
    let store = MemoryStore::new();
    store
        .save(FilterableUnit::new("r", "Postcode 1234 AB, IBAN NL91ABNA0417164300"))
        .unwrap();
    let orchestrator = FilterOrchestrator::default();

    orchestrator.filter_stored(&store, "r").unwrap();
    let markers = store.load("r").unwrap().privacy_markers().clone();

    assert!(orchestrator.restore_stored(&store, "r").unwrap());
    assert!(!orchestrator.restore_stored(&store, "r").unwrap());
    let restored = store.load("r").unwrap();
    assert_eq!(
        restored.current_content(),
        "Postcode 1234 AB, IBAN NL91ABNA0417164300"
    );
    assert!(!restored.contains_privacy_info());

    assert!(orchestrator.filter_stored(&store, "r").unwrap().is_redacted());
    assert_eq!(store.load("r").unwrap().privacy_markers(), &markers);
}
