//! Tests for coshh-model types.

use coshh_model::{ChemicalRecord, Classification, ControlMeasures, HazardCode, collect_codes};

#[test]
fn record_deserializes_from_submission_json() {
    let json = r#"{"name": "Acetone", "amount": "250 mL", "hazards": ["H225", "319", "336"]}"#;
    let record: ChemicalRecord = serde_json::from_str(json).expect("deserialize record");
    assert_eq!(record.name, "Acetone");
    assert_eq!(record.amount, "250 mL");
    assert_eq!(record.hazard_text(), "H225\n319\n336");
}

#[test]
fn record_tolerates_missing_hazards_field() {
    let json = r#"{"name": "Water", "amount": "1 L"}"#;
    let record: ChemicalRecord = serde_json::from_str(json).expect("deserialize record");
    assert!(record.hazards.is_empty());
    assert_eq!(record.hazard_text(), "");
}

#[test]
fn record_round_trips() {
    let record = ChemicalRecord {
        name: "Sodium".to_string(),
        amount: "5 g".to_string(),
        hazards: vec!["260".to_string(), "314".to_string()],
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: ChemicalRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn default_classification_is_the_no_hazard_result() {
    let classification = Classification::default();
    assert_eq!(classification.routes.slots(), [false; 4]);
    let measures = classification.measures.slots();
    assert_eq!(measures.len(), 9);
    assert!(measures[ControlMeasures::BASELINE_SLOT]);
    assert_eq!(measures.iter().filter(|set| **set).count(), 1);
}

#[test]
fn code_collection_is_order_and_duplicate_insensitive() {
    let forward = collect_codes("200\n314\n304");
    let shuffled = collect_codes("304\n200\n314\n200");
    assert_eq!(forward, shuffled);
    assert!(forward.contains(&HazardCode(304)));
}
