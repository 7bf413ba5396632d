//! Behavioral tests for the hazard-code classifier.

use coshh_classify::classify;
use coshh_model::{Classification, ControlMeasures};
use proptest::prelude::*;

fn set_slots<const N: usize>(slots: [bool; N]) -> Vec<usize> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, set)| set.then_some(i))
        .collect()
}

#[test]
fn empty_text_yields_defaults() {
    assert_eq!(classify(""), Classification::default());
}

#[test]
fn not_classified_marker_yields_defaults() {
    assert_eq!(classify("Not classified"), Classification::default());
    assert_eq!(classify("N/A"), Classification::default());
    // the marker also suppresses parseable lines that follow
    assert_eq!(classify("N\n314"), Classification::default());
}

#[test]
fn defaults_keep_only_the_baseline_measure() {
    let classification = classify("");
    assert_eq!(set_slots(classification.routes.slots()), Vec::<usize>::new());
    assert_eq!(
        set_slots(classification.measures.slots()),
        vec![ControlMeasures::BASELINE_SLOT]
    );
}

#[test]
fn explosive_plus_corrosive_example() {
    let classification = classify("200\n314");
    assert_eq!(set_slots(classification.measures.slots()), vec![0, 2, 3, 4]);
    assert_eq!(set_slots(classification.routes.slots()), vec![0]);
}

#[test]
fn aspiration_hazard_example() {
    let classification = classify("304");
    assert_eq!(set_slots(classification.measures.slots()), vec![0, 2]);
    assert_eq!(set_slots(classification.routes.slots()), vec![2]);
}

#[test]
fn leading_letter_forms_classify_like_bare_codes() {
    assert_eq!(classify("H314"), classify("314"));
    assert_eq!(classify("H225\nH319"), classify("225\n319"));
}

#[test]
fn malformed_lines_do_not_disturb_valid_ones() {
    assert_eq!(classify("garbage\n314\n???"), classify("314"));
}

#[test]
fn oversized_numeric_line_triggers_nothing() {
    // the embedded digits 314 must not leak out of a larger number
    assert_eq!(classify("131400"), Classification::default());
    assert_eq!(classify("131400\n225"), classify("225"));
}

#[test]
fn all_garbage_text_yields_defaults() {
    assert_eq!(classify("garbage\nmore garbage"), Classification::default());
}

#[test]
fn duplicates_collapse() {
    assert_eq!(classify("314\n314"), classify("314"));
}

#[test]
fn vector_widths_are_fixed() {
    for text in ["", "N", "314", "200\n261\n360\n230"] {
        let classification = classify(text);
        assert_eq!(classification.routes.slots().len(), 4);
        assert_eq!(classification.measures.slots().len(), 9);
        assert!(!classification.measures.slots()[1]);
        assert!(classification.measures.slots()[2]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn classification_is_line_order_independent(
        lines in prop::collection::vec("(H?[0-9]{3})|junk", 1..8),
    ) {
        let forward = classify(&lines.join("\n"));
        let mut reversed_lines = lines.clone();
        reversed_lines.reverse();
        let reversed = classify(&reversed_lines.join("\n"));
        prop_assert_eq!(forward, reversed);
    }

    #[test]
    fn repeating_lines_changes_nothing(lines in prop::collection::vec("H?[0-9]{3}", 1..6)) {
        let once = classify(&lines.join("\n"));
        let mut doubled = lines.clone();
        doubled.extend(lines.iter().cloned());
        let twice = classify(&doubled.join("\n"));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn baseline_invariants_hold_for_arbitrary_text(text in "[ -~\n]{0,64}") {
        let classification = classify(&text);
        let measures = classification.measures.slots();
        prop_assert!(!measures[1]);
        prop_assert!(measures[2]);
    }
}
