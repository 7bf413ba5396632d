//! Rule-based classification of GHS hazard codes.
//!
//! Maps an unordered set of hazard-statement codes to the two fixed-width
//! vectors a COSHH row is rendered from: which exposure routes apply and
//! which control measures are required.

pub mod triggers;

use tracing::debug;

use coshh_model::{Classification, HazardCodeSet, collect_codes};

use crate::triggers::{MEASURE_TRIGGERS, ROUTE_TRIGGERS};

/// Classify one chemical's newline-separated hazard text.
///
/// Empty text, or text whose first character is `N` ("not classified"), short
/// circuits to the default result without any parsing. Otherwise every line
/// contributes at most one code to the set, and each trigger table is tested
/// for intersection with it. Never fails; malformed lines are dropped.
#[must_use]
pub fn classify(hazard_text: &str) -> Classification {
    if hazard_text.is_empty() || hazard_text.starts_with('N') {
        return Classification::default();
    }

    let codes = collect_codes(hazard_text);
    let mut classification = Classification::default();

    for (measure, trigger_codes) in MEASURE_TRIGGERS {
        if intersects(&codes, trigger_codes) {
            classification.measures.set(measure);
        }
    }
    for (route, trigger_codes) in ROUTE_TRIGGERS {
        if intersects(&codes, trigger_codes) {
            classification.routes.set(route);
        }
    }

    debug!(
        codes = codes.len(),
        routes = ?classification.routes.slots(),
        measures = ?classification.measures.slots(),
        "classified hazard text"
    );
    classification
}

fn intersects(codes: &HazardCodeSet, trigger_codes: &[u16]) -> bool {
    codes.iter().any(|code| trigger_codes.contains(&code.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use coshh_model::{ControlMeasure, ExposureRoute};

    #[test]
    fn corrosive_acid_triggers_the_eye_route() {
        let classification = classify("314");
        assert!(classification.routes.applies(ExposureRoute::Eye));
        assert!(!classification.routes.applies(ExposureRoute::Skin));
        assert!(!classification.routes.applies(ExposureRoute::Inhalation));
        assert!(!classification.measures.requires(ControlMeasure::Flame));
    }

    #[test]
    fn one_code_may_fire_several_categories() {
        // 304 sits in both the spill and inhalation trigger sets
        let classification = classify("304");
        assert!(classification.measures.requires(ControlMeasure::Spill));
        assert!(classification.routes.applies(ExposureRoute::Inhalation));
        assert!(!classification.routes.applies(ExposureRoute::Ingestion));
    }
}
