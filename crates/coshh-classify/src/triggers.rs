//! Static trigger tables: hazard-category name to the GHS codes that fire it.
//!
//! The tables are read-only constants shared by every classification; they
//! are never rebuilt per call. Trigger sets overlap deliberately (one code
//! may require several measures at once).

use coshh_model::{ControlMeasure, ExposureRoute};

const SPILL: &[u16] = &[
    200, 201, 202, 203, 204, 205, 206, 207, 208, 230, 231, 232, 250, 251, 300, 301, 304, 310, 311,
    330, 331, 340,
];

const FLAME: &[u16] = &[
    200, 201, 202, 203, 204, 205, 206, 207, 208, 220, 221, 222, 223, 224, 225, 226, 227, 228, 229,
    230, 231, 232, 240, 241, 242, 251, 252, 270, 271, 272,
];

const TEMPERATURE_CONTROL: &[u16] = &[
    200, 201, 202, 203, 204, 205, 206, 207, 208, 225, 226, 227, 228, 230, 231, 270, 271, 272, 280,
];

const PREGNANCY_WARNING: &[u16] = &[360, 361, 362];

const WATER_REACTIVITY: &[u16] = &[261, 262];

const DROPWISE_ADDITION: &[u16] = &[261, 262, 270, 271, 272];

const AIR_SENSITIVITY: &[u16] = &[230, 231, 232, 250];

const EYE: &[u16] = &[314, 318, 319];

const SKIN: &[u16] = &[310, 311, 312, 315, 317];

const INHALATION: &[u16] = &[304, 330, 331, 332, 334, 335, 336];

const INGESTION: &[u16] = &[300, 301, 302];

/// Control-measure categories in slot order, paired with their trigger codes.
pub const MEASURE_TRIGGERS: [(ControlMeasure, &[u16]); 7] = [
    (ControlMeasure::Spill, SPILL),
    (ControlMeasure::Flame, FLAME),
    (ControlMeasure::TemperatureControl, TEMPERATURE_CONTROL),
    (ControlMeasure::PregnancyWarning, PREGNANCY_WARNING),
    (ControlMeasure::WaterReactivity, WATER_REACTIVITY),
    (ControlMeasure::DropwiseAddition, DROPWISE_ADDITION),
    (ControlMeasure::AirSensitivity, AIR_SENSITIVITY),
];

/// Exposure-route categories in slot order, paired with their trigger codes.
pub const ROUTE_TRIGGERS: [(ExposureRoute, &[u16]); 4] = [
    (ExposureRoute::Eye, EYE),
    (ExposureRoute::Skin, SKIN),
    (ExposureRoute::Inhalation, INHALATION),
    (ExposureRoute::Ingestion, INGESTION),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_tables_follow_slot_order() {
        let measure_slots: Vec<usize> =
            MEASURE_TRIGGERS.iter().map(|(m, _)| m.slot()).collect();
        assert!(measure_slots.windows(2).all(|pair| pair[0] < pair[1]));

        let route_slots: Vec<usize> = ROUTE_TRIGGERS.iter().map(|(r, _)| r.slot()).collect();
        assert_eq!(route_slots, vec![0, 1, 2, 3]);
    }

    #[test]
    fn trigger_sets_hold_no_duplicates() {
        fn assert_unique(codes: &[u16]) {
            let mut seen = std::collections::BTreeSet::new();
            assert!(codes.iter().all(|code| seen.insert(code)));
        }
        for (_, codes) in MEASURE_TRIGGERS {
            assert_unique(codes);
        }
        for (_, codes) in ROUTE_TRIGGERS {
            assert_unique(codes);
        }
    }
}
