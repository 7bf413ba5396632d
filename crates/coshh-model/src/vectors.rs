//! Fixed-width boolean vectors describing a chemical's classification.
//!
//! Slot order is load-bearing: the ticks reference document aligns its rows
//! by the same indices, so the mappings here must match the splice order in
//! the row assembler exactly.

/// Number of exposure-route slots.
pub const EXPOSURE_ROUTE_SLOTS: usize = 4;

/// Number of control-measure slots. Slot 1 is reserved and never set.
pub const CONTROL_MEASURE_SLOTS: usize = 9;

/// Bodily pathway by which a hazardous substance may cause harm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposureRoute {
    Eye,
    Skin,
    Inhalation,
    Ingestion,
}

impl ExposureRoute {
    pub const ALL: [Self; EXPOSURE_ROUTE_SLOTS] =
        [Self::Eye, Self::Skin, Self::Inhalation, Self::Ingestion];

    /// Slot index in the exposure-route vector.
    #[must_use]
    pub fn slot(self) -> usize {
        match self {
            Self::Eye => 0,
            Self::Skin => 1,
            Self::Inhalation => 2,
            Self::Ingestion => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Eye => "eye",
            Self::Skin => "skin",
            Self::Inhalation => "inhalation",
            Self::Ingestion => "ingestion",
        }
    }
}

/// Mitigation category required by a chemical's hazard profile.
///
/// There is no variant for slot 1 (reserved, always false) or slot 2 (the
/// baseline measure, always true); neither is ever toggled by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMeasure {
    Spill,
    Flame,
    TemperatureControl,
    PregnancyWarning,
    WaterReactivity,
    DropwiseAddition,
    AirSensitivity,
}

impl ControlMeasure {
    pub const ALL: [Self; 7] = [
        Self::Spill,
        Self::Flame,
        Self::TemperatureControl,
        Self::PregnancyWarning,
        Self::WaterReactivity,
        Self::DropwiseAddition,
        Self::AirSensitivity,
    ];

    /// Slot index in the control-measure vector.
    #[must_use]
    pub fn slot(self) -> usize {
        match self {
            Self::Spill => 0,
            Self::Flame => 3,
            Self::TemperatureControl => 4,
            Self::PregnancyWarning => 5,
            Self::WaterReactivity => 6,
            Self::DropwiseAddition => 7,
            Self::AirSensitivity => 8,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Spill => "spill",
            Self::Flame => "flame",
            Self::TemperatureControl => "temperature-control",
            Self::PregnancyWarning => "pregnancy-warning",
            Self::WaterReactivity => "water-reactivity",
            Self::DropwiseAddition => "dropwise-addition",
            Self::AirSensitivity => "air-sensitivity",
        }
    }
}

/// Ordered vector of exposure-route flags {eye, skin, inhalation, ingestion}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExposureRoutes([bool; EXPOSURE_ROUTE_SLOTS]);

impl ExposureRoutes {
    pub fn set(&mut self, route: ExposureRoute) {
        self.0[route.slot()] = true;
    }

    #[must_use]
    pub fn applies(&self, route: ExposureRoute) -> bool {
        self.0[route.slot()]
    }

    /// Flags in slot order, for index-aligned rendering.
    #[must_use]
    pub fn slots(&self) -> [bool; EXPOSURE_ROUTE_SLOTS] {
        self.0
    }
}

/// Ordered vector of control-measure flags.
///
/// Slot 2 (the general baseline measure) is true for every chemical, set at
/// construction. Slot 1 is a reserved placeholder and stays false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlMeasures([bool; CONTROL_MEASURE_SLOTS]);

impl Default for ControlMeasures {
    fn default() -> Self {
        let mut slots = [false; CONTROL_MEASURE_SLOTS];
        slots[Self::BASELINE_SLOT] = true;
        Self(slots)
    }
}

impl ControlMeasures {
    /// Slot of the general measure every chemical receives.
    pub const BASELINE_SLOT: usize = 2;

    pub fn set(&mut self, measure: ControlMeasure) {
        self.0[measure.slot()] = true;
    }

    #[must_use]
    pub fn requires(&self, measure: ControlMeasure) -> bool {
        self.0[measure.slot()]
    }

    /// Flags in slot order, for index-aligned rendering.
    #[must_use]
    pub fn slots(&self) -> [bool; CONTROL_MEASURE_SLOTS] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_slots_cover_the_vector_once() {
        let mut seen = [false; EXPOSURE_ROUTE_SLOTS];
        for route in ExposureRoute::ALL {
            assert!(!seen[route.slot()]);
            seen[route.slot()] = true;
        }
        assert!(seen.iter().all(|slot| *slot));
    }

    #[test]
    fn measure_slots_skip_reserved_and_baseline() {
        let slots: Vec<usize> = ControlMeasure::ALL.iter().map(|m| m.slot()).collect();
        assert_eq!(slots, vec![0, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn setting_every_measure_leaves_reserved_clear() {
        let mut measures = ControlMeasures::default();
        for measure in ControlMeasure::ALL {
            measures.set(measure);
        }
        let slots = measures.slots();
        assert!(!slots[1]);
        assert!(slots.iter().enumerate().all(|(i, set)| *set || i == 1));
    }
}
