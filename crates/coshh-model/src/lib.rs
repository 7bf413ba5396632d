pub mod hazard;
pub mod record;
pub mod vectors;

pub use hazard::{HazardCode, HazardCodeSet, collect_codes};
pub use record::{ChemicalRecord, Classification};
pub use vectors::{
    CONTROL_MEASURE_SLOTS, ControlMeasure, ControlMeasures, EXPOSURE_ROUTE_SLOTS, ExposureRoute,
    ExposureRoutes,
};
