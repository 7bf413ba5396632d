//! Submission payload records and classification results.

use serde::{Deserialize, Serialize};

use crate::vectors::{ControlMeasures, ExposureRoutes};

/// One chemical as submitted by the request layer.
///
/// `amount` is free text including its unit ("50 mL"); `hazards` holds the
/// raw hazard-statement lines exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalRecord {
    pub name: String,
    pub amount: String,
    #[serde(default)]
    pub hazards: Vec<String>,
}

impl ChemicalRecord {
    /// Hazard lines joined with newlines, the form the classifier consumes
    /// and the form printed verbatim into the document's hazard cell.
    #[must_use]
    pub fn hazard_text(&self) -> String {
        self.hazards.join("\n")
    }
}

/// Result of classifying one chemical's hazard codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub routes: ExposureRoutes,
    pub measures: ControlMeasures,
}
