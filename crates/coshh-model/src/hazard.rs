//! GHS hazard statement codes and code sets.

use std::collections::BTreeSet;
use std::fmt;

/// Numeric suffix of a GHS H-statement (e.g. 314 for H314).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HazardCode(pub u16);

impl HazardCode {
    /// Extract a hazard code from one line of free-text hazard data.
    ///
    /// The whole trimmed line is tried first as a bare number; a numeric line
    /// is always consumed here, and a value outside the statement-code range
    /// is dropped rather than re-read through the fallback. Only non-numeric
    /// lines fall back to up to three characters starting at offset 1, which
    /// tolerates a leading classification letter (`H314` -> 314). Lines that
    /// yield neither are discarded by returning `None`.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        if let Ok(code) = line.trim().parse::<i64>() {
            return u16::try_from(code).ok().map(Self);
        }
        let tail: String = line.chars().skip(1).take(3).collect();
        tail.trim().parse::<u16>().ok().map(Self)
    }

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for HazardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

/// Unique hazard codes accumulated from all lines of one chemical's hazard
/// text. Order and duplicates are irrelevant to classification.
pub type HazardCodeSet = BTreeSet<HazardCode>;

/// Collect the hazard-code set from newline-separated hazard text.
///
/// Malformed lines never fail the whole collection; they are skipped.
#[must_use]
pub fn collect_codes(hazard_text: &str) -> HazardCodeSet {
    hazard_text.lines().filter_map(HazardCode::parse_line).collect()
}
