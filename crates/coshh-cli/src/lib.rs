//! CLI library components for the COSHH form generator.

pub mod generate;
pub mod logging;
