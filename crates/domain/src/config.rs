//! Configuration for the synthesis engine

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SLICE_MINUTES, PROVISIONAL_SUMMARY};

/// Configuration for auto-registration behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Length of one registration slice in minutes (default: 60)
    pub slice_minutes: u32,

    /// Summary assigned to synthesized entries until a plan title or a
    /// user confirmation replaces it
    pub provisional_summary: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            slice_minutes: DEFAULT_SLICE_MINUTES,
            provisional_summary: PROVISIONAL_SUMMARY.to_string(),
        }
    }
}
