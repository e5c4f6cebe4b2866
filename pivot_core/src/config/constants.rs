//! Engine constants configuration

use crate::pivot::constants::{EASY_BELOW, HARD_ABOVE, MAX_SUBSTAT};
use serde::{Deserialize, Serialize};

/// Tunable balance constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConstants {
    /// Best substat roll an item can have, in percent
    #[serde(default = "default_max_substat")]
    pub max_substat: f64,
    /// Pivots strictly below this are easy
    #[serde(default = "default_easy_below")]
    pub easy_below: f64,
    /// Pivots strictly above this are hard
    #[serde(default = "default_hard_above")]
    pub hard_above: f64,
}

impl Default for EngineConstants {
    fn default() -> Self {
        EngineConstants {
            max_substat: MAX_SUBSTAT,
            easy_below: EASY_BELOW,
            hard_above: HARD_ABOVE,
        }
    }
}

impl EngineConstants {
    /// Check that the constants describe a usable balance
    pub fn validate(&self) -> Result<(), String> {
        if !(self.max_substat.is_finite() && self.max_substat > 0.0) {
            return Err(format!("max_substat must be positive, got {}", self.max_substat));
        }
        if !(self.easy_below.is_finite() && self.hard_above.is_finite()) {
            return Err("difficulty thresholds must be finite".to_string());
        }
        if self.easy_below > self.hard_above {
            return Err(format!(
                "easy_below ({}) must not exceed hard_above ({})",
                self.easy_below, self.hard_above
            ));
        }
        Ok(())
    }
}

fn default_max_substat() -> f64 {
    MAX_SUBSTAT
}
fn default_easy_below() -> f64 {
    EASY_BELOW
}
fn default_hard_above() -> f64 {
    HARD_ABOVE
}
