//! SlotProfile - Flat bonus caps for one slot

use crate::types::GoverningAttribute;
use serde::{Deserialize, Serialize};

/// Flat stat bonus caps for the two competing tiers of a slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotProfile {
    /// Flat bonus of a maxed common-tier item
    pub common_flat: f64,
    /// Flat bonus of a rare-tier item at 100% quality
    pub rare_flat: f64,
    /// Attribute the bonus applies to
    pub attribute: GoverningAttribute,
}

impl SlotProfile {
    /// Create a new profile (unvalidated)
    pub fn new(common_flat: f64, rare_flat: f64, attribute: GoverningAttribute) -> Self {
        SlotProfile {
            common_flat,
            rare_flat,
            attribute,
        }
    }

    pub(crate) fn placeholder() -> Self {
        SlotProfile::new(0.0, 0.0, GoverningAttribute::Hp)
    }

    /// Gap between the rare and common flat caps
    pub fn flat_delta(&self) -> f64 {
        self.rare_flat - self.common_flat
    }

    /// Flat bonus of a rare item at the given quality (0-100)
    pub fn rare_flat_at(&self, quality_percent: f64) -> f64 {
        self.rare_flat * quality_percent / 100.0
    }

    /// Check `rare_flat > common_flat > 0`
    pub fn validate(&self) -> Result<(), String> {
        if !self.common_flat.is_finite() || !self.rare_flat.is_finite() {
            return Err("flat values must be finite".to_string());
        }
        if self.common_flat <= 0.0 {
            return Err(format!("common_flat must be positive, got {}", self.common_flat));
        }
        if self.rare_flat <= self.common_flat {
            return Err(format!(
                "rare_flat ({}) must exceed common_flat ({})",
                self.rare_flat, self.common_flat
            ));
        }
        Ok(())
    }
}
