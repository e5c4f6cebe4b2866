//! Precise pivot - exact break-even against a maxed common item
//!
//! The common item is assumed maxed: full flat bonus plus a MAX_SUBSTAT roll.
//! Substat percentages always scale off the base stat, never off the item's
//! own flat bonus.
//!
//! ```text
//! incumbent = base + common_flat + base * MAX_SUBSTAT / 100
//! candidate = base + rare_flat * quality / 100 + base * roll / 100
//! pivot     = (incumbent - base - rare_flat * quality / 100) / base * 100
//! ```

use super::{round_percent, round_stat};
use crate::gear::SlotProfile;
use crate::types::GearSlot;
use serde::{Deserialize, Serialize};

/// Break-even point of a rare item against a maxed common item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotResult {
    pub slot: GearSlot,
    /// Character attribute without gear
    pub base_stat: f64,
    /// Rare item flat quality, 0-100
    pub candidate_quality: f64,
    /// Flat bonus the rare item actually gives
    pub candidate_flat: f64,
    /// Roll the rare item needs to tie, rounded to 2 decimals
    pub pivot_percent: f64,
    /// Whether the pivot is reachable (pivot <= MAX_SUBSTAT)
    pub feasible: bool,
    /// Total stat with the maxed common item, whole units
    pub incumbent_total: f64,
    /// Total stat with the rare item rolled exactly at the pivot, whole units
    pub candidate_total_at_pivot: f64,
}

impl PivotResult {
    /// Unrounded total stat with the rare item at a given roll
    pub fn candidate_total_at(&self, roll_percent: f64) -> f64 {
        self.base_stat + self.candidate_flat + self.base_stat * roll_percent / 100.0
    }
}

/// Calculate the exact pivot for a rare item of the given quality
///
/// `base_stat` must be positive; callers validate before calling.
pub fn precise_pivot(
    slot: GearSlot,
    profile: &SlotProfile,
    candidate_quality: f64,
    base_stat: f64,
    max_substat: f64,
) -> PivotResult {
    let incumbent_total = base_stat + profile.common_flat + base_stat * max_substat / 100.0;
    let candidate_flat = profile.rare_flat_at(candidate_quality);

    let raw_pivot = (incumbent_total - base_stat - candidate_flat) / base_stat * 100.0;
    let pivot_percent = round_percent(raw_pivot);

    let candidate_total_at_pivot = base_stat + candidate_flat + base_stat * raw_pivot / 100.0;

    PivotResult {
        slot,
        base_stat,
        candidate_quality,
        candidate_flat,
        pivot_percent,
        feasible: pivot_percent <= max_substat,
        incumbent_total: round_stat(incumbent_total),
        candidate_total_at_pivot: round_stat(candidate_total_at_pivot),
    }
}
