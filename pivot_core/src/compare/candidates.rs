//! Candidate comparison - rank two rare items of the same slot
//!
//! Each total is `base + rare_flat * quality / 100`. The common item plays no
//! part here.

use crate::gear::SlotProfile;
use crate::pivot::{round_percent, round_stat};
use serde::{Deserialize, Serialize};

/// Which candidate has the higher total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    A,
    B,
    Tie,
}

/// Result of ranking two candidates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateComparison {
    pub winner: Winner,
    /// Total stat with candidate A, whole units
    pub total_a: f64,
    /// Total stat with candidate B, whole units
    pub total_b: f64,
    /// |total_a - total_b|
    pub difference_absolute: f64,
    /// Difference as a percentage of the base stat, 2 decimals
    pub difference_percent: f64,
}

impl CandidateComparison {
    /// Total of the winning candidate (either one on a tie)
    pub fn best_total(&self) -> f64 {
        self.total_a.max(self.total_b)
    }
}

/// Rank two rare items by total stat
///
/// Totals are rounded to whole units before comparing, so items within half
/// a point of each other tie. `base_stat` must be positive.
pub fn compare_candidates(
    profile: &SlotProfile,
    base_stat: f64,
    quality_a: f64,
    quality_b: f64,
) -> CandidateComparison {
    let total_a = round_stat(base_stat + profile.rare_flat_at(quality_a));
    let total_b = round_stat(base_stat + profile.rare_flat_at(quality_b));

    let winner = if total_a > total_b {
        Winner::A
    } else if total_b > total_a {
        Winner::B
    } else {
        Winner::Tie
    };

    let difference_absolute = (total_a - total_b).abs();

    CandidateComparison {
        winner,
        total_a,
        total_b,
        difference_absolute,
        difference_percent: round_percent(difference_absolute / base_stat * 100.0),
    }
}
