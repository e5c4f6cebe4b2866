//! Incumbent comparison - is a rare item's current roll already past its pivot?

use crate::pivot::{round_percent, round_stat, PivotResult};
use serde::{Deserialize, Serialize};

/// Where a rare item stands against the maxed common item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollStanding {
    /// Current roll meets or beats the pivot
    Ahead,
    /// Current roll is short of the pivot
    Behind,
}

/// Outcome of comparing a current roll against a pivot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncumbentComparison {
    pub standing: RollStanding,
    /// Roll surplus (ahead) or roll still needed (behind), 2 decimals
    pub margin_percent: f64,
    /// Stat surplus (ahead) or stat still missing (behind), whole units
    pub margin_absolute: f64,
}

impl IncumbentComparison {
    pub fn is_ahead(&self) -> bool {
        self.standing == RollStanding::Ahead
    }
}

/// Compare a rare item's current roll against its pivot
///
/// A roll exactly on the pivot counts as ahead with a zero margin. Margins
/// are magnitudes and never negative.
pub fn compare_to_incumbent(result: &PivotResult, current_roll: f64) -> IncumbentComparison {
    let candidate_total = round_stat(result.candidate_total_at(current_roll));

    if current_roll >= result.pivot_percent {
        IncumbentComparison {
            standing: RollStanding::Ahead,
            margin_percent: round_percent(current_roll - result.pivot_percent).max(0.0),
            margin_absolute: (candidate_total - result.incumbent_total).max(0.0),
        }
    } else {
        IncumbentComparison {
            standing: RollStanding::Behind,
            margin_percent: round_percent(result.pivot_percent - current_roll).max(0.0),
            margin_absolute: (result.incumbent_total - candidate_total).max(0.0),
        }
    }
}
