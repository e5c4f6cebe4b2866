//! Pivot engine - break-even substat rolls between a maxed common item and a rare item

mod difficulty;
mod legacy;
mod precise;

pub use difficulty::{classify, classify_with};
pub use legacy::legacy_pivot;
pub use precise::{precise_pivot, PivotResult};

use crate::compare::{self, CandidateComparison, IncumbentComparison};
use crate::config::{EngineConstants, PivotConfig};
use crate::gear::{GearTable, SlotProfile};
use crate::types::{Difficulty, GearSlot, PivotStrategy};

/// Pivot calculation constants
pub mod constants {
    /// Best substat roll an item can have, in percent
    pub const MAX_SUBSTAT: f64 = 15.0;

    /// Pivots strictly below this are easy
    pub const EASY_BELOW: f64 = 10.0;

    /// Pivots strictly above this are hard
    pub const HARD_ABOVE: f64 = 13.5;
}

/// Round a percentage to 2 decimal places
pub fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Stat amounts are snapped to millionths before whole-unit rounding
const STAT_SNAP_SCALE: f64 = 1_000_000.0;

/// Round an absolute stat amount to the nearest whole unit
///
/// Values within half a millionth of a half count as the half, so float error on an
/// exact `x.5` total cannot round the other way. Anything further from the
/// half, such as `x.496`, rounds to the nearest unit as usual.
pub fn round_stat(value: f64) -> f64 {
    let snapped = (value * STAT_SNAP_SCALE).round() / STAT_SNAP_SCALE;
    snapped.round()
}

/// Stateless calculator bound to one gear table and set of constants
///
/// None of these methods validate their inputs; see
/// [`PivotCalculator`](crate::calculator::PivotCalculator) for the checked API.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PivotEngine {
    table: GearTable,
    constants: EngineConstants,
}

impl PivotEngine {
    /// Create an engine from a table and constants
    pub fn new(table: GearTable, constants: EngineConstants) -> Self {
        PivotEngine { table, constants }
    }

    /// Create an engine from loaded configuration
    pub fn from_config(config: PivotConfig) -> Self {
        PivotEngine::new(config.table, config.constants)
    }

    pub fn table(&self) -> &GearTable {
        &self.table
    }

    pub fn constants(&self) -> &EngineConstants {
        &self.constants
    }

    pub fn profile(&self, slot: GearSlot) -> &SlotProfile {
        self.table.profile(slot)
    }

    /// Legacy flat-delta pivot. A zero base stat yields 0.
    pub fn legacy_pivot(&self, slot: GearSlot, base_stat: f64) -> f64 {
        legacy_pivot(self.profile(slot), base_stat, self.constants.max_substat)
    }

    /// Exact break-even roll for a rare item of the given quality
    pub fn pivot(&self, slot: GearSlot, candidate_quality: f64, base_stat: f64) -> PivotResult {
        precise_pivot(
            slot,
            self.profile(slot),
            candidate_quality,
            base_stat,
            self.constants.max_substat,
        )
    }

    /// Pivot percentage under either strategy
    ///
    /// `candidate_quality` is ignored by the legacy strategy, which always
    /// assumes a rare item at its flat cap.
    pub fn pivot_with(
        &self,
        strategy: PivotStrategy,
        slot: GearSlot,
        candidate_quality: f64,
        base_stat: f64,
    ) -> f64 {
        match strategy {
            PivotStrategy::Legacy => self.legacy_pivot(slot, base_stat),
            PivotStrategy::Precise => self.pivot(slot, candidate_quality, base_stat).pivot_percent,
        }
    }

    /// Classify a pivot against this engine's thresholds
    pub fn classify(&self, pivot_percent: f64) -> Difficulty {
        classify_with(pivot_percent, &self.constants)
    }

    /// Whether a pivot can be reached by any roll
    pub fn is_feasible(&self, pivot_percent: f64) -> bool {
        pivot_percent <= self.constants.max_substat
    }

    /// Compare a rare item's current roll against its pivot
    pub fn compare_to_incumbent(
        &self,
        result: &PivotResult,
        current_roll: f64,
    ) -> IncumbentComparison {
        compare::compare_to_incumbent(result, current_roll)
    }

    /// Rank two rare items of the same slot by total stat
    pub fn compare_candidates(
        &self,
        slot: GearSlot,
        base_stat: f64,
        quality_a: f64,
        quality_b: f64,
    ) -> CandidateComparison {
        compare::compare_candidates(self.profile(slot), base_stat, quality_a, quality_b)
    }
}
