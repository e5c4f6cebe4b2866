//! PivotCalculator - validated entry point over the pivot engine
//!
//! The engine functions trust their inputs. This wrapper checks every
//! percentage against its range, takes base stats as [`BaseStat`] so they are
//! always positive, logs the outcome and reports usage to an injected
//! recorder.

use crate::compare::{CandidateComparison, IncumbentComparison};
use crate::error::PivotError;
use crate::input::{validate_quality, validate_roll, BaseStat};
use crate::pivot::{PivotEngine, PivotResult};
use crate::types::{Difficulty, GearSlot, PivotStrategy};
use crate::usage::{NoopRecorder, Operation, UsageEvent, UsageRecorder};
use serde::{Deserialize, Serialize};

/// Pivot and verdict under one strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotVerdict {
    pub strategy: PivotStrategy,
    pub slot: GearSlot,
    pub pivot_percent: f64,
    pub feasible: bool,
    pub difficulty: Difficulty,
}

/// Checked calculator
#[derive(Debug, Default)]
pub struct PivotCalculator<R: UsageRecorder = NoopRecorder> {
    engine: PivotEngine,
    recorder: R,
}

impl PivotCalculator<NoopRecorder> {
    /// Calculator over the bundled gear table that records nothing
    pub fn with_defaults() -> Self {
        PivotCalculator::new(PivotEngine::default(), NoopRecorder)
    }
}

impl<R: UsageRecorder> PivotCalculator<R> {
    pub fn new(engine: PivotEngine, recorder: R) -> Self {
        PivotCalculator { engine, recorder }
    }

    pub fn engine(&self) -> &PivotEngine {
        &self.engine
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    /// Legacy flat-delta pivot
    ///
    /// Never fails: a [`BaseStat`] is always positive and the legacy formula
    /// takes no quality.
    pub fn legacy(&self, slot: GearSlot, base: BaseStat) -> PivotVerdict {
        let pivot_percent = self.engine.legacy_pivot(slot, base.as_f64());
        let verdict = self.verdict(PivotStrategy::Legacy, slot, pivot_percent);

        tracing::debug!(
            %slot,
            base = base.get(),
            pivot = verdict.pivot_percent,
            difficulty = %verdict.difficulty,
            "legacy pivot"
        );
        self.recorder
            .record(&UsageEvent::new(Operation::LegacyPivot, slot));
        verdict
    }

    /// Exact break-even roll for a rare item of the given quality (0-100)
    pub fn precise(
        &self,
        slot: GearSlot,
        quality: f64,
        base: BaseStat,
    ) -> Result<PivotResult, PivotError> {
        let quality = self.checked(validate_quality(quality))?;
        let result = self.engine.pivot(slot, quality, base.as_f64());

        tracing::debug!(
            %slot,
            base = base.get(),
            quality,
            pivot = result.pivot_percent,
            feasible = result.feasible,
            incumbent = result.incumbent_total,
            "precise pivot"
        );
        self.recorder
            .record(&UsageEvent::new(Operation::PrecisePivot, slot));
        Ok(result)
    }

    /// Pivot and difficulty under the chosen strategy
    ///
    /// The quality is validated for both strategies even though the legacy
    /// one ignores it.
    pub fn evaluate(
        &self,
        slot: GearSlot,
        strategy: PivotStrategy,
        quality: f64,
        base: BaseStat,
    ) -> Result<PivotVerdict, PivotError> {
        match strategy {
            PivotStrategy::Legacy => {
                self.checked(validate_quality(quality))?;
                Ok(self.legacy(slot, base))
            }
            PivotStrategy::Precise => {
                let result = self.precise(slot, quality, base)?;
                Ok(self.verdict(PivotStrategy::Precise, slot, result.pivot_percent))
            }
        }
    }

    /// Pivot under both strategies, legacy first
    pub fn evaluate_both(
        &self,
        slot: GearSlot,
        quality: f64,
        base: BaseStat,
    ) -> Result<[PivotVerdict; 2], PivotError> {
        Ok([
            self.evaluate(slot, PivotStrategy::Legacy, quality, base)?,
            self.evaluate(slot, PivotStrategy::Precise, quality, base)?,
        ])
    }

    /// Compare a rare item's current roll (0..=max substat) against its pivot
    pub fn compare_to_incumbent(
        &self,
        result: &PivotResult,
        current_roll: f64,
    ) -> Result<IncumbentComparison, PivotError> {
        let roll = self.checked(validate_roll(
            current_roll,
            self.engine.constants().max_substat,
        ))?;
        let comparison = self.engine.compare_to_incumbent(result, roll);

        tracing::debug!(
            slot = %result.slot,
            roll,
            pivot = result.pivot_percent,
            standing = ?comparison.standing,
            margin = comparison.margin_absolute,
            "incumbent comparison"
        );
        self.recorder
            .record(&UsageEvent::new(Operation::CompareIncumbent, result.slot));
        Ok(comparison)
    }

    /// Rank two rare items of the same slot
    ///
    /// Qualities are item flat qualities in `0..=100`.
    pub fn compare_candidates(
        &self,
        slot: GearSlot,
        base: BaseStat,
        quality_a: f64,
        quality_b: f64,
    ) -> Result<CandidateComparison, PivotError> {
        let quality_a = self.checked(validate_quality(quality_a))?;
        let quality_b = self.checked(validate_quality(quality_b))?;
        let comparison = self
            .engine
            .compare_candidates(slot, base.as_f64(), quality_a, quality_b);

        tracing::debug!(
            %slot,
            base = base.get(),
            winner = ?comparison.winner,
            difference = comparison.difference_percent,
            "candidate comparison"
        );
        self.recorder
            .record(&UsageEvent::new(Operation::CompareCandidates, slot));
        Ok(comparison)
    }

    fn verdict(&self, strategy: PivotStrategy, slot: GearSlot, pivot_percent: f64) -> PivotVerdict {
        PivotVerdict {
            strategy,
            slot,
            pivot_percent,
            feasible: self.engine.is_feasible(pivot_percent),
            difficulty: self.engine.classify(pivot_percent),
        }
    }

    fn checked(&self, value: Result<f64, PivotError>) -> Result<f64, PivotError> {
        value.map_err(|err| {
            tracing::warn!(error = %err, "rejected calculator input");
            err
        })
    }
}
