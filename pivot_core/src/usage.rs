//! Usage recording - injected, never global
//!
//! The calculator reports each successful operation to a [`UsageRecorder`].
//! Pick [`NoopRecorder`] to record nothing, [`TracingRecorder`] to emit log
//! events, or [`UsageCounter`] to keep in-process counts.

use crate::types::GearSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Mutex;

/// Calculator operation being recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    LegacyPivot,
    PrecisePivot,
    CompareIncumbent,
    CompareCandidates,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::LegacyPivot => f.pad("legacy_pivot"),
            Operation::PrecisePivot => f.pad("precise_pivot"),
            Operation::CompareIncumbent => f.pad("compare_incumbent"),
            Operation::CompareCandidates => f.pad("compare_candidates"),
        }
    }
}

/// One recorded calculator call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsageEvent {
    pub operation: Operation,
    pub slot: GearSlot,
}

impl UsageEvent {
    pub fn new(operation: Operation, slot: GearSlot) -> Self {
        UsageEvent { operation, slot }
    }
}

/// Sink for usage events
pub trait UsageRecorder: Send + Sync {
    /// Record one event
    fn record(&self, event: &UsageEvent);
}

impl<R: UsageRecorder + ?Sized> UsageRecorder for &R {
    fn record(&self, event: &UsageEvent) {
        (**self).record(event)
    }
}

impl<R: UsageRecorder + ?Sized> UsageRecorder for std::sync::Arc<R> {
    fn record(&self, event: &UsageEvent) {
        (**self).record(event)
    }
}

/// Records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecorder;

impl UsageRecorder for NoopRecorder {
    fn record(&self, _event: &UsageEvent) {}
}

/// Emits one `tracing` info event per call
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecorder;

impl UsageRecorder for TracingRecorder {
    fn record(&self, event: &UsageEvent) {
        tracing::info!(
            target: "pivot_core::usage",
            operation = %event.operation,
            slot = %event.slot,
            "calculator used"
        );
    }
}

/// Thread-safe in-process usage counts
#[derive(Debug, Default)]
pub struct UsageCounter {
    counts: Mutex<BTreeMap<(Operation, GearSlot), u64>>,
}

impl UsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls of one operation on one slot
    pub fn count(&self, operation: Operation, slot: GearSlot) -> u64 {
        self.with_counts(|counts| counts.get(&(operation, slot)).copied().unwrap_or(0))
    }

    /// Calls of one operation across all slots
    pub fn operation_total(&self, operation: Operation) -> u64 {
        self.with_counts(|counts| {
            counts
                .iter()
                .filter(|((op, _), _)| *op == operation)
                .map(|(_, &n)| n)
                .sum()
        })
    }

    /// All calls per slot, any operation
    pub fn by_slot(&self) -> BTreeMap<GearSlot, u64> {
        self.with_counts(|counts| {
            let mut per_slot: BTreeMap<GearSlot, u64> = BTreeMap::new();
            for (&(_, slot), &n) in counts {
                *per_slot.entry(slot).or_insert(0) += n;
            }
            per_slot
        })
    }

    /// All calls recorded so far
    pub fn total(&self) -> u64 {
        self.with_counts(|counts| counts.values().sum())
    }

    /// Copy of every counter
    pub fn snapshot(&self) -> BTreeMap<(Operation, GearSlot), u64> {
        self.with_counts(|counts| counts.clone())
    }

    /// Clear every counter
    pub fn reset(&self) {
        self.with_counts_mut(|counts| counts.clear());
    }

    fn with_counts<T>(&self, f: impl FnOnce(&BTreeMap<(Operation, GearSlot), u64>) -> T) -> T {
        // A panic while holding the lock cannot leave the map half-updated
        let guard = self.counts.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    fn with_counts_mut<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<(Operation, GearSlot), u64>) -> T,
    ) -> T {
        let mut guard = self.counts.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl UsageRecorder for UsageCounter {
    fn record(&self, event: &UsageEvent) {
        self.with_counts_mut(|counts| {
            *counts.entry((event.operation, event.slot)).or_insert(0) += 1;
        });
    }
}
