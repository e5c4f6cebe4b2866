//! pivot_core - Break-even calculator for common vs rare gear rolls
//!
//! This library provides:
//! - GearTable: Validated flat bonus caps per equipment slot
//! - PivotEngine: Legacy and precise pivot formulas, difficulty classification
//! - Comparators: A current roll against its pivot, or two rare items against each other
//! - PivotCalculator: Checked entry point with logging and injected usage recording

pub mod calculator;
pub mod compare;
pub mod config;
pub mod error;
pub mod gear;
pub mod input;
pub mod pivot;
pub mod prelude;
pub mod types;
pub mod usage;

// Re-export core types for convenience
pub use calculator::{PivotCalculator, PivotVerdict};
pub use compare::{CandidateComparison, IncumbentComparison, RollStanding, Winner};
pub use config::{ConfigError, EngineConstants, PivotConfig};
pub use error::PivotError;
pub use gear::{GearTable, SlotProfile};
pub use input::BaseStat;
pub use pivot::constants::MAX_SUBSTAT;
pub use pivot::{classify, PivotEngine, PivotResult};
pub use types::{Difficulty, GearSlot, GoverningAttribute, PivotStrategy};
pub use usage::{NoopRecorder, TracingRecorder, UsageCounter, UsageRecorder};
