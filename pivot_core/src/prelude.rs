//! Prelude module for convenient imports
//!
//! ```rust
//! use pivot_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Difficulty, GearSlot, GoverningAttribute, PivotStrategy};
pub use crate::input::BaseStat;
pub use crate::error::PivotError;

// Engine
pub use crate::gear::{GearTable, SlotProfile};
pub use crate::pivot::{classify, PivotEngine, PivotResult};

// Comparators
pub use crate::compare::{CandidateComparison, IncumbentComparison, RollStanding, Winner};

// Checked API
pub use crate::calculator::{PivotCalculator, PivotVerdict};
pub use crate::usage::{UsageCounter, UsageRecorder};

// Config
pub use crate::config::{default_pivot_config, load_pivot_config, EngineConstants};
