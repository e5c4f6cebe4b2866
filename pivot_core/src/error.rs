//! Input errors raised before any calculation runs

use thiserror::Error;

/// Invalid caller input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PivotError {
    #[error("Base stat must be positive, got {0}")]
    NonPositiveBaseStat(i64),
    #[error("Invalid base stat '{0}': expected a whole number of 2 to 8 digits")]
    InvalidBaseStat(String),
    #[error("Item quality {value}% is outside 0..={max}")]
    QualityOutOfRange { value: f64, max: f64 },
    #[error("Substat roll {value}% is outside 0..={max}")]
    RollOutOfRange { value: f64, max: f64 },
    #[error("Unknown gear slot: {0}")]
    UnknownSlot(String),
}
