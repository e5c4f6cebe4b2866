//! Difficulty classification of a pivot roll
//!
//! - pivot < 10: easy, the rare item wins even with a weak roll
//! - 10 <= pivot <= 13.5: medium, the rare item needs a decent roll
//! - pivot > 13.5: hard, keep the maxed common item unless the rare roll is near perfect

use super::constants::{EASY_BELOW, HARD_ABOVE};
use crate::config::EngineConstants;
use crate::types::Difficulty;

/// Classify a pivot with the default thresholds
pub fn classify(pivot_percent: f64) -> Difficulty {
    classify_between(pivot_percent, EASY_BELOW, HARD_ABOVE)
}

/// Classify a pivot with configured thresholds
pub fn classify_with(pivot_percent: f64, constants: &EngineConstants) -> Difficulty {
    classify_between(pivot_percent, constants.easy_below, constants.hard_above)
}

fn classify_between(pivot_percent: f64, easy_below: f64, hard_above: f64) -> Difficulty {
    if pivot_percent > hard_above {
        Difficulty::Hard
    } else if pivot_percent < easy_below {
        Difficulty::Easy
    } else {
        Difficulty::Medium
    }
}
