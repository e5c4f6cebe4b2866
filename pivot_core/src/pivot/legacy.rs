//! Legacy pivot - flat-delta estimate
//!
//! Formula: pivot = MAX_SUBSTAT - (rare_flat - common_flat) / base * 100
//!
//! Treats the rare item's extra flat bonus as if it were worth the same
//! number of substat points, so it only matches the exact break-even for a
//! rare item at its flat cap. Kept as a quick first-order estimate.

use super::round_percent;
use crate::gear::SlotProfile;

/// Calculate the legacy pivot percentage
///
/// # Arguments
/// * `profile` - The slot's flat caps
/// * `base_stat` - Character attribute without gear
/// * `max_substat` - Best possible substat roll
///
/// # Returns
/// The pivot rounded to 2 decimals, or 0 when `base_stat` is 0
pub fn legacy_pivot(profile: &SlotProfile, base_stat: f64, max_substat: f64) -> f64 {
    if base_stat == 0.0 {
        return 0.0;
    }

    let delta = profile.flat_delta();
    round_percent(max_substat - (delta / base_stat * 100.0))
}
