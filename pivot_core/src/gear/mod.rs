//! Gear reference data - per-slot flat values for both tiers

mod profile;

pub use profile::SlotProfile;

use crate::config::ConfigError;
use crate::types::{GearSlot, GoverningAttribute};
use serde::Serialize;

/// Validated lookup table from slot to profile
///
/// Every [`GearSlot`] has exactly one profile, and every profile satisfies
/// `rare_flat > common_flat > 0`. Lookups are therefore infallible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GearTable {
    profiles: [SlotProfile; GearSlot::COUNT],
}

impl GearTable {
    /// Build a table from `(slot, profile)` pairs
    ///
    /// Fails if a slot is missing, appears twice, or has an invalid profile.
    pub fn new<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (GearSlot, SlotProfile)>,
    {
        let mut slots: [Option<SlotProfile>; GearSlot::COUNT] = [None; GearSlot::COUNT];

        for (slot, profile) in entries {
            profile
                .validate()
                .map_err(|reason| ConfigError::InvalidProfile { slot, reason })?;

            let entry = &mut slots[slot.index()];
            if entry.is_some() {
                return Err(ConfigError::DuplicateSlot(slot));
            }
            *entry = Some(profile);
        }

        let mut profiles = [SlotProfile::placeholder(); GearSlot::COUNT];
        for slot in GearSlot::all() {
            profiles[slot.index()] = slots[slot.index()].ok_or(ConfigError::MissingSlot(*slot))?;
        }

        Ok(GearTable { profiles })
    }

    /// Hard-coded values for the game the calculator was written for
    pub fn builtin() -> Self {
        GearTable {
            profiles: [
                SlotProfile::new(5400.0, 12400.0, GoverningAttribute::Hp),
                SlotProfile::new(2900.0, 5800.0, GoverningAttribute::Hp),
                SlotProfile::new(540.0, 1240.0, GoverningAttribute::Atk),
                SlotProfile::new(290.0, 640.0, GoverningAttribute::Atk),
                SlotProfile::new(300.0, 560.0, GoverningAttribute::Def),
                SlotProfile::new(160.0, 320.0, GoverningAttribute::Def),
            ],
        }
    }

    /// Profile for a slot
    pub fn profile(&self, slot: GearSlot) -> &SlotProfile {
        &self.profiles[slot.index()]
    }

    /// Iterate over all slots with their profiles
    pub fn iter(&self) -> impl Iterator<Item = (GearSlot, &SlotProfile)> {
        GearSlot::all().iter().map(move |slot| (*slot, self.profile(*slot)))
    }

    /// Slots whose bonus applies to the given attribute
    pub fn slots_for(&self, attribute: GoverningAttribute) -> Vec<GearSlot> {
        self.iter()
            .filter(|(_, profile)| profile.attribute == attribute)
            .map(|(slot, _)| slot)
            .collect()
    }
}

impl Default for GearTable {
    fn default() -> Self {
        crate::config::default_gear_table()
    }
}
