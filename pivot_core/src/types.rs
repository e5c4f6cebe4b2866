//! Core types shared by the pivot engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PivotError;

/// Equipment slot that carries a flat stat bonus plus a percentage substat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearSlot {
    Belt,
    Orb,
    Bracelet,
    Ring,
    Necklace,
    Earrings,
}

impl GearSlot {
    /// Number of slots
    pub const COUNT: usize = 6;

    /// Get all gear slots
    pub fn all() -> &'static [GearSlot] {
        &[
            GearSlot::Belt,
            GearSlot::Orb,
            GearSlot::Bracelet,
            GearSlot::Ring,
            GearSlot::Necklace,
            GearSlot::Earrings,
        ]
    }

    /// Stable position of this slot, used to index slot tables
    pub fn index(self) -> usize {
        match self {
            GearSlot::Belt => 0,
            GearSlot::Orb => 1,
            GearSlot::Bracelet => 2,
            GearSlot::Ring => 3,
            GearSlot::Necklace => 4,
            GearSlot::Earrings => 5,
        }
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            GearSlot::Belt => "belt",
            GearSlot::Orb => "orb",
            GearSlot::Bracelet => "bracelet",
            GearSlot::Ring => "ring",
            GearSlot::Necklace => "necklace",
            GearSlot::Earrings => "earrings",
        }
    }

    /// Attribute this slot boosts in the default game balance
    pub fn default_attribute(self) -> GoverningAttribute {
        match self {
            GearSlot::Belt | GearSlot::Orb => GoverningAttribute::Hp,
            GearSlot::Bracelet | GearSlot::Ring => GoverningAttribute::Atk,
            GearSlot::Necklace | GearSlot::Earrings => GoverningAttribute::Def,
        }
    }
}

impl fmt::Display for GearSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for GearSlot {
    type Err = PivotError;

    /// Accepts canonical names and the older French keys still found in
    /// saved configs (`ceinture`, `orbe`, `bague`, `collier`, `boucles`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "belt" | "ceinture" => Ok(GearSlot::Belt),
            "orb" | "orbe" => Ok(GearSlot::Orb),
            "bracelet" => Ok(GearSlot::Bracelet),
            "ring" | "bague" => Ok(GearSlot::Ring),
            "necklace" | "amulet" | "collier" => Ok(GearSlot::Necklace),
            "earrings" | "earring" | "boucles" => Ok(GearSlot::Earrings),
            _ => Err(PivotError::UnknownSlot(s.to_string())),
        }
    }
}

/// Character attribute a slot's bonus applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoverningAttribute {
    Hp,
    Atk,
    Def,
}

impl fmt::Display for GoverningAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoverningAttribute::Hp => f.pad("hp"),
            GoverningAttribute::Atk => f.pad("atk"),
            GoverningAttribute::Def => f.pad("def"),
        }
    }
}

/// How hard a pivot roll is to reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Rare tier wins even with a mediocre roll
    Easy,
    /// Rare tier needs a decent roll
    Medium,
    /// Rare tier needs a near-perfect roll
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.pad("easy"),
            Difficulty::Medium => f.pad("medium"),
            Difficulty::Hard => f.pad("hard"),
        }
    }
}

/// Which pivot formula to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotStrategy {
    /// Flat-delta estimate: `MAX_SUBSTAT - delta / base * 100`
    Legacy,
    /// Exact break-even against a maxed common item
    #[default]
    Precise,
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PivotStrategy::Legacy => f.pad("legacy"),
            PivotStrategy::Precise => f.pad("precise"),
        }
    }
}
