//! Gear table configuration loading

use super::{ConfigError, EngineConstants};
use crate::gear::{GearTable, SlotProfile};
use crate::types::GearSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Raw file layout, before slot names are resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GearFile {
    #[serde(default)]
    constants: EngineConstants,
    slots: BTreeMap<String, SlotProfile>,
}

/// Validated engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PivotConfig {
    pub constants: EngineConstants,
    pub table: GearTable,
}

impl GearFile {
    /// Resolve slot names and validate everything
    fn into_config(self) -> Result<PivotConfig, ConfigError> {
        self.constants
            .validate()
            .map_err(ConfigError::ValidationError)?;

        let mut entries = Vec::with_capacity(self.slots.len());
        for (name, profile) in self.slots {
            let slot: GearSlot = name
                .parse()
                .map_err(|_| ConfigError::UnknownSlot(name.clone()))?;
            entries.push((slot, profile));
        }

        Ok(PivotConfig {
            constants: self.constants,
            table: GearTable::new(entries)?,
        })
    }
}

/// Load engine configuration from a TOML file
pub fn load_pivot_config(path: &Path) -> Result<PivotConfig, ConfigError> {
    let file: GearFile = super::load_toml(path)?;
    file.into_config()
}

/// Load engine configuration from a TOML string
pub fn parse_pivot_config(content: &str) -> Result<PivotConfig, ConfigError> {
    let file: GearFile = super::parse_toml(content)?;
    file.into_config()
}

/// Get the bundled configuration
pub fn default_pivot_config() -> PivotConfig {
    let toml = include_str!("../../config/gear.toml");
    parse_pivot_config(toml).unwrap_or_else(|_| PivotConfig {
        constants: EngineConstants::default(),
        table: GearTable::builtin(),
    })
}

/// Get the bundled gear table
pub fn default_gear_table() -> GearTable {
    default_pivot_config().table
}
