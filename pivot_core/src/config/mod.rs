//! Configuration loading from TOML files

mod constants;
mod gear;

pub use constants::EngineConstants;
pub use gear::{
    default_gear_table, default_pivot_config, load_pivot_config, parse_pivot_config, PivotConfig,
};

use crate::types::GearSlot;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Engine constants out of order or out of range
    #[error("Invalid engine constants: {0}")]
    ValidationError(String),
    #[error("Unknown gear slot in config: {0}")]
    UnknownSlot(String),
    #[error("Invalid profile for {slot}: {reason}")]
    InvalidProfile { slot: GearSlot, reason: String },
    #[error("Gear slot {0} is defined more than once")]
    DuplicateSlot(GearSlot),
    #[error("Gear slot {0} has no profile")]
    MissingSlot(GearSlot),
}

/// Read a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    tracing::debug!(path = %path.display(), "loading config");
    parse_toml(&fs::read_to_string(path)?)
}

/// Deserialize a TOML string
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
