//! Reserved catalog indices and their configuration.
//!
//! Three catalog entries carry special meaning for the rest of the
//! workspace:
//!
//! | entry | category | default index |
//! |-------|----------|---------------|
//! | trivial (always held) | misc | [`TRIVIAL_RESOURCE_INDEX`] |
//! | impossible (never held) | misc | [`IMPOSSIBLE_RESOURCE_INDEX`] |
//! | item percentage | item | [`ITEM_PERCENTAGE_INDEX`] |
//!
//! The defaults match the shipped game data. A [`CatalogConfig`] can be
//! parsed from YAML when a data set uses different slots; reading the file
//! is left to the caller.

use serde::{Deserialize, Serialize};

/// Misc-category index of the resource every requirement treats as held.
pub const TRIVIAL_RESOURCE_INDEX: u32 = 0;

/// Misc-category index of the resource no requirement can ever satisfy.
pub const IMPOSSIBLE_RESOURCE_INDEX: u32 = 1;

/// Item-category index of the implicit item-percentage counter.
pub const ITEM_PERCENTAGE_INDEX: u32 = 47;

/// Errors that can occur when parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Catalog indices of the reserved resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedIndices {
    /// Misc index of the trivial resource.
    pub trivial: u32,
    /// Misc index of the impossible resource.
    pub impossible: u32,
    /// Item index of the item-percentage counter.
    pub item_percentage: u32,
}

impl Default for ReservedIndices {
    fn default() -> Self {
        Self {
            trivial: TRIVIAL_RESOURCE_INDEX,
            impossible: IMPOSSIBLE_RESOURCE_INDEX,
            item_percentage: ITEM_PERCENTAGE_INDEX,
        }
    }
}

/// Top-level catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Reserved resource slots.
    #[serde(default)]
    pub reserved: ReservedIndices,
}

impl CatalogConfig {
    /// Parse configuration from a YAML document.
    ///
    /// Missing keys take their defaults, so an empty document is valid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}
