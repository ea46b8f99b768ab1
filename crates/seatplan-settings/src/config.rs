//! Editor configuration for SeatPlan
//!
//! A configuration document has two sections:
//! - `snapping`: the user-facing snapping preferences
//! - `index`: quadtree tuning for the snapping index
//!
//! Documents are plain TOML or JSON text; where they are stored is up to the
//! host. Missing keys fall back to defaults and out-of-range snap thresholds
//! are clamped. Index settings that cannot describe a working quadtree are
//! rejected.

use serde::{Deserialize, Serialize};

use seatplan_core::SnappingConfig;
use seatplan_designer::spatial_index::{
    Bounds, IndexConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITEMS, DEFAULT_WORLD_EXTENT,
};
use seatplan_designer::SnapEngine;

use crate::error::{SettingsError, SettingsResult};

/// Quadtree tuning for the snapping index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexSettings {
    /// Half side of the square world region centered on the origin
    pub extent: f64,
    /// Items a node holds before subdividing
    pub max_items: usize,
    /// Deepest level a node may subdivide to
    pub max_depth: usize,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            extent: DEFAULT_WORLD_EXTENT,
            max_items: DEFAULT_MAX_ITEMS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl IndexSettings {
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.extent.is_finite() || self.extent <= 0.0 {
            return Err(SettingsError::invalid(
                "index.extent",
                format!("must be a positive number, got {}", self.extent),
            ));
        }
        if self.max_items == 0 {
            return Err(SettingsError::invalid("index.maxItems", "must be > 0"));
        }
        Ok(())
    }

    pub fn to_index_config(&self) -> IndexConfig {
        IndexConfig {
            region: Bounds::new(-self.extent, -self.extent, self.extent, self.extent),
            max_items: self.max_items,
            max_depth: self.max_depth,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Snapping preferences
    pub snapping: SnappingConfig,
    /// Index tuning
    pub index: IndexSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a TOML document
    pub fn to_toml_string(&self) -> SettingsResult<String> {
        self.validate()?;
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a JSON document
    pub fn to_json_string(&self) -> SettingsResult<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.index.validate()
    }

    /// Creates a snap engine configured from this document.
    pub fn snap_engine(&self) -> SnapEngine {
        SnapEngine::new(self.snapping.clone()).with_index_config(self.index.to_index_config())
    }
}
