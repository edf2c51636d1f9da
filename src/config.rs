//! World configuration
//!
//! A [`WorldConfig`] fixes the initial delta and the two behaviours that
//! differ between deployments: how component queries match, and what
//! happens to group membership when an entity is killed.
//!
//! ```
//! use rui::config::{MatchMode, WorldConfig};
//!
//! let config = WorldConfig::from_json_str(r#"{ "delta": 0.5, "match_mode": "exact" }"#).unwrap();
//! assert_eq!(config.delta, 0.5);
//! assert_eq!(config.match_mode, MatchMode::Exact);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EcsError, Result};
use crate::group::GroupPolicy;

/// How `get_entities_by_components` compares component type sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Entity carries at least the queried types
    #[default]
    Superset,
    /// Entity carries exactly the queried types
    Exact,
}

/// Settings applied when a world is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Initial delta broadcast to systems
    pub delta: f64,
    pub match_mode: MatchMode,
    pub group_policy: GroupPolicy,
    /// Record per-system timings on every tick
    pub profile_systems: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            delta: 1.0,
            match_mode: MatchMode::Superset,
            group_policy: GroupPolicy::Retain,
            profile_systems: true,
        }
    }
}

impl WorldConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values no tick could sensibly use
    pub fn validate(&self) -> Result<()> {
        if !self.delta.is_finite() {
            return Err(EcsError::ConfigError(format!(
                "delta must be finite, got {}",
                self.delta
            )));
        }
        Ok(())
    }
}
