use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Tunable constants of the editing engine.
///
/// Missing keys in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Shortest clip a resize or cut may produce, in seconds.
    pub min_clip_duration: f64,
    /// Snap distance in seconds. A candidate must be strictly closer than this.
    pub snap_threshold: f64,
    /// Number of history entries kept, including the current state.
    pub history_capacity: usize,
    /// Pointer travel below this many pixels ends a drag as a click.
    pub click_tolerance_px: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_clip_duration: 0.1,
            snap_threshold: 0.2,
            history_capacity: 50,
            click_tolerance_px: 5.0,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.min_clip_duration.is_finite() && self.min_clip_duration > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "minClipDuration must be positive, got {}",
                self.min_clip_duration
            )));
        }
        if !(self.snap_threshold.is_finite() && self.snap_threshold >= 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "snapThreshold must be non-negative, got {}",
                self.snap_threshold
            )));
        }
        if self.history_capacity == 0 {
            return Err(CoreError::InvalidConfig(
                "historyCapacity must be at least 1".to_string(),
            ));
        }
        if !(self.click_tolerance_px.is_finite() && self.click_tolerance_px >= 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "clickTolerancePx must be non-negative, got {}",
                self.click_tolerance_px
            )));
        }
        Ok(())
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }
}
