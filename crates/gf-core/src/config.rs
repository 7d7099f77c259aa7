//! Engine configuration.

use crate::{CoreError, CoreResult};

/// Tunables for one engine instance.
///
/// Typically deserialized from a scenario file by the application and handed
/// to `EngineBuilder`.  Every field has a default, so partial files work.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Delay between two playback ticks, in milliseconds.  Default: 1200.
    pub tick_interval_ms: u64,

    /// Maximum number of zones that can be added.  Default: 10.
    pub max_zones: usize,

    /// Vertex count of the polygon approximating each circular zone.
    /// Default: 64.  Must be at least 3.
    pub circle_segments: usize,

    /// Step count used by authoring tools when the user gives none (or an
    /// invalid one).  Default: 10.
    pub default_steps_per_leg: usize,
}

impl EngineConfig {
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_200;
    pub const DEFAULT_MAX_ZONES: usize = 10;
    pub const DEFAULT_CIRCLE_SEGMENTS: usize = 64;
    pub const DEFAULT_STEPS_PER_LEG: usize = 10;

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick_interval_ms must be positive".into()));
        }
        if self.max_zones == 0 {
            return Err(CoreError::Config("max_zones must be at least 1".into()));
        }
        if self.circle_segments < 3 {
            return Err(CoreError::Config(format!(
                "circle_segments must be at least 3, got {}",
                self.circle_segments
            )));
        }
        if self.default_steps_per_leg < 2 {
            return Err(CoreError::Config(format!(
                "default_steps_per_leg must be at least 2, got {}",
                self.default_steps_per_leg
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms:      Self::DEFAULT_TICK_INTERVAL_MS,
            max_zones:             Self::DEFAULT_MAX_ZONES,
            circle_segments:       Self::DEFAULT_CIRCLE_SEGMENTS,
            default_steps_per_leg: Self::DEFAULT_STEPS_PER_LEG,
        }
    }
}
