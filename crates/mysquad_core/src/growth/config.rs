use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Growth tunables shared by every player in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Seasons after creation during which a player keeps growing.
    pub growth_window: u8,

    /// Experience a fresh player must exceed for one rating point.
    pub initial_growth_factor: f64,

    /// Applied to the growth factor on every birthday.
    pub age_growth_multiplier: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self { growth_window: 3, initial_growth_factor: 15.0, age_growth_multiplier: 1.1 }
    }
}

impl GrowthConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_growth_factor > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "initial_growth_factor must be positive, got {}",
                self.initial_growth_factor
            )));
        }

        // A multiplier below 1.0 is allowed, but it must keep the factor positive.
        if !(self.age_growth_multiplier > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "age_growth_multiplier must be positive, got {}",
                self.age_growth_multiplier
            )));
        }

        Ok(())
    }
}
