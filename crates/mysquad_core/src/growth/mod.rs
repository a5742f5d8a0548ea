//! Player growth rules
//!
//! ## Module layout
//! - `config`: tunable constants (growth window, initial threshold, age multiplier)
//! - `experience`: per-match experience factor
//!
//! ## Flow
//! 1. After each resolved match: `Player::increase_experience(won, played, goal)`
//! 2. Periodically: `Player::handle_growth()` converts experience into rating
//! 3. At the season boundary: `Player::increase_age()` raises the threshold

pub mod config;
pub mod experience;

pub use config::GrowthConfig;
pub use experience::{experience_factor, growth_steps, MatchInvolvement};

use serde::{Deserialize, Serialize};

/// Whether a player still improves with experience or has started to decline.
///
/// The transition Growing -> Declining is one-way: age never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthRegime {
    Growing,
    Declining,
}

impl GrowthRegime {
    pub fn for_age(age: u8, growth_max_age: u8) -> Self {
        if age <= growth_max_age {
            GrowthRegime::Growing
        } else {
            GrowthRegime::Declining
        }
    }

    pub fn is_growing(&self) -> bool {
        matches!(self, GrowthRegime::Growing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_boundary_is_inclusive() {
        assert_eq!(GrowthRegime::for_age(23, 23), GrowthRegime::Growing);
        assert_eq!(GrowthRegime::for_age(24, 23), GrowthRegime::Declining);
        assert_eq!(GrowthRegime::for_age(16, 23), GrowthRegime::Growing);
    }
}
