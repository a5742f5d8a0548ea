//! Experience factor per resolved match
//!
//! | involvement | growing | declining |
//! |-------------|---------|-----------|
//! | scored      | 1.0     | 0.20      |
//! | played      | 0.5     | 0.25      |
//! | unused      | 0.25    | 0.5       |
//!
//! A win doubles the factor while the player is growing and below potential.

use super::GrowthRegime;

/// How a player took part in one match. Scoring implies playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchInvolvement {
    Scored,
    Played,
    Unused,
}

impl MatchInvolvement {
    pub fn from_flags(played: bool, goal: bool) -> Self {
        if goal {
            MatchInvolvement::Scored
        } else if played {
            MatchInvolvement::Played
        } else {
            MatchInvolvement::Unused
        }
    }
}

/// Experience earned for one match.
pub fn experience_factor(
    involvement: MatchInvolvement,
    regime: GrowthRegime,
    won: bool,
    below_potential: bool,
) -> f64 {
    let base = match (involvement, regime) {
        (MatchInvolvement::Scored, GrowthRegime::Growing) => 1.0,
        (MatchInvolvement::Scored, GrowthRegime::Declining) => 0.20,
        (MatchInvolvement::Played, GrowthRegime::Growing) => 0.5,
        (MatchInvolvement::Played, GrowthRegime::Declining) => 0.25,
        (MatchInvolvement::Unused, GrowthRegime::Growing) => 0.25,
        (MatchInvolvement::Unused, GrowthRegime::Declining) => 0.5,
    };

    if won && below_potential && regime.is_growing() {
        base * 2.0
    } else {
        base
    }
}

/// Whole rating points produced by `experience`, or 0 when the threshold is not exceeded.
pub fn growth_steps(experience: f64, growth_factor: f64) -> i32 {
    debug_assert!(growth_factor > 0.0, "growth_factor must be positive");

    if experience > growth_factor {
        (experience / growth_factor).floor() as i32
    } else {
        0
    }
}
