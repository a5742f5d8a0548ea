use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use super::position::Position;
use crate::error::{CoreError, Result};
use crate::growth::{
    experience_factor, growth_steps, GrowthConfig, GrowthRegime, MatchInvolvement,
};

/// Globally unique player identity, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A squad member with the experience -> rating progression model.
///
/// # Invariants
/// - `experience` is never negative and is reset to 0 after every growth/decline step
/// - `growth_factor` is always positive
/// - `age` only moves forward, so the regime only moves Growing -> Declining
///
/// `rating` is not clamped; long careers can drift past 99 or below 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    id: PlayerId,
    name: String,
    position: Position,
    age: u8,
    rating: i32,
    potential: i32,
    experience: f64,
    growth_factor: f64,
    growth_max_age: u8,
    #[serde(default = "default_age_growth_multiplier")]
    age_growth_multiplier: f64,
}

fn default_age_growth_multiplier() -> f64 {
    GrowthConfig::default().age_growth_multiplier
}

/// True when `age + window` would leave no age past the growth limit.
fn decline_age_out_of_range(age: u8, window: u8) -> bool {
    age.checked_add(window).map_or(true, |max_age| max_age == u8::MAX)
}

impl Player {
    /// Create a player using the default growth configuration.
    ///
    /// `age + growth_window` must stay below `u8::MAX` so the player can
    /// still reach the declining regime; `with_config` checks this.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        age: u8,
        rating: i32,
        potential: i32,
    ) -> Self {
        let config = GrowthConfig::default();
        Self::build(name.into(), position, age, rating, potential, &config)
    }

    /// Create a player with explicit growth tunables.
    pub fn with_config(
        name: impl Into<String>,
        position: Position,
        age: u8,
        rating: i32,
        potential: i32,
        config: &GrowthConfig,
    ) -> Result<Self> {
        config.validate()?;
        if decline_age_out_of_range(age, config.growth_window) {
            return Err(CoreError::InvalidConfig(format!(
                "age {age} with growth window {} leaves no declining years",
                config.growth_window
            )));
        }
        Ok(Self::build(name.into(), position, age, rating, potential, config))
    }

    pub(crate) fn build(
        name: String,
        position: Position,
        age: u8,
        rating: i32,
        potential: i32,
        config: &GrowthConfig,
    ) -> Self {
        debug_assert!(!decline_age_out_of_range(age, config.growth_window));
        Self {
            id: PlayerId::new(),
            name,
            position,
            age,
            rating,
            potential,
            experience: 0.0,
            growth_factor: config.initial_growth_factor,
            growth_max_age: age.saturating_add(config.growth_window),
            age_growth_multiplier: config.age_growth_multiplier,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn potential(&self) -> i32 {
        self.potential
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    pub fn growth_max_age(&self) -> u8 {
        self.growth_max_age
    }

    pub fn regime(&self) -> GrowthRegime {
        GrowthRegime::for_age(self.age, self.growth_max_age)
    }

    /// Accrue experience for one resolved match.
    ///
    /// `goal` takes priority over `played`; a squad member who neither played
    /// nor scored still earns a small amount.
    pub fn increase_experience(&mut self, won: bool, played: bool, goal: bool) {
        let involvement = MatchInvolvement::from_flags(played, goal);
        let factor =
            experience_factor(involvement, self.regime(), won, self.rating < self.potential);
        self.experience += factor;
    }

    /// Convert accumulated experience into rating once it exceeds the growth factor.
    ///
    /// Returns the signed rating change (0 when nothing happened).
    pub fn handle_growth(&mut self) -> i32 {
        debug_assert!(self.growth_factor > 0.0, "growth_factor must be positive");

        let steps = growth_steps(self.experience, self.growth_factor);
        if steps == 0 {
            return 0;
        }

        let delta = match self.regime() {
            GrowthRegime::Growing => steps,
            GrowthRegime::Declining => -steps,
        };

        self.rating += delta;
        self.experience = 0.0;

        debug!(player = %self.name, delta, rating = self.rating, "rating changed");
        delta
    }

    /// Season boundary: one year older, and growth becomes harder.
    ///
    /// Age saturates at `u8::MAX`.
    pub fn increase_age(&mut self) {
        self.age = self.age.saturating_add(1);
        self.growth_factor *= self.age_growth_multiplier;
    }

    pub fn validate(&self) -> Result<()> {
        if self.growth_max_age == u8::MAX {
            return Err(CoreError::InvalidConfig(format!(
                "player {} has growth age limit {} and can never decline",
                self.id, self.growth_max_age
            )));
        }
        if !(self.growth_factor > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "player {} has non-positive growth factor {}",
                self.id, self.growth_factor
            )));
        }
        if self.experience < 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "player {} has negative experience {}",
                self.id, self.experience
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(age: u8, rating: i32, growth_max_age: u8, experience: f64) -> Player {
        let mut player = Player::new("Test Player", Position::CM, age, rating, 80);
        player.growth_max_age = growth_max_age;
        player.experience = experience;
        player
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("Young Gun", Position::CF, 18, 60, 85);

        assert_eq!(player.experience(), 0.0);
        assert_eq!(player.growth_factor(), 15.0);
        assert_eq!(player.growth_max_age(), 21);
        assert_eq!(player.regime(), GrowthRegime::Growing);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Player::new("A", Position::GK, 20, 60, 70);
        let b = Player::new("A", Position::GK, 20, 60, 70);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_growth_application() {
        let mut player = player_with(20, 60, 23, 16.0);

        let delta = player.handle_growth();

        assert_eq!(delta, 1);
        assert_eq!(player.rating(), 61);
        assert_eq!(player.experience(), 0.0);
    }

    #[test]
    fn test_decline_application() {
        let mut player = player_with(30, 60, 23, 16.0);
        assert_eq!(player.regime(), GrowthRegime::Declining);

        let delta = player.handle_growth();

        assert_eq!(delta, -1);
        assert_eq!(player.rating(), 59);
        assert_eq!(player.experience(), 0.0);
    }

    #[test]
    fn test_growth_boundary_is_noop() {
        let mut player = player_with(20, 60, 23, 15.0);

        assert_eq!(player.handle_growth(), 0);
        assert_eq!(player.rating(), 60);
        assert_eq!(player.experience(), 15.0);
    }

    #[test]
    fn test_multiple_steps_in_one_pass() {
        let mut player = player_with(20, 60, 23, 47.0);

        player.handle_growth();

        assert_eq!(player.rating(), 63);
        assert_eq!(player.experience(), 0.0);
    }

    #[test]
    fn test_increase_experience_with_win_bonus() {
        let mut player = Player::new("Winner", Position::AM, 20, 60, 80);

        player.increase_experience(true, true, false);
        assert_eq!(player.experience(), 1.0);

        player.increase_experience(false, false, false);
        assert_eq!(player.experience(), 1.25);

        player.increase_experience(true, true, true);
        assert_eq!(player.experience(), 3.25);
    }

    #[test]
    fn test_no_win_bonus_at_potential() {
        let mut player = Player::new("Peaked", Position::AM, 20, 80, 80);

        player.increase_experience(true, true, false);

        assert_eq!(player.experience(), 0.5);
    }

    #[test]
    fn test_unused_declining_player_earns_more_than_growing() {
        let mut veteran = player_with(34, 70, 23, 0.0);
        let mut youngster = player_with(17, 70, 23, 0.0);

        veteran.increase_experience(false, false, false);
        youngster.increase_experience(false, false, false);

        assert!(veteran.experience() > youngster.experience());
    }

    #[test]
    fn test_increase_age_compounds_growth_factor() {
        let mut player = Player::new("Ageing", Position::CB, 20, 60, 80);

        player.increase_age();
        player.increase_age();

        assert_eq!(player.age(), 22);
        assert!((player.growth_factor() - 15.0 * 1.1 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_regime_switches_after_window() {
        let mut player = Player::new("Window", Position::CB, 20, 60, 80);

        for _ in 0..3 {
            player.increase_age();
            assert_eq!(player.regime(), GrowthRegime::Growing);
        }
        player.increase_age();

        assert_eq!(player.regime(), GrowthRegime::Declining);
    }

    #[test]
    fn test_rating_is_not_clamped() {
        let mut star = player_with(20, 98, 23, 60.0);
        star.handle_growth();
        assert_eq!(star.rating(), 102);

        let mut veteran = player_with(35, 2, 23, 60.0);
        veteran.handle_growth();
        assert_eq!(veteran.rating(), -2);
    }

    #[test]
    fn test_with_config_rejects_zero_factor() {
        let config = GrowthConfig { initial_growth_factor: 0.0, ..Default::default() };
        let result = Player::with_config("Broken", Position::GK, 20, 60, 70, &config);
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_age_bound_leaves_room_to_decline() {
        let config = GrowthConfig::default();
        let result = Player::with_config("Ancient", Position::CB, 252, 60, 70, &config);
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));

        let mut oldest = Player::with_config("Oldest", Position::CB, 251, 60, 70, &config).unwrap();
        assert_eq!(oldest.growth_max_age(), 254);
        oldest.validate().unwrap();

        for _ in 0..4 {
            oldest.increase_age();
        }
        assert_eq!(oldest.age(), u8::MAX);
        assert_eq!(oldest.regime(), GrowthRegime::Declining);

        let stuck = player_with(250, 60, u8::MAX, 0.0);
        assert!(matches!(stuck.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_with_config_window() {
        let config = GrowthConfig { growth_window: 5, ..Default::default() };
        let player = Player::with_config("Late Bloomer", Position::LW, 19, 60, 80, &config).unwrap();
        assert_eq!(player.growth_max_age(), 24);
    }
}
