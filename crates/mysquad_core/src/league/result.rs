use serde::{Deserialize, Serialize};

use super::fixtures::Fixture;
use crate::models::PlayerId;

/// One side of a decided match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideResult {
    pub goals: u32,
    /// One entry per goal credited to a player; a brace lists the scorer twice.
    pub scorers: Vec<PlayerId>,
    /// Players who took the field. Empty means the whole squad counts as played.
    pub appearances: Vec<PlayerId>,
}

impl SideResult {
    pub fn new(goals: u32) -> Self {
        Self { goals, ..Default::default() }
    }

    pub fn with_scorers(mut self, scorers: Vec<PlayerId>) -> Self {
        self.scorers = scorers;
        self
    }

    pub fn with_appearances(mut self, appearances: Vec<PlayerId>) -> Self {
        self.appearances = appearances;
        self
    }

    pub fn played(&self, player: PlayerId) -> bool {
        self.appearances.is_empty() || self.appearances.contains(&player)
    }

    pub fn scored(&self, player: PlayerId) -> bool {
        self.scorers.contains(&player)
    }
}

/// Outcome of a fixture, decided outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture: Fixture,
    pub home: SideResult,
    pub away: SideResult,
}

impl MatchResult {
    pub fn new(fixture: Fixture, home: SideResult, away: SideResult) -> Self {
        Self { fixture, home, away }
    }

    /// Score-only result; every squad member counts as played.
    pub fn score(fixture: Fixture, home_goals: u32, away_goals: u32) -> Self {
        Self::new(fixture, SideResult::new(home_goals), SideResult::new(away_goals))
    }

    pub fn home_won(&self) -> bool {
        self.home.goals > self.away.goals
    }

    pub fn away_won(&self) -> bool {
        self.away.goals > self.home.goals
    }

    pub fn is_draw(&self) -> bool {
        self.home.goals == self.away.goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_flags() {
        let f = Fixture::new(0, 1);

        assert!(MatchResult::score(f, 2, 1).home_won());
        assert!(MatchResult::score(f, 0, 1).away_won());
        assert!(MatchResult::score(f, 1, 1).is_draw());
    }

    #[test]
    fn test_empty_appearances_means_everyone_played() {
        let side = SideResult::new(0);
        assert!(side.played(PlayerId::new()));

        let starter = PlayerId::new();
        let side = SideResult::new(0).with_appearances(vec![starter]);
        assert!(side.played(starter));
        assert!(!side.played(PlayerId::new()));
    }
}
