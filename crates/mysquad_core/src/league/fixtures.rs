//! Double round-robin fixture list
//!
//! Every ordered pair of distinct teams plays once, so each pairing appears
//! twice (home and away). Fixtures are materialized up front and consumed
//! through an explicit cursor that survives save/load.

use serde::{Deserialize, Serialize};

/// One match between two teams, by index in the league's entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub home: usize,
    pub away: usize,
}

impl Fixture {
    pub fn new(home: usize, away: usize) -> Self {
        Self { home, away }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureList {
    fixtures: Vec<Fixture>,
    cursor: usize,
}

impl FixtureList {
    /// All ordered pairs `(i, j)` with `i != j`, in lexicographic order.
    pub fn round_robin(team_count: usize) -> Self {
        let mut fixtures = Vec::with_capacity(team_count * team_count.saturating_sub(1));

        for home in 0..team_count {
            for away in 0..team_count {
                if home != away {
                    fixtures.push(Fixture::new(home, away));
                }
            }
        }

        Self { fixtures, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Index of the next fixture to be played.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.fixtures.len() - self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.fixtures.len()
    }

    pub fn peek(&self) -> Option<Fixture> {
        self.fixtures.get(self.cursor).copied()
    }

    /// Return the fixture at the cursor and advance past it.
    pub fn next_fixture(&mut self) -> Option<Fixture> {
        let fixture = self.peek()?;
        self.cursor += 1;
        Some(fixture)
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fixture> {
        self.fixtures.iter()
    }

    /// Fixtures already handed out.
    pub fn played(&self) -> &[Fixture] {
        &self.fixtures[..self.cursor]
    }

    /// False when the cursor or any fixture points outside a league of `team_count` teams.
    pub fn is_consistent_with(&self, team_count: usize) -> bool {
        self.cursor <= self.fixtures.len()
            && self
                .fixtures
                .iter()
                .all(|f| f.home != f.away && f.home < team_count && f.away < team_count)
    }
}
