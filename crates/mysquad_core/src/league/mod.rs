//! League: standings entries plus the double round-robin schedule.
//!
//! Entries keep construction order for the league's whole lifetime. The
//! table is *not* sorted by points; `rank` is simply the 1-based index.

pub mod fixtures;
pub mod result;
pub mod standings;

pub use fixtures::{Fixture, FixtureList};
pub use result::{MatchResult, SideResult};
pub use standings::{ScorerRow, StandingsEntry, TableRow, TABLE_HEADERS};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CoreError, Result};
use crate::models::{PlayerId, Team};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct League {
    pub name: String,
    entries: Vec<StandingsEntry>,
    fixtures: FixtureList,
}

impl League {
    pub fn new(name: impl Into<String>, teams: Vec<Team>) -> Self {
        let name = name.into();
        let entries: Vec<StandingsEntry> = teams.into_iter().map(StandingsEntry::new).collect();
        let fixtures = FixtureList::round_robin(entries.len());

        info!(league = %name, teams = entries.len(), fixtures = fixtures.len(), "league created");
        Self { name, entries, fixtures }
    }

    pub fn entries(&self) -> &[StandingsEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&StandingsEntry> {
        self.entries.get(index)
    }

    pub fn team(&self, index: usize) -> Option<&Team> {
        self.entries.get(index).map(|e| &e.team)
    }

    pub fn team_count(&self) -> usize {
        self.entries.len()
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.entries.iter().map(|e| &e.team)
    }

    /// Index of the first user-controlled team, if any.
    pub fn user_team_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.team.user_control)
    }

    pub fn fixtures(&self) -> &FixtureList {
        &self.fixtures
    }

    pub fn next_fixture(&mut self) -> Option<Fixture> {
        self.fixtures.next_fixture()
    }

    /// Team names for a fixture, or `None` if it does not belong to this league.
    pub fn fixture_names(&self, fixture: &Fixture) -> Option<(&str, &str)> {
        let home = self.team(fixture.home)?;
        let away = self.team(fixture.away)?;
        Some((home.name.as_str(), away.name.as_str()))
    }

    /// Apply an externally decided result to both entries and their squads.
    ///
    /// Validates everything first; on error nothing is mutated.
    pub fn apply_result(&mut self, result: &MatchResult) -> Result<()> {
        self.validate_result(result)?;

        let Fixture { home, away } = result.fixture;
        let home_won = result.home_won();
        let away_won = result.away_won();

        Self::apply_side(&mut self.entries[home], &result.home, result.away.goals, home_won);
        Self::apply_side(&mut self.entries[away], &result.away, result.home.goals, away_won);

        debug!(
            home = %self.entries[home].team.name,
            away = %self.entries[away].team.name,
            score = %format!("{}-{}", result.home.goals, result.away.goals),
            "result applied"
        );
        Ok(())
    }

    fn apply_side(entry: &mut StandingsEntry, side: &SideResult, conceded: u32, won: bool) {
        entry.update(side.goals, conceded);

        for scorer in &side.scorers {
            entry.add_goal(*scorer);
        }

        for player in entry.team.squad.players_mut() {
            let id = player.id();
            player.increase_experience(won, side.played(id), side.scored(id));
        }
    }

    fn validate_result(&self, result: &MatchResult) -> Result<()> {
        let Fixture { home, away } = result.fixture;
        let teams = self.entries.len();

        if home == away || home >= teams || away >= teams {
            return Err(CoreError::InvalidFixture { home, away, teams });
        }

        for (index, side) in [(home, &result.home), (away, &result.away)] {
            let team = &self.entries[index].team;

            if side.scorers.len() > side.goals as usize {
                return Err(CoreError::InvalidResult(format!(
                    "{} scored {} goals but {} scorers were listed",
                    team.name,
                    side.goals,
                    side.scorers.len()
                )));
            }

            Self::check_members(team, side.scorers.iter().chain(side.appearances.iter()))?;
        }

        Ok(())
    }

    fn check_members<'a>(team: &Team, ids: impl Iterator<Item = &'a PlayerId>) -> Result<()> {
        for id in ids {
            if !team.has_player(*id) {
                return Err(CoreError::PlayerNotFound { player: *id, team: team.name.clone() });
            }
        }
        Ok(())
    }

    /// Row projection in construction order; rank is the 1-based index.
    pub fn current_table(&self) -> Vec<TableRow> {
        self.entries.iter().enumerate().map(|(i, entry)| entry.row(i + 1)).collect()
    }

    /// Goal tallies across the league, most goals first, then by name.
    pub fn top_scorers(&self) -> Vec<ScorerRow> {
        let mut rows: Vec<ScorerRow> = self
            .entries
            .iter()
            .flat_map(|entry| {
                entry.goal_tally().iter().filter_map(move |(id, goals)| {
                    entry.team.squad.get(*id).map(|player| ScorerRow {
                        player_name: player.name().to_string(),
                        team_name: entry.team.name.clone(),
                        goals: *goals,
                    })
                })
            })
            .collect();

        rows.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.player_name.cmp(&b.player_name)));
        rows
    }

    /// Growth pass over every player. Returns how many ratings changed.
    pub fn handle_growth(&mut self) -> usize {
        let mut changed = 0;
        for entry in &mut self.entries {
            for player in entry.team.squad.players_mut() {
                if player.handle_growth() != 0 {
                    changed += 1;
                }
            }
        }
        debug!(league = %self.name, changed, "growth pass");
        changed
    }

    /// Season boundary for every player in the league.
    pub fn increase_age(&mut self) {
        for entry in &mut self.entries {
            for player in entry.team.squad.players_mut() {
                player.increase_age();
            }
        }
        info!(league = %self.name, "players aged one season");
    }
}
