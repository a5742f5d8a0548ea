//! Game session
//!
//! A `Session` is a plain value owned by the caller. "New game" replaces it
//! wholesale; everything else mutates it in place and `save` persists a full
//! snapshot. The user's team lives inside the league, referenced by index.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::LeagueCatalog;
use crate::error::{CoreError, Result};
use crate::generator::{NameGenerator, SquadGenerator};
use crate::league::{League, MatchResult};
use crate::models::Team;

pub const DEFAULT_SQUAD_SIZE: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewGameOptions {
    /// Requested squad size per team (the generator rounds up).
    pub squad_size: usize,
}

impl Default for NewGameOptions {
    fn default() -> Self {
        Self { squad_size: DEFAULT_SQUAD_SIZE }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    current_team: Option<usize>,
    current_league: Option<League>,
    current_country: Option<String>,
}

impl Session {
    /// Fresh session with no game in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a new game for `team_name` in `country`.
    ///
    /// Every team of the country's latest league gets a generated squad, one
    /// of them is dropped at random, and the user's team takes its place at
    /// the end of the list.
    pub fn new_game<N: NameGenerator>(
        team_name: &str,
        country: &str,
        catalog: &LeagueCatalog,
        generator: &mut SquadGenerator<N>,
        options: &NewGameOptions,
    ) -> Result<Self> {
        let definition = catalog.latest_league(country)?;

        let user_team = Team::user_controlled(team_name, generator.generate(options.squad_size));

        let mut teams: Vec<Team> = definition
            .teams
            .iter()
            .map(|name| Team::new(name.as_str(), generator.generate(options.squad_size)))
            .collect();

        let dropped = generator.rng_mut().gen_range(0..teams.len());
        let replaced = teams.remove(dropped);

        teams.push(user_team);
        let league = League::new(definition.title.as_str(), teams);
        let user_index = league.team_count() - 1;

        info!(
            team = team_name,
            country,
            league = %league.name,
            replaced = %replaced.name,
            "new game started"
        );

        Ok(Self {
            current_team: Some(user_index),
            current_league: Some(league),
            current_country: Some(country.to_string()),
        })
    }

    pub fn is_started(&self) -> bool {
        self.current_league.is_some()
    }

    pub fn current_team(&self) -> Option<&Team> {
        self.current_league.as_ref()?.team(self.current_team?)
    }

    pub fn current_team_index(&self) -> Option<usize> {
        self.current_team
    }

    pub fn current_league(&self) -> Option<&League> {
        self.current_league.as_ref()
    }

    pub fn current_league_mut(&mut self) -> Option<&mut League> {
        self.current_league.as_mut()
    }

    pub fn current_country(&self) -> Option<&str> {
        self.current_country.as_deref()
    }

    pub fn league(&self) -> Result<&League> {
        self.current_league.as_ref().ok_or(CoreError::NoActiveGame)
    }

    pub fn league_mut(&mut self) -> Result<&mut League> {
        self.current_league.as_mut().ok_or(CoreError::NoActiveGame)
    }

    pub fn team(&self) -> Result<&Team> {
        self.current_team().ok_or(CoreError::NoActiveGame)
    }

    pub fn apply_result(&mut self, result: &MatchResult) -> Result<()> {
        self.league_mut()?.apply_result(result)
    }

    /// Structural checks used when a snapshot is loaded.
    pub fn check_consistency(&self) -> std::result::Result<(), String> {
        let Some(league) = &self.current_league else {
            return match self.current_team {
                None => Ok(()),
                Some(_) => Err("team selected without a league".to_string()),
            };
        };

        let index = self.current_team.ok_or("league without a current team")?;
        let team = league
            .team(index)
            .ok_or_else(|| format!("current team index {index} out of range"))?;
        if !team.user_control {
            return Err(format!("current team '{}' is not user controlled", team.name));
        }

        if !league.fixtures().is_consistent_with(league.team_count()) {
            return Err(format!("fixture list does not match league '{}'", league.name));
        }

        for player in league.teams().flat_map(|t| t.squad.iter()) {
            player.validate().map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    /// Season boundary: growth pass followed by ageing.
    pub fn end_season(&mut self) -> Result<usize> {
        let league = self.league_mut()?;
        let changed = league.handle_growth();
        league.increase_age();
        Ok(changed)
    }
}
