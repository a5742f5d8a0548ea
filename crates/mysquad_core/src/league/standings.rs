use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{PlayerId, Team};
use crate::table::{Align, TableRecord};

pub const TABLE_HEADERS: &[&str] = &["POS", "TEAM", "P", "W", "D", "L", "GF", "GA", "GD", "PTS"];

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// A team's running record inside one league.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandingsEntry {
    pub team: Team,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Goals per scorer. Never decremented.
    goals: HashMap<PlayerId, u32>,
}

impl StandingsEntry {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goals: HashMap::new(),
        }
    }

    /// Record one finished match from this team's point of view.
    pub fn update(&mut self, goals_for: u32, goals_against: u32) {
        self.played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;

        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => self.won += 1,
            std::cmp::Ordering::Equal => self.drawn += 1,
            std::cmp::Ordering::Less => self.lost += 1,
        }
    }

    pub fn add_goal(&mut self, player: PlayerId) {
        *self.goals.entry(player).or_insert(0) += 1;
    }

    pub fn goals_by(&self, player: PlayerId) -> u32 {
        self.goals.get(&player).copied().unwrap_or(0)
    }

    pub fn goal_tally(&self) -> &HashMap<PlayerId, u32> {
        &self.goals
    }

    pub fn points(&self) -> u32 {
        self.won * POINTS_FOR_WIN + self.drawn * POINTS_FOR_DRAW
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn row(&self, rank: usize) -> TableRow {
        TableRow {
            rank,
            team_name: self.team.name.clone(),
            played: self.played,
            won: self.won,
            drawn: self.drawn,
            lost: self.lost,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            goal_difference: self.goal_difference(),
            points: self.points(),
        }
    }
}

/// One line of the league table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub rank: usize,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TableRecord for TableRow {
    const HEADERS: &'static [&'static str] = TABLE_HEADERS;
    const ALIGN: &'static [Align] = &[
        Align::Right,
        Align::Left,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Right,
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.team_name.clone(),
            self.played.to_string(),
            self.won.to_string(),
            self.drawn.to_string(),
            self.lost.to_string(),
            self.goals_for.to_string(),
            self.goals_against.to_string(),
            self.goal_difference.to_string(),
            self.points.to_string(),
        ]
    }
}

/// Top-scorer line across a league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerRow {
    pub player_name: String,
    pub team_name: String,
    pub goals: u32,
}

impl TableRecord for ScorerRow {
    const HEADERS: &'static [&'static str] = &["NAME", "TEAM", "G"];
    const ALIGN: &'static [Align] = &[Align::Left, Align::Left, Align::Right];

    fn cells(&self) -> Vec<String> {
        vec![self.player_name.clone(), self.team_name.clone(), self.goals.to_string()]
    }
}
