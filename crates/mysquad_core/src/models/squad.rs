use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use super::position::PositionGroup;
use crate::table::{Align, TableRecord};

pub const SQUAD_HEADERS: &[&str] = &["NAME", "POS", "AGE", "RAT", "POT"];

/// Ordered collection of players; insertion order is display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Squad {
    players: Vec<Player>,
}

impl Squad {
    pub fn new() -> Self {
        Self { players: Vec::new() }
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    pub fn count_in_group(&self, group: PositionGroup) -> usize {
        self.players.iter().filter(|p| p.position().group() == group).count()
    }

    pub fn average_rating(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.players.iter().map(|p| p.rating() as i64).sum();
        sum as f32 / self.players.len() as f32
    }

    /// Row projection for the squad roster table.
    pub fn rows(&self) -> Vec<SquadRow> {
        self.players.iter().map(SquadRow::from).collect()
    }
}

impl<'a> IntoIterator for &'a Squad {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquadRow {
    pub name: String,
    pub position: &'static str,
    pub age: u8,
    pub rating: i32,
    pub potential: i32,
}

impl From<&Player> for SquadRow {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            position: player.position().code(),
            age: player.age(),
            rating: player.rating(),
            potential: player.potential(),
        }
    }
}

impl TableRecord for SquadRow {
    const HEADERS: &'static [&'static str] = SQUAD_HEADERS;
    const ALIGN: &'static [Align] =
        &[Align::Left, Align::Right, Align::Right, Align::Right, Align::Right];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.position.to_string(),
            self.age.to_string(),
            self.rating.to_string(),
            self.potential.to_string(),
        ]
    }
}
