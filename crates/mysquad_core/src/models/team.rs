use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::squad::Squad;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    pub squad: Squad,
    /// Set on the single club the human is managing.
    pub user_control: bool,
}

impl Team {
    pub fn new(name: impl Into<String>, squad: Squad) -> Self {
        Self { name: name.into(), squad, user_control: false }
    }

    pub fn user_controlled(name: impl Into<String>, squad: Squad) -> Self {
        Self { name: name.into(), squad, user_control: true }
    }

    pub fn has_player(&self, id: PlayerId) -> bool {
        self.squad.contains(id)
    }
}
