use thiserror::Error;

use crate::models::PlayerId;
use crate::save::SaveError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown country '{country}' (available: {})", available.join(", "))]
    UnknownCountry { country: String, available: Vec<String> },

    #[error("League '{title}' in '{country}' has no teams")]
    EmptyLeague { country: String, title: String },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Player {player} is not in the squad of {team}")]
    PlayerNotFound { player: PlayerId, team: String },

    #[error("Invalid fixture: home {home}, away {away} ({teams} teams in league)")]
    InvalidFixture { home: usize, away: usize, teams: usize },

    #[error("Invalid match result: {0}")]
    InvalidResult(String),

    #[error("No game in progress")]
    NoActiveGame,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Save(#[from] SaveError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Catalog(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
