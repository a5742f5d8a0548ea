//! # mysquad_core - Football Season Management Engine
//!
//! Generates squads for a league picked from a static catalog, schedules a
//! double round-robin, records results into a standings table and develops
//! players across seasons through an experience based growth model.
//!
//! ## Features
//! - Seedable squad generation (same seed = same league)
//! - Position-bucketed squads with per-position attribute ranges
//! - Growth/decline progression driven by match involvement
//! - Compressed, checksummed session snapshots

// Game engine APIs often require many parameters
#![allow(clippy::too_many_arguments)]

pub mod catalog;
pub mod error;
pub mod generator;
pub mod growth;
pub mod league;
pub mod models;
pub mod save;
pub mod session;
pub mod table;


pub use catalog::{LeagueCatalog, LeagueDefinition};
pub use error::{CoreError, Result};
pub use generator::{NameGenerator, RandomNames, SequentialNames, SquadGenerator};
pub use growth::{GrowthConfig, GrowthRegime, MatchInvolvement};
pub use league::{Fixture, FixtureList, League, MatchResult, SideResult, StandingsEntry};
pub use models::{Player, PlayerId, Position, PositionGroup, Squad, Team};
pub use save::{SaveError, SaveInfo, SaveManager, SessionSave};
pub use session::{NewGameOptions, Session, DEFAULT_SQUAD_SIZE};
pub use table::{Align, TableRecord};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
