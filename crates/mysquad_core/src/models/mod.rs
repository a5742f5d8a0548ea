pub mod player;
pub mod position;
pub mod squad;
pub mod team;

pub use player::{Player, PlayerId};
pub use position::{Position, PositionGroup};
pub use squad::{Squad, SquadRow, SQUAD_HEADERS};
pub use team::Team;
