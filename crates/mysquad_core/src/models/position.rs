use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playing position. The short code is the variant name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    // Goalkeeper
    GK,

    // Defender
    SW,
    RB,
    RWB,
    CB,
    LB,
    LWB,

    // Midfielder
    DM,
    CM,
    RM,
    LM,
    AM,

    // Forward
    SS,
    CF,
    RW,
    LW,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 16] = [
        Position::GK,
        Position::SW,
        Position::RB,
        Position::RWB,
        Position::CB,
        Position::LB,
        Position::LWB,
        Position::DM,
        Position::CM,
        Position::RM,
        Position::LM,
        Position::AM,
        Position::SS,
        Position::CF,
        Position::RW,
        Position::LW,
    ];

    pub fn group(&self) -> PositionGroup {
        match self {
            Position::GK => PositionGroup::Goalkeeper,
            Position::SW
            | Position::RB
            | Position::RWB
            | Position::CB
            | Position::LB
            | Position::LWB => PositionGroup::Defender,
            Position::DM | Position::CM | Position::RM | Position::LM | Position::AM => {
                PositionGroup::Midfielder
            }
            Position::SS | Position::CF | Position::RW | Position::LW => PositionGroup::Forward,
        }
    }

    /// Short code shown in the squad table (e.g. "CF").
    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::SW => "SW",
            Position::RB => "RB",
            Position::RWB => "RWB",
            Position::CB => "CB",
            Position::LB => "LB",
            Position::LWB => "LWB",
            Position::DM => "DM",
            Position::CM => "CM",
            Position::RM => "RM",
            Position::LM => "LM",
            Position::AM => "AM",
            Position::SS => "SS",
            Position::CF => "CF",
            Position::RW => "RW",
            Position::LW => "LW",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Position::GK => "Goalkeeper",
            Position::SW => "Sweeper",
            Position::RB => "Right Full-back",
            Position::RWB => "Right Wing-back",
            Position::CB => "Centre-back",
            Position::LB => "Left Full-back",
            Position::LWB => "Left Wing-back",
            Position::DM => "Defensive Midfield",
            Position::CM => "Centre Midfield",
            Position::RM => "Right Wide Midfield",
            Position::LM => "Left Wide Midfield",
            Position::AM => "Attacking Midfield",
            Position::SS => "Second Striker",
            Position::CF => "Centre Forward",
            Position::RW => "Right Winger",
            Position::LW => "Left Winger",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.code().eq_ignore_ascii_case(needle) || p.display_name() == needle)
            .ok_or_else(|| format!("Unknown position: {}", s))
    }
}
