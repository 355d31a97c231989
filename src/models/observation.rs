//! Per-player, per-match observations.

use serde::{Deserialize, Serialize};

/// Lane/position assignment.
///
/// Declaration order is the order roles appear in every role-keyed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
    Unknown,
}

impl Role {
    /// Parse a role name, accepting the common aliases.
    /// Returns `None` for text that names no role.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Role::Top),
            "jungle" | "jng" | "jg" => Some(Role::Jungle),
            "mid" | "middle" => Some(Role::Mid),
            "adc" | "bot" | "bottom" | "carry" => Some(Role::Adc),
            "support" | "sup" | "supp" | "utility" => Some(Role::Support),
            "unknown" => Some(Role::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Support => "SUPPORT",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::parse(s).unwrap_or(Role::Unknown)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from(s.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Team-scoped result of one match from one side.
///
/// These fields are constant across every player row of the same
/// match + team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outcome {
    pub win: bool,

    /// Game length in seconds
    pub game_duration: u32,

    pub first_dragon: bool,
    pub first_tower: bool,
}

/// One player's participation in one match for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub match_id: String,
    pub team_id: String,
    pub role: Role,
    pub champion: String,
    pub win: bool,
    pub game_duration: u32,
    pub first_dragon: bool,
    pub first_tower: bool,
}

impl Observation {
    /// Team-scoped fields of this row.
    pub fn outcome(&self) -> Outcome {
        Outcome {
            win: self.win,
            game_duration: self.game_duration,
            first_dragon: self.first_dragon,
            first_tower: self.first_tower,
        }
    }
}

/// A row without player-level detail (no role or champion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub match_id: String,
    pub team_id: String,
    pub win: bool,
    pub game_duration: u32,
    pub first_dragon: bool,
    pub first_tower: bool,
}

impl TeamRecord {
    pub fn outcome(&self) -> Outcome {
        Outcome {
            win: self.win,
            game_duration: self.game_duration,
            first_dragon: self.first_dragon,
            first_tower: self.first_tower,
        }
    }
}

impl From<Observation> for TeamRecord {
    fn from(obs: Observation) -> Self {
        Self {
            match_id: obs.match_id,
            team_id: obs.team_id,
            win: obs.win,
            game_duration: obs.game_duration,
            first_dragon: obs.first_dragon,
            first_tower: obs.first_tower,
        }
    }
}
