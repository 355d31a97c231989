//! Derived tendency models.

use serde::{Deserialize, Serialize};

use super::Role;

/// How urgently a lane tendency should be played around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityTier::High => write!(f, "HIGH"),
            PriorityTier::Medium => write!(f, "MEDIUM"),
            PriorityTier::Low => write!(f, "LOW"),
        }
    }
}

/// Recommended answer to a lane's comfort pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneAction {
    #[serde(rename = "DENY COMFORT PICK")]
    DenyComfortPick,
    #[serde(rename = "FORCE LOSING MATCHUP")]
    ForceLosingMatchup,
    #[serde(rename = "IGNORE AND PLAY CROSS-MAP")]
    IgnoreAndPlayCrossMap,
}

impl LaneAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaneAction::DenyComfortPick => "DENY COMFORT PICK",
            LaneAction::ForceLosingMatchup => "FORCE LOSING MATCHUP",
            LaneAction::IgnoreAndPlayCrossMap => "IGNORE AND PLAY CROSS-MAP",
        }
    }
}

impl std::fmt::Display for LaneAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Most-played champion for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleTendency {
    pub role: Role,

    pub most_played_champion: String,

    /// Games on that champion in this role
    pub count: u32,

    /// Win rate (0.0 to 1.0) on that champion in this role
    pub win_rate: f64,

    pub priority: PriorityTier,

    pub action: LaneAction,
}

/// Game phase in which a team wins more often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinPhase {
    Early,
    Late,
}

impl std::fmt::Display for WinPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinPhase::Early => write!(f, "early"),
            WinPhase::Late => write!(f, "late"),
        }
    }
}

/// Objective control and tempo for a whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTendency {
    pub first_dragon_rate: f64,
    pub first_tower_rate: f64,
    pub early_game_win_rate: f64,
    pub late_game_win_rate: f64,
    pub win_tendency: WinPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_serialization() {
        assert_eq!(serde_json::to_string(&PriorityTier::High).unwrap(), "\"HIGH\"");
        assert_eq!(format!("{}", PriorityTier::Low), "LOW");
    }

    #[test]
    fn test_lane_action_text() {
        assert_eq!(
            serde_json::to_string(&LaneAction::IgnoreAndPlayCrossMap).unwrap(),
            "\"IGNORE AND PLAY CROSS-MAP\""
        );
        assert_eq!(LaneAction::DenyComfortPick.to_string(), "DENY COMFORT PICK");
    }

    #[test]
    fn test_win_phase_display() {
        assert_eq!(WinPhase::Early.to_string(), "early");
        assert_eq!(serde_json::to_string(&WinPhase::Late).unwrap(), "\"late\"");
    }
}
