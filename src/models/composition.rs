//! Team composition models.

use serde::{Deserialize, Serialize};

/// Play-style tag attached to a single champion.
///
/// Declaration order doubles as the tie-break when a composition has
/// equal counts for several tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChampionTag {
    Skirmish,
    Protect,
    Engage,
    Scaling,
}

impl ChampionTag {
    pub const ALL: [ChampionTag; 4] = [
        ChampionTag::Skirmish,
        ChampionTag::Protect,
        ChampionTag::Engage,
        ChampionTag::Scaling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChampionTag::Skirmish => "skirmish",
            ChampionTag::Protect => "protect",
            ChampionTag::Engage => "engage",
            ChampionTag::Scaling => "scaling",
        }
    }
}

impl std::fmt::Display for ChampionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classified play style of a whole composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Skirmish,
    Protect,
    Engage,
    Scaling,
    Standard,
}

impl Archetype {
    pub fn category(&self) -> &'static str {
        match self {
            Archetype::Skirmish => "EARLY SKIRMISH",
            Archetype::Protect => "PROTECT THE CARRY",
            Archetype::Engage => "HEAVY ENGAGE",
            Archetype::Scaling => "SCALING",
            Archetype::Standard => "STANDARD",
        }
    }

    pub fn win_condition(&self) -> &'static str {
        match self {
            Archetype::Skirmish => "CRUSH LANES EARLY. INVADE AND SNOWBALL TEMPO.",
            Archetype::Protect => "PEEL FOR ADC. WIN FRONT-TO-BACK TEAMFIGHTS.",
            Archetype::Engage => "FORCE 5V5. CHAIN CC ON PRIORITY TARGETS.",
            Archetype::Scaling => "STALL FOR ITEMS. OUT-STAT IN LATE GAME CLUTCHES.",
            Archetype::Standard => "ADAPT TO FLOW. PLAY FOR STANDARD OBJECTIVES.",
        }
    }

    pub fn break_point(&self) -> &'static str {
        match self {
            Archetype::Skirmish => "FALLS OFF IF GAME STALLS PAST 25 MINS.",
            Archetype::Protect => "VULNERABLE IF CARRY IS DIVED OR PICKED EARLY.",
            Archetype::Engage => "USELESS IF THEY MISS INITIAL ENGAGE OR GET POKED.",
            Archetype::Scaling => "EXTREMELY WEAK TO EARLY DIVES AND SOUL PRESSURE.",
            Archetype::Standard => "LACKS SPECIALIZED STRENGTH AGAINST FOCUSED COMPS.",
        }
    }
}

impl From<ChampionTag> for Archetype {
    fn from(tag: ChampionTag) -> Self {
        match tag {
            ChampionTag::Skirmish => Archetype::Skirmish,
            ChampionTag::Protect => Archetype::Protect,
            ChampionTag::Engage => Archetype::Engage,
            ChampionTag::Scaling => Archetype::Scaling,
        }
    }
}

/// One recurring pick set and how to play against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionEntry {
    /// Champions, sorted lexicographically
    pub composition: Vec<String>,

    /// Team-games that fielded exactly this set
    pub count: u32,

    pub archetype: Archetype,

    pub category: String,
    pub win_condition: String,
    pub break_point: String,
}

impl CompositionEntry {
    pub fn new(composition: Vec<String>, count: u32, archetype: Archetype) -> Self {
        Self {
            composition,
            count,
            archetype,
            category: archetype.category().to_string(),
            win_condition: archetype.win_condition().to_string(),
            break_point: archetype.break_point().to_string(),
        }
    }
}
