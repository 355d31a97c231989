//! Input snapshot handed to every analysis.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Observation, Outcome, TeamRecord};

/// Which columns a dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Role and champion present on every row
    Full,
    /// Team-scoped fields only
    Partial,
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Schema::Full => write!(f, "full"),
            Schema::Partial => write!(f, "partial"),
        }
    }
}

/// An immutable collection of match rows.
///
/// Player-level analyses only have something to work with on `Full`;
/// team-level analyses read the shared [`Outcome`] of either variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema", content = "rows", rename_all = "lowercase")]
pub enum Dataset {
    Full(Vec<Observation>),
    Partial(Vec<TeamRecord>),
}

impl Dataset {
    pub fn schema(&self) -> Schema {
        match self {
            Dataset::Full(_) => Schema::Full,
            Dataset::Partial(_) => Schema::Partial,
        }
    }

    /// Player observations, or `None` when role/champion are absent.
    pub fn observations(&self) -> Option<&[Observation]> {
        match self {
            Dataset::Full(rows) => Some(rows),
            Dataset::Partial(_) => None,
        }
    }

    /// Team-scoped fields of every row, in row order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        match self {
            Dataset::Full(rows) => rows.iter().map(Observation::outcome).collect(),
            Dataset::Partial(rows) => rows.iter().map(TeamRecord::outcome).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Full(rows) => rows.len(),
            Dataset::Partial(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct match ids.
    pub fn match_count(&self) -> usize {
        let ids: HashSet<&str> = match self {
            Dataset::Full(rows) => rows.iter().map(|r| r.match_id.as_str()).collect(),
            Dataset::Partial(rows) => rows.iter().map(|r| r.match_id.as_str()).collect(),
        };
        ids.len()
    }

    /// Drop player-level columns.
    pub fn into_partial(self) -> Self {
        match self {
            Dataset::Full(rows) => Dataset::Partial(rows.into_iter().map(TeamRecord::from).collect()),
            partial => partial,
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::Full(Vec::new())
    }
}
