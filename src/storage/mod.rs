//! Match record loading.
//!
//! Reads flat per-player match rows from disk and assembles a
//! [`Dataset`]:
//! - CSV files with a header row
//! - JSONL files, one JSON object per line
//!
//! Sources with role and champion columns produce a full dataset (rows
//! with a blank role or champion cell are skipped); otherwise only the
//! team-scoped fields are kept.

mod csv_file;
mod jsonl;
mod row;

pub use csv_file::{load_csv, read_csv};
pub use jsonl::{load_jsonl, JsonlIterator, JsonlReader, JsonlWriter};
pub use row::RawRow;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Dataset, Observation, Role, TeamRecord};

/// Columns every row must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "match_id",
    "team_id",
    "win",
    "game_duration",
    "first_dragon",
    "first_tower",
];

/// Columns that make a source a full, player-level dataset.
pub const PLAYER_COLUMNS: [&str; 2] = ["role", "champion"];

/// Errors that can occur while loading match records.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("No match records in {0}")]
    Empty(PathBuf),

    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("Invalid record at line {line} in {path}: {message}")]
    InvalidRecord {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Supported record file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Csv,
    Jsonl,
}

impl RecordFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(RecordFormat::Csv),
            "jsonl" | "ndjson" => Some(RecordFormat::Jsonl),
            _ => None,
        }
    }
}

/// Load a dataset, picking the reader from the file extension.
pub fn load_dataset(path: &Path) -> Result<Dataset, StorageError> {
    match RecordFormat::from_path(path) {
        Some(RecordFormat::Csv) => load_csv(path),
        Some(RecordFormat::Jsonl) => load_jsonl(path),
        None => Err(StorageError::InvalidPath(format!(
            "{} (expected .csv or .jsonl)",
            path.display()
        ))),
    }
}

/// Assemble parsed rows into a dataset.
///
/// `player_columns` says whether the source carries role and champion
/// columns at all. Without them the dataset is partial. With them, rows
/// whose role or champion cell is blank are skipped and the rest form a
/// full dataset; a file where every such cell is blank falls back to
/// partial so the team-scoped fields are not lost.
pub(crate) fn assemble(
    rows: Vec<RawRow>,
    player_columns: bool,
    source: &Path,
) -> Result<Dataset, StorageError> {
    if rows.is_empty() {
        return Err(StorageError::Empty(source.to_path_buf()));
    }

    let total = rows.len();
    let dataset = if player_columns {
        let (complete, blank): (Vec<RawRow>, Vec<RawRow>) =
            rows.into_iter().partition(RawRow::has_player_columns);

        if complete.is_empty() {
            warn!(
                "All {} rows in {:?} have blank role/champion; player-level analysis disabled",
                total, source
            );
            Dataset::Partial(blank.into_iter().map(RawRow::into_team_record).collect())
        } else {
            if !blank.is_empty() {
                warn!(
                    "Skipping {} of {} rows in {:?} with blank role/champion",
                    blank.len(),
                    total,
                    source
                );
            }
            Dataset::Full(complete.into_iter().filter_map(RawRow::into_observation).collect())
        }
    } else {
        Dataset::Partial(rows.into_iter().map(RawRow::into_team_record).collect())
    };

    info!(
        "Loaded {} rows ({} schema) from {:?}",
        dataset.len(),
        dataset.schema(),
        source
    );
    Ok(dataset)
}

impl RawRow {
    fn has_player_columns(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.role) && present(&self.champion)
    }

    fn into_observation(self) -> Option<Observation> {
        Some(Observation {
            role: Role::from(self.role?.as_str()),
            champion: self.champion?.trim().to_string(),
            match_id: self.match_id,
            team_id: self.team_id,
            win: self.win,
            game_duration: self.game_duration,
            first_dragon: self.first_dragon,
            first_tower: self.first_tower,
        })
    }

    fn into_team_record(self) -> TeamRecord {
        TeamRecord {
            match_id: self.match_id,
            team_id: self.team_id,
            win: self.win,
            game_duration: self.game_duration,
            first_dragon: self.first_dragon,
            first_tower: self.first_tower,
        }
    }
}
