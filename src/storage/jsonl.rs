//! JSONL (JSON Lines) storage.
//!
//! Each line is a valid JSON object representing one match row.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::{assemble, RawRow, StorageError};
use crate::models::Dataset;

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Ensure the parent directory exists.
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Wrote {} rows to {:?}", count, self.path);

        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Read every entity, failing on the first malformed line.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        let mut entities = Vec::new();
        for (line, entity) in self.iter()? {
            let entity = entity.map_err(|e| match e {
                StorageError::Json(err) => StorageError::InvalidRecord {
                    path: self.path.clone(),
                    line,
                    message: err.to_string(),
                },
                other => other,
            })?;
            entities.push(entity);
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }

    /// Create an iterator over the file, yielding 1-based line numbers.
    pub fn iter(&self) -> Result<JsonlIterator<T>, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::PathNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        Ok(JsonlIterator {
            reader,
            line: 0,
            _marker: PhantomData,
        })
    }
}

/// Iterator over JSONL file entries.
pub struct JsonlIterator<T> {
    reader: BufReader<File>,
    line: usize,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Iterator for JsonlIterator<T> {
    type Item = (usize, Result<T, StorageError>);

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = String::new();

        loop {
            buf.clear();
            self.line += 1;
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    if buf.trim().is_empty() {
                        continue;
                    }
                    return Some((self.line, serde_json::from_str(&buf).map_err(StorageError::Json)));
                }
                Err(e) => return Some((self.line, Err(StorageError::Io(e)))),
            }
        }
    }
}

/// Load a JSONL file of match rows.
pub fn load_jsonl(path: &Path) -> Result<Dataset, StorageError> {
    let rows = JsonlReader::<RawRow>::new(path.to_path_buf()).read_all()?;
    // no header: the player columns exist if some row sets them
    let player_columns =
        rows.iter().any(|r| r.role.is_some()) && rows.iter().any(|r| r.champion.is_some());
    assemble(rows, player_columns, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Observation, Role, Schema};
    use tempfile::TempDir;

    fn observation(champion: &str) -> Observation {
        Observation {
            match_id: "m1".to_string(),
            team_id: "red".to_string(),
            role: Role::Mid,
            champion: champion.to_string(),
            win: false,
            game_duration: 2300,
            first_dragon: true,
            first_tower: false,
        }
    }

    #[test]
    fn test_write_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("rows.jsonl");

        let writer = JsonlWriter::new(path.clone());
        let written = writer
            .write_all(&[observation("Azir"), observation("Viktor")])
            .unwrap();
        assert_eq!(written, 2);

        let ds = load_jsonl(&path).unwrap();
        assert_eq!(ds.schema(), Schema::Full);
        assert_eq!(ds.observations().unwrap()[1].champion, "Viktor");
        assert_eq!(ds.observations().unwrap()[0].role, Role::Mid);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.jsonl");
        std::fs::write(
            &path,
            "\n{\"match_id\":\"a\",\"team_id\":\"b\",\"win\":true,\"game_duration\":1500,\"first_dragon\":0,\"first_tower\":1}\n\n",
        )
        .unwrap();

        let ds = load_jsonl(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.schema(), Schema::Partial);
    }

    #[test]
    fn test_row_without_champion_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.jsonl");
        std::fs::write(
            &path,
            "{\"match_id\":1,\"team_id\":100,\"role\":\"TOP\",\"champion\":\"Gnar\",\"win\":1,\"game_duration\":1500,\"first_dragon\":0,\"first_tower\":1}\n\
             {\"match_id\":1,\"team_id\":100,\"role\":\"MID\",\"win\":1,\"game_duration\":1500,\"first_dragon\":0,\"first_tower\":1}\n",
        )
        .unwrap();

        let ds = load_jsonl(&path).unwrap();
        assert_eq!(ds.schema(), Schema::Full);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.observations().unwrap()[0].champion, "Gnar");
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.jsonl");
        std::fs::write(
            &path,
            "{\"match_id\":\"a\",\"team_id\":\"b\",\"win\":true,\"game_duration\":1500,\"first_dragon\":0,\"first_tower\":1}\n{not json}\n",
        )
        .unwrap();

        match load_jsonl(&path) {
            Err(StorageError::InvalidRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected invalid record, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = load_jsonl(Path::new("/nonexistent/rows.jsonl"));
        assert!(matches!(result, Err(StorageError::PathNotFound(_))));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.jsonl");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(load_jsonl(&path), Err(StorageError::Empty(_))));
    }
}
