//! CSV match record reader.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::{assemble, RawRow, StorageError, PLAYER_COLUMNS, REQUIRED_COLUMNS};
use crate::models::Dataset;

/// Load a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Dataset, StorageError> {
    if !path.exists() {
        return Err(StorageError::PathNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)?;
    read_csv(file, path)
}

/// Parse CSV from any reader. `source` is only used in errors and logs.
pub fn read_csv<R: Read>(input: R, source: &Path) -> Result<Dataset, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(StorageError::Empty(source.to_path_buf()));
    }

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(StorageError::MissingColumn {
                column: column.to_string(),
                path: source.to_path_buf(),
            });
        }
    }

    let player_columns = PLAYER_COLUMNS
        .iter()
        .all(|column| headers.iter().any(|h| h == *column));

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<RawRow>().enumerate() {
        // header is line 1
        let row = record.map_err(|e| StorageError::InvalidRecord {
            path: source.to_path_buf(),
            line: i + 2,
            message: e.to_string(),
        })?;
        rows.push(row);
    }

    debug!("Parsed {} CSV rows from {:?}", rows.len(), source);
    assemble(rows, player_columns, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Schema};
    use std::io::Write;

    const HEADER: &str = "match_id,team_id,role,champion,win,game_duration,first_dragon,first_tower";

    fn parse(contents: &str) -> Result<Dataset, StorageError> {
        read_csv(contents.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_full_csv() {
        let ds = parse(&format!(
            "{}\n1,100,TOP,Renekton,1,1700,True,False\n1,100,JUNGLE,Lee Sin,1,1700,True,False\n",
            HEADER
        ))
        .unwrap();

        assert_eq!(ds.schema(), Schema::Full);
        let obs = ds.observations().unwrap();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].match_id, "1");
        assert_eq!(obs[1].role, Role::Jungle);
        assert_eq!(obs[1].champion, "Lee Sin");
        assert!(obs[1].win);
        assert!(obs[1].first_dragon);
        assert!(!obs[1].first_tower);
    }

    #[test]
    fn test_csv_without_champion_is_partial() {
        let ds = parse(
            "match_id,team_id,win,game_duration,first_dragon,first_tower\n\
             m1,blue,true,2000,1,0\n",
        )
        .unwrap();

        assert_eq!(ds.schema(), Schema::Partial);
        assert_eq!(ds.outcomes()[0].game_duration, 2000);
    }

    #[test]
    fn test_blank_champion_cell_keeps_other_rows() {
        let mut contents = format!("{}\n", HEADER);
        for game in 0..10 {
            contents.push_str(&format!("{},100,TOP,Renekton,1,1600,1,1\n", game));
            contents.push_str(&format!("{},100,MID,Azir,1,1600,1,1\n", game));
        }
        contents.push_str("99,100,SUPPORT,,0,1700,0,0\n");

        let ds = parse(&contents).unwrap();

        assert_eq!(ds.schema(), Schema::Full);
        assert_eq!(ds.len(), 20);
        let roles = crate::analysis::role_tendencies(&ds, None);
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[&Role::Top].most_played_champion, "Renekton");
        assert_eq!(roles[&Role::Mid].count, 10);
    }

    #[test]
    fn test_missing_required_column() {
        let result = parse("match_id,team_id,role,champion,win,game_duration,first_dragon\n");
        match result {
            Err(StorageError::MissingColumn { column, .. }) => assert_eq!(column, "first_tower"),
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_is_empty() {
        let result = parse(&format!("{}\n", HEADER));
        assert!(matches!(result, Err(StorageError::Empty(_))));
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert!(matches!(parse(""), Err(StorageError::Empty(_))));
    }

    #[test]
    fn test_invalid_value_reports_line() {
        let result = parse(&format!(
            "{}\n1,100,TOP,Ornn,1,1700,0,0\n1,100,MID,Azir,maybe,1700,0,0\n",
            HEADER
        ));
        match result {
            Err(StorageError::InvalidRecord { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected invalid record, got {:?}", other),
        }
    }

    #[test]
    fn test_load_csv_from_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "7,200,SUPPORT,Leona,0,2400,0,1").unwrap();

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.observations().unwrap()[0].role, Role::Support);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let result = load_csv(Path::new("/nonexistent/matches.csv"));
        assert!(matches!(result, Err(StorageError::PathNotFound(_))));
    }
}
