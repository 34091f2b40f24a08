use super::columns::ColumnSet;
use super::types::{Game, ShotEvent, Team};
use crate::error::{ShotMapError, SmResult};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Rows of one table plus what the header said about it.
#[derive(Debug)]
pub struct RawTable<T> {
    pub rows: Vec<T>,
    pub columns: ColumnSet,
    pub skipped: usize,
}

fn open(path: &Path, label: &str) -> SmResult<File> {
    File::open(path).map_err(|e| {
        ShotMapError::Io(std::io::Error::new(
            e.kind(),
            format!("Could not open {} table at '{}': {}", label, path.display(), e),
        ))
    })
}

/// Reads a headed CSV into `T`, skipping rows that fail to parse.
///
/// A missing required header is fatal; anything else about a row only costs
/// that row.
pub fn read_table<T, R>(reader: R, label: &str, required: &[&str]) -> SmResult<RawTable<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for name in required {
        if !headers.iter().any(|h| h == *name) {
            return Err(ShotMapError::Validation(format!(
                "{} table is missing required column '{}'",
                label, name
            )));
        }
    }
    let columns = ColumnSet::from_headers(headers.iter());

    let mut rows = Vec::new();
    let mut skipped = 0;
    let mut row_idx = 0;

    for result in rdr.deserialize::<T>() {
        row_idx += 1;
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                debug!("[{} row {}] skipped: {}", label, row_idx, e);
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} invalid rows in {} table.", skipped, label);
    }
    debug!("Loaded {} rows from {} table.", rows.len(), label);

    Ok(RawTable {
        rows,
        columns,
        skipped,
    })
}

pub fn load_shots<P: AsRef<Path>>(path: P) -> SmResult<RawTable<ShotEvent>> {
    let path = path.as_ref();
    debug!("Loading shots from: {}", path.display());
    read_table(open(path, "shots")?, "shots", &["team_id", "game_id"])
}

pub fn load_teams<P: AsRef<Path>>(path: P) -> SmResult<RawTable<Team>> {
    let path = path.as_ref();
    debug!("Loading teams from: {}", path.display());
    read_table(open(path, "teams")?, "teams", &["team_id", "team_name"])
}

pub fn load_games<P: AsRef<Path>>(path: P) -> SmResult<RawTable<Game>> {
    let path = path.as_ref();
    debug!("Loading games from: {}", path.display());
    read_table(open(path, "games")?, "games", &["game_id", "season_name"])
}
