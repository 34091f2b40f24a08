pub mod columns;
pub mod de;
pub mod join;
pub mod loader;
pub mod types;

pub use columns::{Column, ColumnSet, ALLOW_LIST};
pub use types::{Dataset, Game, JoinReport, JoinedShot, ShotEvent, Team};

use crate::config::DataPaths;
use crate::error::SmResult;
use tracing::info;

/// Loads the three tables named in `paths` and joins them.
pub fn load_dataset(paths: &DataPaths) -> SmResult<Dataset> {
    let shots = loader::load_shots(&paths.shots)?;
    let teams = loader::load_teams(&paths.teams)?;
    let games = loader::load_games(&paths.games)?;

    let dataset = join::join(shots.rows, shots.columns, &teams.rows, &games.rows);
    info!(
        "Loaded {} shots ({} teams, {} games, {} dropped by join).",
        dataset.len(),
        teams.rows.len(),
        games.rows.len(),
        dataset.report.dropped()
    );
    Ok(dataset)
}
