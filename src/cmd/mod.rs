pub mod render;
pub mod seasons;
pub mod summary;

use clap::Args;
use shotmap::dataset::Dataset;
use shotmap::error::{ShotMapError, SmResult};
use shotmap::selection::{Half, Selection, ShotMode};
use shotmap::selectors::{season_list, TeamDirectory};
use tracing::warn;

const UNKNOWN_TEAM: &str = "Unknown Team";

#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Season year; defaults to the latest season in the data
    #[arg(short, long)]
    pub season: Option<i32>,

    /// Team display name; defaults to the first club active that season
    #[arg(short, long)]
    pub team: Option<String>,

    #[arg(short, long, default_value = "all-shots")]
    pub mode: ShotMode,

    #[arg(long, default_value = "first")]
    pub half: Half,
}

/// Fills the selector defaults the way the dashboard sidebar does.
pub fn resolve_selection(
    args: &SelectionArgs,
    dataset: &Dataset,
    directory: &TeamDirectory,
) -> SmResult<Selection> {
    let seasons = season_list(dataset);
    let season = match args.season {
        Some(s) => {
            if !seasons.contains(&s) {
                warn!("⚠️  Season {} has no shots in the dataset.", s);
            }
            s
        }
        None => *seasons.last().ok_or_else(|| {
            ShotMapError::Validation("No seasons found in the dataset".to_string())
        })?,
    };

    let team = match &args.team {
        Some(t) => t.clone(),
        None => match directory.teams_for_season(season).first() {
            Some(t) => t.to_string(),
            None => {
                warn!("⚠️  No Teams Available for {}.", season);
                UNKNOWN_TEAM.to_string()
            }
        },
    };

    Ok(Selection::new(season, team, args.mode, args.half))
}
