use crate::reports;
use clap::Args;
use shotmap::config::DataPaths;
use shotmap::dataset::Dataset;
use shotmap::error::SmResult;
use shotmap::selectors::{season_list, TeamDirectory};

#[derive(Args, Debug, Clone)]
pub struct SeasonsArgs {
    #[command(flatten)]
    pub data: DataPaths,
}

pub fn run(dataset: &Dataset, directory: &TeamDirectory) -> SmResult<()> {
    let rows: Vec<(i32, usize)> = season_list(dataset)
        .into_iter()
        .map(|season| {
            let shots = dataset
                .shots
                .iter()
                .filter(|s| s.season_name == season)
                .count();
            (season, shots)
        })
        .collect();

    if rows.is_empty() {
        println!("No seasons found.");
        return Ok(());
    }
    reports::print_seasons(&rows, directory);
    Ok(())
}
