use super::{resolve_selection, SelectionArgs};
use crate::reports;
use clap::Args;
use shotmap::config::Config;
use shotmap::dashboard;
use shotmap::dataset::Dataset;
use shotmap::error::SmResult;
use shotmap::selectors::TeamDirectory;

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(
    args: &SummaryArgs,
    config: &Config,
    dataset: &Dataset,
    directory: &TeamDirectory,
) -> SmResult<()> {
    let selection = resolve_selection(&args.selection, dataset, directory)?;
    let view = dashboard::build(dataset, &selection, config, false)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view.summary)?);
    } else {
        reports::print_summary(&view.summary);
    }
    Ok(())
}
