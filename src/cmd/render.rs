use super::{resolve_selection, SelectionArgs};
use crate::reports;
use clap::Args;
use serde::Serialize;
use shotmap::config::Config;
use shotmap::dashboard::{self, Summary};
use shotmap::dataset::Dataset;
use shotmap::error::{ShotMapError, SmResult};
use shotmap::render::DensityLayer;
use shotmap::selectors::TeamDirectory;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(short, long, default_value = "heatmap.png")]
    pub output: PathBuf,

    /// Print the report as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct RenderReport<'a> {
    summary: &'a Summary,
    image: &'a PathBuf,
    subtitle: &'a str,
    points: usize,
    density: &'a DensityLayer,
}

pub fn run(
    args: &RenderArgs,
    config: &Config,
    dataset: &Dataset,
    directory: &TeamDirectory,
) -> SmResult<()> {
    let selection = resolve_selection(&args.selection, dataset, directory)?;
    let view = dashboard::build(dataset, &selection, config, true)?;
    let heatmap = view
        .heatmap
        .ok_or_else(|| ShotMapError::Validation("renderer produced no image".to_string()))?;

    heatmap.save(&args.output)?;

    if args.json {
        let report = RenderReport {
            summary: &view.summary,
            image: &args.output,
            subtitle: &heatmap.subtitle,
            points: heatmap.points,
            density: &heatmap.density,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_heatmap(&heatmap);
        reports::print_summary(&view.summary);
    }
    Ok(())
}
