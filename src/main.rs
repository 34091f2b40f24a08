use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use shotmap::config::Config;
use shotmap::dataset::load_dataset;
use shotmap::error::SmResult;
use shotmap::selectors::TeamDirectory;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with base settings; explicit flags override it
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw the shot heatmap and print the summary panel
    Render(cmd::render::RenderArgs),
    /// Print the summary panel only
    Summary(cmd::summary::SummaryArgs),
    /// List seasons and the clubs active in each
    Seasons(cmd::seasons::SeasonsArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> SmResult<()> {
    let (data, render) = match &cli.command {
        Commands::Render(args) => (&args.config.data, Some(&args.config.render)),
        Commands::Summary(args) => (&args.config.data, Some(&args.config.render)),
        Commands::Seasons(args) => (&args.data, None),
    };

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            if let Some((_, sub_matches)) = matches.subcommand() {
                file_config.data.merge_from_cli(data, sub_matches);
                if let Some(render) = render {
                    file_config.render.merge_from_cli(render, sub_matches);
                }
            }
            file_config
        }
        None => Config {
            data: data.clone(),
            render: render.cloned().unwrap_or_default(),
        },
    };

    info!("📂 Loading shots: {}", config.data.shots.display());
    let dataset = load_dataset(&config.data)?;

    let directory = match &config.data.team_seasons {
        Some(path) => {
            info!("📅 Loading team seasons: {}", path.display());
            TeamDirectory::load_from_file(path)?
        }
        None => TeamDirectory::default(),
    };
    if dataset.is_empty() {
        warn!("⚠️  Dataset is empty after joining.");
    }

    match &cli.command {
        Commands::Render(args) => cmd::render::run(args, &config, &dataset, &directory),
        Commands::Summary(args) => cmd::summary::run(args, &config, &dataset, &directory),
        Commands::Seasons(_) => cmd::seasons::run(&dataset, &directory),
    }
}
