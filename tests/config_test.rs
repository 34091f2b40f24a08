use clap::{Args, Command, FromArgMatches};
use shotmap::config::{Config, DataPaths};
use shotmap::render::colormap::ColorMap;
use shotmap::selectors::TeamDirectory;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let cmd = Config::augment_args(Command::new("shotmap"));
    let matches = cmd.get_matches_from(std::iter::once("shotmap").chain(args.iter().copied()));
    let cfg = Config::from_arg_matches(&matches).unwrap();
    (cfg, matches)
}

#[test]
fn test_config_file_fills_missing_keys_with_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "render": {{ "bw_adjust": 0.5, "cmap": "viridis" }}, "data": {{ "logo_dir": "assets/logos" }} }}"#
    )
    .unwrap();

    let cfg = Config::load_from_file(file.path()).unwrap();
    assert_eq!(cfg.render.bw_adjust, 0.5);
    assert_eq!(cfg.render.cmap, ColorMap::Viridis);
    assert_eq!(cfg.render.levels, 10);
    assert_eq!(cfg.data.logo_dir, PathBuf::from("assets/logos"));
    assert_eq!(cfg.data.shots, PathBuf::from("data/shots_data_2024.csv"));
}

#[test]
fn test_missing_config_file_is_config_error() {
    let err = Config::load_from_file("/no/such/config.json").unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_cli_defaults_match_serde_defaults() {
    let (cli, _) = parse(&[]);
    let dflt = Config::default();
    assert_eq!(cli.render.width, dflt.render.width);
    assert_eq!(cli.render.thresh, dflt.render.thresh);
    assert_eq!(cli.render.cmap, dflt.render.cmap);
    assert_eq!(cli.data.teams, dflt.data.teams);
}

#[test]
fn test_explicit_flags_override_file_values() {
    let mut file_cfg = Config::default();
    file_cfg.render.width = 800;
    file_cfg.render.alpha = 0.5;
    file_cfg.data.logo_dir = PathBuf::from("from-file");

    let (cli, matches) = parse(&["--width", "640", "--cmap", "magma"]);
    file_cfg.merge_from_cli(&cli, &matches);

    assert_eq!(file_cfg.render.width, 640);
    assert_eq!(file_cfg.render.cmap, ColorMap::Magma);
    // untouched flags keep the file's values
    assert_eq!(file_cfg.render.alpha, 0.5);
    assert_eq!(file_cfg.data.logo_dir, PathBuf::from("from-file"));
}

#[test]
fn test_data_paths_merge_without_render_flags() {
    let cmd = DataPaths::augment_args(Command::new("seasons"));
    assert!(cmd.get_arguments().all(|a| a.get_id().as_str() != "width"));

    let matches = cmd.get_matches_from(["seasons", "--logo-dir", "crests"]);
    let cli = DataPaths::from_arg_matches(&matches).unwrap();

    let mut file_cfg = Config::default();
    file_cfg.data.teams = PathBuf::from("from-file.csv");
    file_cfg.render.width = 800;
    file_cfg.data.merge_from_cli(&cli, &matches);

    assert_eq!(file_cfg.data.logo_dir, PathBuf::from("crests"));
    assert_eq!(file_cfg.data.teams, PathBuf::from("from-file.csv"));
    assert_eq!(file_cfg.render.width, 800);
}

#[test]
fn test_team_directory_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[{{"team": "Bay FC", "first_season": 2024, "last_season": 2025}},
           {{"team": "Boston Legacy FC", "first_season": 2026, "last_season": 2026}}]"#
    )
    .unwrap();

    let dir = TeamDirectory::load_from_file(file.path()).unwrap();
    assert_eq!(dir.teams_for_season(2025), vec!["Bay FC"]);
    assert_eq!(dir.teams_for_season(2026), vec!["Boston Legacy FC"]);
}

#[test]
fn test_team_directory_rejects_inverted_range() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[{{"team": "Bay FC", "first_season": 2025, "last_season": 2024}}]"#
    )
    .unwrap();
    assert!(TeamDirectory::load_from_file(file.path()).is_err());
}

#[test]
fn test_builtin_directory_order() {
    let dir = TeamDirectory::default();
    let teams = dir.teams_for_season(2016);
    assert_eq!(teams.first(), Some(&"Chicago Stars FC"));
    assert!(teams.contains(&"Western New York Flash"));
    assert!(!teams.contains(&"Bay FC"));
}
