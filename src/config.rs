use crate::error::{ShotMapError, SmResult};
use crate::render::colormap::ColorMap;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub data: DataPaths,
    #[command(flatten)]
    pub render: RenderParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    #[arg(long, default_value = "data/shots_data_2024.csv")]
    pub shots: PathBuf,
    #[arg(long, default_value = "data/games_ids_2024.csv")]
    pub games: PathBuf,
    #[arg(long, default_value = "data/team_ids_2024.csv")]
    pub teams: PathBuf,
    #[arg(long, default_value = "Logos")]
    pub logo_dir: PathBuf,

    // Replaces the built-in club directory
    #[arg(long)]
    pub team_seasons: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            shots: PathBuf::from("data/shots_data_2024.csv"),
            games: PathBuf::from("data/games_ids_2024.csv"),
            teams: PathBuf::from("data/team_ids_2024.csv"),
            logo_dir: PathBuf::from("Logos"),
            team_seasons: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    #[arg(long, default_value = "turbo")]
    pub cmap: ColorMap,
    #[arg(long, default_value_t = 0.3)]
    pub bw_adjust: f64,
    #[arg(long, default_value_t = 10)]
    pub levels: usize,

    // Share of the density mass left outside the lowest band
    #[arg(long, default_value_t = 0.05)]
    pub thresh: f64,
    #[arg(long, default_value_t = 0.8)]
    pub alpha: f64,

    #[arg(long, default_value_t = 1200)]
    pub width: u32,
    #[arg(long, default_value_t = 200)]
    pub grid_size: usize,
    #[arg(long, default_value_t = 6.0)]
    pub line_width: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            cmap: ColorMap::Turbo,
            bw_adjust: 0.3,
            levels: 10,
            thresh: 0.05,
            alpha: 0.8,
            width: 1200,
            grid_size: 200,
            line_width: 6.0,
        }
    }
}

impl RenderParams {
    pub fn validate(&self) -> SmResult<()> {
        let bad = |msg: String| Err(ShotMapError::Config(msg));
        if !(self.bw_adjust.is_finite() && self.bw_adjust > 0.0) {
            return bad(format!("bw_adjust must be positive (got {})", self.bw_adjust));
        }
        if self.levels == 0 {
            return bad("levels must be at least 1".to_string());
        }
        if !(0.0..1.0).contains(&self.thresh) {
            return bad(format!("thresh must be in [0, 1) (got {})", self.thresh));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return bad(format!("alpha must be in [0, 1] (got {})", self.alpha));
        }
        if self.width < 80 || self.width > 16_000 {
            return bad(format!("width must be between 80 and 16000 (got {})", self.width));
        }
        if self.grid_size < 2 {
            return bad(format!("grid_size must be at least 2 (got {})", self.grid_size));
        }
        if !(self.line_width.is_finite() && self.line_width >= 0.0) {
            return bad(format!("line_width must be non-negative (got {})", self.line_width));
        }
        Ok(())
    }
}

impl Config {
    /// Reads a JSON config. Missing keys take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SmResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ShotMapError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every value the user typed on the command line over `self`,
    /// leaving file-provided values in place for flags left at their default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.data.merge_from_cli(&cli.data, matches);
        self.render.merge_from_cli(&cli.render, matches);
    }
}

impl DataPaths {
    /// `matches` must come from a command that flattens `DataPaths`.
    pub fn merge_from_cli(&mut self, cli: &DataPaths, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(shots);
        update_if_present!(games);
        update_if_present!(teams);
        update_if_present!(logo_dir);
        update_if_present!(team_seasons);
    }
}

impl RenderParams {
    /// `matches` must come from a command that flattens `RenderParams`.
    pub fn merge_from_cli(&mut self, cli: &RenderParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(cmap);
        update_if_present!(bw_adjust);
        update_if_present!(levels);
        update_if_present!(thresh);
        update_if_present!(alpha);
        update_if_present!(width);
        update_if_present!(grid_size);
        update_if_present!(line_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        RenderParams::default().validate().unwrap();
    }

    #[test]
    fn bad_parameters_are_config_errors() {
        let cases = [
            RenderParams {
                bw_adjust: 0.0,
                ..Default::default()
            },
            RenderParams {
                levels: 0,
                ..Default::default()
            },
            RenderParams {
                alpha: 1.5,
                ..Default::default()
            },
            RenderParams {
                grid_size: 1,
                ..Default::default()
            },
        ];
        for p in cases {
            assert!(p.validate().unwrap_err().is_config());
        }
    }
}
