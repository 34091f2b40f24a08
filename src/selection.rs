use crate::error::ShotMapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Whether the view covers every attempt or only scored goals.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ShotMode {
    #[default]
    #[strum(serialize = "all-shots", serialize = "all_shots", to_string = "All Shots")]
    AllShots,
    #[strum(serialize = "goals", to_string = "Goals")]
    Goals,
}

impl ShotMode {
    /// Singular noun used in the heatmap title.
    pub fn noun(self) -> &'static str {
        match self {
            ShotMode::AllShots => "Shot",
            ShotMode::Goals => "Goal",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            ShotMode::AllShots => "Shots",
            ShotMode::Goals => "Goals",
        }
    }

    pub fn total_label(self) -> &'static str {
        match self {
            ShotMode::AllShots => "Total Shots",
            ShotMode::Goals => "Total Goals",
        }
    }
}

/// Half of match play. Parsing anything that is not the first or second
/// half is a configuration error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    #[default]
    First,
    Second,
}

impl Half {
    pub fn period_id(self) -> u8 {
        match self {
            Half::First => 1,
            Half::Second => 2,
        }
    }

    pub fn from_period(period: u8) -> Result<Self, ShotMapError> {
        match period {
            1 => Ok(Half::First),
            2 => Ok(Half::Second),
            other => Err(ShotMapError::Config(format!(
                "Half must be either 'first' or 'second' (got period {}).",
                other
            ))),
        }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::First => write!(f, "First"),
            Half::Second => write!(f, "Second"),
        }
    }
}

impl FromStr for Half {
    type Err = ShotMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        let norm = norm.strip_suffix(" half").unwrap_or(&norm);
        match norm {
            "first" | "1" | "1st" => Ok(Half::First),
            "second" | "2" | "2nd" => Ok(Half::Second),
            _ => Err(ShotMapError::Config(format!(
                "Half must be either 'first' or 'second' (got '{}').",
                s
            ))),
        }
    }
}

/// One viewer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub season: i32,
    pub team: String,
    pub mode: ShotMode,
    pub half: Half,
}

impl Selection {
    pub fn new(season: i32, team: impl Into<String>, mode: ShotMode, half: Half) -> Self {
        Self {
            season,
            team: team.into(),
            mode,
            half,
        }
    }

    /// Team name as shown to the viewer.
    pub fn team_label(&self) -> String {
        display_team(&self.team)
    }
}

/// Team keys in some exports use underscores for spaces.
pub fn display_team(name: &str) -> String {
    name.replace('_', " ")
}
