use crate::dataset::Dataset;
use crate::error::{ShotMapError, SmResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Inclusive range of seasons a club played in the league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeasons {
    pub team: String,
    pub first_season: i32,
    pub last_season: i32,
}

impl TeamSeasons {
    pub fn active_in(&self, season: i32) -> bool {
        self.first_season <= season && season <= self.last_season
    }
}

/// Club directory used by the team selector. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDirectory {
    pub teams: Vec<TeamSeasons>,
}

const BUILTIN: &[(&str, i32, i32)] = &[
    ("Chicago Stars FC", 2013, 2024),
    ("Bay FC", 2024, 2024),
    ("Boston Breakers", 2013, 2017),
    ("Houston Dash", 2014, 2024),
    ("Kansas City Current", 2021, 2024),
    ("NJ/NY Gotham FC", 2013, 2024),
    ("North Carolina Courage", 2017, 2024),
    ("Orlando Pride", 2016, 2024),
    ("Portland Thorns FC", 2013, 2024),
    ("Racing Louisville FC", 2021, 2024),
    ("San Diego Wave FC", 2022, 2024),
    ("Washington Spirit", 2013, 2024),
    ("Western New York Flash", 2013, 2016),
    ("Seattle Reign FC", 2013, 2018),
    ("Utah Royals FC", 2018, 2020),
    ("Angel City FC", 2022, 2024),
    ("FC Kansas City", 2013, 2017),
];

impl Default for TeamDirectory {
    fn default() -> Self {
        Self {
            teams: BUILTIN
                .iter()
                .map(|&(team, first_season, last_season)| TeamSeasons {
                    team: team.to_string(),
                    first_season,
                    last_season,
                })
                .collect(),
        }
    }
}

impl TeamDirectory {
    /// Reads a JSON array of `{team, first_season, last_season}` objects.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SmResult<Self> {
        let content = fs::read_to_string(path)?;
        let teams: Vec<TeamSeasons> = serde_json::from_str(&content)?;
        if let Some(bad) = teams.iter().find(|t| t.first_season > t.last_season) {
            return Err(ShotMapError::Validation(format!(
                "Team '{}' has first season {} after last season {}",
                bad.team, bad.first_season, bad.last_season
            )));
        }
        Ok(Self { teams })
    }

    /// Teams active in `season`, in directory order.
    pub fn teams_for_season(&self, season: i32) -> Vec<&str> {
        self.teams
            .iter()
            .filter(|t| t.active_in(season))
            .map(|t| t.team.as_str())
            .collect()
    }
}

/// Distinct seasons present in the dataset, ascending.
pub fn season_list(dataset: &Dataset) -> Vec<i32> {
    dataset
        .shots
        .iter()
        .map(|s| s.season_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_directory_filters_by_season() {
        let dir = TeamDirectory::default();
        let t2016 = dir.teams_for_season(2016);
        assert!(t2016.contains(&"Western New York Flash"));
        assert!(!t2016.contains(&"Bay FC"));
        assert_eq!(dir.teams_for_season(2024)[0], "Chicago Stars FC");
        assert!(dir.teams_for_season(1999).is_empty());
    }
}
