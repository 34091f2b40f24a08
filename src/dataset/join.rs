use super::columns::{Column, ColumnSet};
use super::types::{Dataset, Game, JoinReport, JoinedShot, ShotEvent, Team};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::warn;

/// Attaches team name and season to every shot.
///
/// Shots whose team or game id does not resolve are dropped and counted in
/// the report rather than carried forward with empty fields. Duplicate ids in
/// the lookup tables keep their first row.
pub fn join(
    shots: Vec<ShotEvent>,
    shot_columns: ColumnSet,
    teams: &[Team],
    games: &[Game],
) -> Dataset {
    let mut report = JoinReport {
        shots_in: shots.len(),
        ..Default::default()
    };

    let mut team_names: HashMap<&str, &str> = HashMap::with_capacity(teams.len());
    for t in teams {
        match team_names.entry(t.team_id.as_str()) {
            Entry::Vacant(v) => {
                v.insert(t.team_name.as_str());
            }
            Entry::Occupied(_) => report.duplicate_team_ids += 1,
        }
    }

    let mut seasons: HashMap<&str, Option<i32>> = HashMap::with_capacity(games.len());
    for g in games {
        match seasons.entry(g.game_id.as_str()) {
            Entry::Vacant(v) => {
                v.insert(g.season_name);
            }
            Entry::Occupied(_) => report.duplicate_game_ids += 1,
        }
    }

    let mut joined = Vec::with_capacity(shots.len());
    for event in shots {
        let Some(team_name) = team_names.get(event.team_id.as_str()) else {
            report.unmatched_team += 1;
            continue;
        };
        let Some(season_name) = seasons.get(event.game_id.as_str()).copied().flatten() else {
            report.unmatched_season += 1;
            continue;
        };
        joined.push(JoinedShot {
            team_name: team_name.to_string(),
            season_name,
            event,
        });
    }
    report.joined = joined.len();

    if report.dropped() > 0 {
        warn!(
            "Dropped {} shots during join ({} without team, {} without season).",
            report.dropped(),
            report.unmatched_team,
            report.unmatched_season
        );
    }
    if report.duplicate_team_ids > 0 || report.duplicate_game_ids > 0 {
        warn!(
            "Duplicate ids ignored: {} team, {} game.",
            report.duplicate_team_ids, report.duplicate_game_ids
        );
    }

    let mut columns = shot_columns;
    columns.insert(Column::TeamName);
    columns.insert(Column::SeasonName);

    Dataset {
        shots: joined,
        columns,
        report,
    }
}
