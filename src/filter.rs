use crate::dataset::{Column, Dataset, JoinedShot};
use crate::selection::{Selection, ShotMode};

/// A transient, read-only slice of the dataset for one request.
///
/// `columns` is the allow-list intersected with what the source provided;
/// consumers must treat anything outside it as absent.
#[derive(Debug, Clone)]
pub struct ShotView<'a> {
    pub rows: Vec<&'a JoinedShot>,
    pub columns: Vec<Column>,
}

impl<'a> ShotView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has(&self, col: Column) -> bool {
        self.columns.contains(&col)
    }

    pub fn has_all(&self, cols: &[Column]) -> bool {
        cols.iter().all(|c| self.has(*c))
    }
}

pub fn matches(shot: &JoinedShot, sel: &Selection) -> bool {
    if shot.season_name != sel.season || shot.team_name != sel.team {
        return false;
    }
    match sel.mode {
        ShotMode::AllShots => true,
        ShotMode::Goals => shot.event.is_goal() && !shot.event.is_own_goal(),
    }
}

/// Narrows the dataset to the selected season, team and mode.
///
/// The half is deliberately left alone: the summary panel describes the whole
/// match selection and only the heatmap is split by half.
pub fn filter<'a>(dataset: &'a Dataset, sel: &Selection) -> ShotView<'a> {
    ShotView {
        rows: dataset.shots.iter().filter(|s| matches(s, sel)).collect(),
        columns: dataset.columns.project(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ColumnSet, ShotEvent};
    use crate::selection::Half;

    fn row(team: &str, season: i32, goal: bool, own_goal: bool) -> JoinedShot {
        JoinedShot {
            event: ShotEvent {
                goal: Some(goal),
                own_goal: Some(own_goal),
                ..Default::default()
            },
            team_name: team.to_string(),
            season_name: season,
        }
    }

    #[test]
    fn goals_mode_excludes_own_goals() {
        let ds = Dataset {
            shots: vec![
                row("Bay FC", 2024, true, false),
                row("Bay FC", 2024, true, true),
                row("Bay FC", 2024, false, false),
                row("Bay FC", 2023, true, false),
            ],
            columns: ColumnSet::all(),
            ..Default::default()
        };
        let sel = Selection::new(2024, "Bay FC", ShotMode::Goals, Half::First);
        let view = filter(&ds, &sel);
        assert_eq!(view.len(), 1);
        assert!(view.rows[0].event.is_goal());
        assert!(!view.rows[0].event.is_own_goal());
    }

    #[test]
    fn projection_drops_join_keys() {
        let ds = Dataset {
            columns: ColumnSet::all(),
            ..Default::default()
        };
        let view = filter(&ds, &Selection::new(2024, "x", ShotMode::AllShots, Half::First));
        assert!(view.is_empty());
        assert!(!view.has(Column::TeamId));
        assert!(!view.has(Column::GameId));
        assert!(view.has(Column::Goal));
    }
}
