mod common;

use common::{dataset, ShotBuilder};
use rstest::rstest;
use shotmap::dataset::{Column, ColumnSet};
use shotmap::filter::filter;
use shotmap::selection::{Half, Selection, ShotMode};

fn sample() -> shotmap::dataset::Dataset {
    dataset(vec![
        ShotBuilder::new("Orlando Pride", 2024).goal().build(),
        ShotBuilder::new("Orlando Pride", 2024).build(),
        ShotBuilder::new("Orlando Pride", 2024).blocked().period(2).build(),
        ShotBuilder::new("Orlando Pride", 2024).own_goal().build(),
        ShotBuilder::new("Orlando Pride", 2023).goal().build(),
        ShotBuilder::new("Portland Thorns FC", 2024).goal().build(),
    ])
}

#[rstest]
#[case("Orlando Pride", 2024, ShotMode::AllShots, 4)]
#[case("Orlando Pride", 2024, ShotMode::Goals, 1)]
#[case("Orlando Pride", 2023, ShotMode::AllShots, 1)]
#[case("Portland Thorns FC", 2024, ShotMode::Goals, 1)]
#[case("Portland Thorns FC", 2013, ShotMode::AllShots, 0)]
#[case("Angel City FC", 2024, ShotMode::AllShots, 0)]
fn test_filter_row_counts(
    #[case] team: &str,
    #[case] season: i32,
    #[case] mode: ShotMode,
    #[case] expected: usize,
) {
    let ds = sample();
    let sel = Selection::new(season, team, mode, Half::First);
    assert_eq!(filter(&ds, &sel).len(), expected);
}

#[test]
fn test_filter_ignores_half() {
    let ds = sample();
    let first = filter(&ds, &Selection::new(2024, "Orlando Pride", ShotMode::AllShots, Half::First));
    let second = filter(
        &ds,
        &Selection::new(2024, "Orlando Pride", ShotMode::AllShots, Half::Second),
    );
    assert_eq!(first.len(), second.len());
}

#[test]
fn test_goals_mode_excludes_own_goals() {
    let ds = sample();
    let view = filter(&ds, &Selection::new(2024, "Orlando Pride", ShotMode::Goals, Half::First));
    assert!(view
        .rows
        .iter()
        .all(|r| r.event.is_goal() && !r.event.is_own_goal()));
}

#[test]
fn test_filter_projects_available_columns_only() {
    let mut ds = sample();
    ds.columns = ColumnSet::from_headers(["goal", "own_goal", "team_id", "game_id"]);
    ds.columns.insert(Column::TeamName);
    ds.columns.insert(Column::SeasonName);

    let view = filter(&ds, &Selection::new(2024, "Orlando Pride", ShotMode::AllShots, Half::First));
    assert_eq!(
        view.columns,
        vec![Column::Goal, Column::OwnGoal, Column::TeamName, Column::SeasonName]
    );
    assert!(!view.has(Column::Head));
    assert!(!view.has(Column::TeamId));
}
