use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Every shot-table column the dashboard knows about. Order follows the
/// projection allow-list, then the join keys.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Goal,
    OwnGoal,
    Blocked,
    DistanceFromGoalYds,
    ShotXg,
    ShotPsxg,
    AssistThroughBall,
    AssistCross,
    Head,
    GameMinute,
    PeriodId,
    HomeScore,
    AwayScore,
    ShotLocationX,
    ShotLocationY,
    BlockedX,
    BlockedY,
    TeamName,
    SeasonName,
    ShooterPlayerId,
    AssistPlayerId,
    TeamId,
    GameId,
}

/// Columns kept by the filter stage, in display order.
pub const ALLOW_LIST: [Column; 21] = [
    Column::Goal,
    Column::OwnGoal,
    Column::Blocked,
    Column::DistanceFromGoalYds,
    Column::ShotXg,
    Column::ShotPsxg,
    Column::AssistThroughBall,
    Column::AssistCross,
    Column::Head,
    Column::GameMinute,
    Column::PeriodId,
    Column::HomeScore,
    Column::AwayScore,
    Column::ShotLocationX,
    Column::ShotLocationY,
    Column::BlockedX,
    Column::BlockedY,
    Column::TeamName,
    Column::SeasonName,
    Column::ShooterPlayerId,
    Column::AssistPlayerId,
];

/// The set of columns actually present in a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSet(BTreeSet<Column>);

impl ColumnSet {
    pub fn all() -> Self {
        Self(Column::iter().collect())
    }

    /// Builds the set from a CSV header row. Unknown headers are ignored.
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self(
            headers
                .into_iter()
                .filter_map(|h| Column::from_str(h.trim()).ok())
                .collect(),
        )
    }

    pub fn contains(&self, col: Column) -> bool {
        self.0.contains(&col)
    }

    pub fn contains_all(&self, cols: &[Column]) -> bool {
        cols.iter().all(|c| self.0.contains(c))
    }

    pub fn insert(&mut self, col: Column) {
        self.0.insert(col);
    }

    /// Intersection with the allow-list, preserving allow-list order.
    pub fn project(&self) -> Vec<Column> {
        ALLOW_LIST
            .iter()
            .copied()
            .filter(|c| self.0.contains(c))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Column> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Column> for ColumnSet {
    fn from_iter<T: IntoIterator<Item = Column>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_map_to_known_columns_only() {
        let set = ColumnSet::from_headers(["team_id", " goal ", "mystery", "shot_xg"]);
        assert!(set.contains(Column::TeamId));
        assert!(set.contains(Column::Goal));
        assert!(set.contains(Column::ShotXg));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn projection_keeps_allow_list_order() {
        let set: ColumnSet = [Column::ShotXg, Column::TeamId, Column::Goal]
            .into_iter()
            .collect();
        assert_eq!(set.project(), vec![Column::Goal, Column::ShotXg]);
    }

    #[test]
    fn column_names_are_snake_case() {
        assert_eq!(Column::DistanceFromGoalYds.to_string(), "distance_from_goal_yds");
        assert_eq!(
            Column::from_str("assist_through_ball").unwrap(),
            Column::AssistThroughBall
        );
    }
}
