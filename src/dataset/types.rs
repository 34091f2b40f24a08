use super::columns::ColumnSet;
use super::de;
use serde::{Deserialize, Serialize};

/// One shot attempt as exported by the league data API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotEvent {
    pub team_id: String,
    pub game_id: String,

    #[serde(default, deserialize_with = "de::opt_u8")]
    pub period_id: Option<u8>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub shot_location_x: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub shot_location_y: Option<f64>,

    #[serde(default, deserialize_with = "de::opt_bool")]
    pub goal: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool")]
    pub own_goal: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool")]
    pub blocked: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool")]
    pub head: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool")]
    pub assist_through_ball: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool")]
    pub assist_cross: Option<bool>,

    #[serde(default, deserialize_with = "de::opt_f64")]
    pub distance_from_goal_yds: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub shot_xg: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub shot_psxg: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub game_minute: Option<f64>,

    #[serde(default, deserialize_with = "de::opt_u32")]
    pub home_score: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub away_score: Option<u32>,

    #[serde(default, deserialize_with = "de::opt_f64")]
    pub blocked_x: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub blocked_y: Option<f64>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub shooter_player_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub assist_player_id: Option<String>,
}

impl ShotEvent {
    pub fn is_goal(&self) -> bool {
        self.goal.unwrap_or(false)
    }

    pub fn is_own_goal(&self) -> bool {
        self.own_goal.unwrap_or(false)
    }

    /// Location in drawing space: data x runs along the pitch length, so it
    /// becomes the vertical axis of the half-field view.
    pub fn drawing_point(&self) -> Option<(f64, f64)> {
        match (self.shot_location_y, self.shot_location_x) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: String,
    pub team_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: String,
    #[serde(default, deserialize_with = "de::opt_season")]
    pub season_name: Option<i32>,
}

/// A shot with its team name and season resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedShot {
    #[serde(flatten)]
    pub event: ShotEvent,
    pub team_name: String,
    pub season_name: i32,
}

/// Bookkeeping from the two left joins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    pub shots_in: usize,
    pub joined: usize,
    pub unmatched_team: usize,
    pub unmatched_season: usize,
    pub duplicate_team_ids: usize,
    pub duplicate_game_ids: usize,
}

impl JoinReport {
    pub fn dropped(&self) -> usize {
        self.unmatched_team + self.unmatched_season
    }
}

/// The joined, read-only snapshot every request works against.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub shots: Vec<JoinedShot>,
    pub columns: ColumnSet,
    pub report: JoinReport,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }
}
