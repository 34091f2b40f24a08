use crate::dataset::{Column, JoinedShot, ShotEvent};
use crate::filter::ShotView;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssistType {
    #[serde(rename = "Through Balls")]
    ThroughBalls,
    #[serde(rename = "Crosses")]
    Crosses,
}

impl fmt::Display for AssistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistType::ThroughBalls => write!(f, "Through Balls"),
            AssistType::Crosses => write!(f, "Crosses"),
        }
    }
}

/// The summary panel. `None` means the metric could not be computed, either
/// because the view is empty or the source lacks the column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_events: usize,
    pub avg_distance_yds: Option<f64>,
    pub common_distance_yds: Option<f64>,
    pub avg_xg: Option<f64>,
    pub goal_pct: Option<f64>,
    pub header_pct: Option<f64>,
    pub shot_accuracy_pct: Option<f64>,
    pub dominant_assist: Option<AssistType>,
    pub avg_game_minute: Option<f64>,
    pub dominant_half: Option<u8>,
}

impl SummaryMetrics {
    pub fn has_any(&self) -> bool {
        self.avg_distance_yds.is_some()
            || self.common_distance_yds.is_some()
            || self.avg_xg.is_some()
            || self.goal_pct.is_some()
            || self.header_pct.is_some()
            || self.shot_accuracy_pct.is_some()
            || self.dominant_assist.is_some()
            || self.avg_game_minute.is_some()
            || self.dominant_half.is_some()
    }
}

/// Arithmetic mean; `None` for an empty input.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Most frequent value. Ties resolve to the smallest value.
pub fn mode_f64<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    let mut best: Option<(f64, usize)> = None;
    let mut i = 0;
    while i < sorted.len() {
        let v = sorted[i];
        let run = sorted[i..].iter().take_while(|&&x| x == v).count();
        // strictly greater keeps the earlier (smaller) value on a tie
        if best.map_or(true, |(_, n)| run > n) {
            best = Some((v, run));
        }
        i += run;
    }
    best.map(|(v, _)| v)
}

/// Most frequent value. Ties resolve to the smallest value.
pub fn mode_ord<T: Ord + Copy, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut best: Option<(T, usize)> = None;
    for (v, n) in counts {
        if best.map_or(true, |(_, b)| n > b) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| v)
}

/// `100 * count / total`, exactly zero when there is nothing to divide by.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

/// Strictly more through balls than crosses, otherwise crosses.
pub fn dominant_assist(through_balls: usize, crosses: usize) -> AssistType {
    if through_balls > crosses {
        AssistType::ThroughBalls
    } else {
        AssistType::Crosses
    }
}

fn count_flag(rows: &[&JoinedShot], flag: fn(&ShotEvent) -> Option<bool>) -> usize {
    rows.iter().filter(|r| flag(&r.event).unwrap_or(false)).count()
}

pub fn avg_distance(view: &ShotView) -> Option<f64> {
    if view.is_empty() || !view.has(Column::DistanceFromGoalYds) {
        return None;
    }
    mean(view.rows.iter().filter_map(|r| r.event.distance_from_goal_yds))
}

pub fn common_distance(view: &ShotView) -> Option<f64> {
    if view.is_empty() || !view.has(Column::DistanceFromGoalYds) {
        return None;
    }
    mode_f64(view.rows.iter().filter_map(|r| r.event.distance_from_goal_yds))
}

pub fn avg_xg(view: &ShotView) -> Option<f64> {
    if view.is_empty() || !view.has(Column::ShotXg) {
        return None;
    }
    mean(view.rows.iter().filter_map(|r| r.event.shot_xg))
}

pub fn goal_pct(view: &ShotView) -> Option<f64> {
    if view.is_empty() || !view.has(Column::Goal) {
        return None;
    }
    Some(percentage(count_flag(&view.rows, |e| e.goal), view.len()))
}

pub fn header_pct(view: &ShotView) -> Option<f64> {
    if view.is_empty() || !view.has(Column::Head) {
        return None;
    }
    Some(percentage(count_flag(&view.rows, |e| e.head), view.len()))
}

/// Goals plus blocked attempts over all attempts. A row flagged both ways is
/// counted once so the result stays within 0..=100.
pub fn shot_accuracy(view: &ShotView) -> Option<f64> {
    if view.is_empty() || !view.has_all(&[Column::Goal, Column::Blocked]) {
        return None;
    }
    let on_target = view
        .rows
        .iter()
        .filter(|r| r.event.is_goal() || r.event.blocked.unwrap_or(false))
        .count();
    Some(percentage(on_target, view.len()))
}

pub fn assist_type(view: &ShotView) -> Option<AssistType> {
    if view.is_empty() || !view.has_all(&[Column::AssistThroughBall, Column::AssistCross]) {
        return None;
    }
    Some(dominant_assist(
        count_flag(&view.rows, |e| e.assist_through_ball),
        count_flag(&view.rows, |e| e.assist_cross),
    ))
}

pub fn avg_game_minute(view: &ShotView) -> Option<f64> {
    if view.is_empty() || !view.has(Column::GameMinute) {
        return None;
    }
    mean(view.rows.iter().filter_map(|r| r.event.game_minute))
}

pub fn dominant_half(view: &ShotView) -> Option<u8> {
    if view.is_empty() || !view.has(Column::PeriodId) {
        return None;
    }
    mode_ord(view.rows.iter().filter_map(|r| r.event.period_id))
}

pub fn summarize(view: &ShotView) -> SummaryMetrics {
    SummaryMetrics {
        total_events: view.len(),
        avg_distance_yds: avg_distance(view),
        common_distance_yds: common_distance(view),
        avg_xg: avg_xg(view),
        goal_pct: goal_pct(view),
        header_pct: header_pct(view),
        shot_accuracy_pct: shot_accuracy(view),
        dominant_assist: assist_type(view),
        avg_game_minute: avg_game_minute(view),
        dominant_half: dominant_half(view),
    }
}
