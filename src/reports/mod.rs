use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use shotmap::dashboard::Summary;
use shotmap::metrics::SummaryMetrics;
use shotmap::render::{DensityLayer, Heatmap};
use shotmap::selectors::TeamDirectory;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Rows of the insights panel, in display order. Metrics without a value are
/// left out.
pub fn insight_rows(m: &SummaryMetrics) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(v) = m.avg_distance_yds {
        rows.push(("Avg. Shot Distance", format!("{:.1} yds", v)));
    }
    if let Some(v) = m.common_distance_yds {
        rows.push(("Most Common Shot Yard", format!("{:.1} yds", v)));
    }
    if let Some(v) = m.avg_xg {
        rows.push(("Avg. xG per Shot (Expected Goals)", format!("{:.2}", v)));
    }
    if let Some(v) = m.goal_pct {
        rows.push(("Goal Percentage", format!("{:.1}%", v)));
    }
    if let Some(v) = m.header_pct {
        rows.push(("Headers", format!("{:.1}%", v)));
    }
    if let Some(v) = m.shot_accuracy_pct {
        rows.push(("Shot Accuracy", format!("{:.1}%", v)));
    }
    if let Some(v) = m.dominant_assist {
        rows.push(("Most Common Assist Type", v.to_string()));
    }
    if let Some(v) = m.avg_game_minute {
        rows.push(("Avg. Game Minute for Shots", format!("{:.1} min", v)));
    }
    if let Some(v) = m.dominant_half {
        rows.push(("Most Common Half", format!("Half {}", v)));
    }
    rows
}

pub fn print_summary(s: &Summary) {
    println!("\n{}", s.title);

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Visualization Summary").add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("Team"), Cell::new(&s.team_label)]);
    table.add_row(vec![Cell::new("Season"), Cell::new(s.selection.season)]);
    table.add_row(vec![Cell::new("Type"), Cell::new(s.selection.mode)]);
    table.add_row(vec![
        Cell::new(s.total_label).add_attribute(Attribute::Bold),
        Cell::new(s.metrics.total_events)
            .fg(Color::Cyan)
            .set_alignment(CellAlignment::Right),
    ]);
    match &s.logo {
        Some(path) => table.add_row(vec![Cell::new("Logo"), Cell::new(path.display())]),
        None => table.add_row(vec![
            Cell::new("Logo"),
            Cell::new(format!("Logo for {} not found.", s.selection.team)).fg(Color::Yellow),
        ]),
    };
    println!("{}", table);

    let rows = insight_rows(&s.metrics);
    if rows.is_empty() {
        println!("No additional metrics available.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Additional Insights").add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value)
                .fg(Color::Blue)
                .set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_heatmap(h: &Heatmap) {
    println!("\n{}", h.title);
    println!("{}", h.subtitle);
    match &h.density {
        DensityLayer::Drawn { levels } => println!(
            "{} points, {} density levels ({}x{} px)",
            h.points,
            levels.len(),
            h.image.width(),
            h.image.height()
        ),
        DensityLayer::Skipped(reason) => {
            println!("No density layer ({}). Field only.", reason)
        }
    }
}

pub fn print_seasons(seasons: &[(i32, usize)], directory: &TeamDirectory) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Season").add_attribute(Attribute::Bold),
        Cell::new("Shots"),
        Cell::new("Active Teams"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for &(season, shots) in seasons {
        let teams = directory.teams_for_season(season);
        let teams = if teams.is_empty() {
            "No Teams Available".to_string()
        } else {
            teams.join(", ")
        };
        table.add_row(vec![
            Cell::new(season).add_attribute(Attribute::Bold),
            Cell::new(shots),
            Cell::new(teams),
        ]);
    }
    println!("\n{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shotmap::metrics::AssistType;

    #[test]
    fn insight_rows_format_like_the_panel() {
        let m = SummaryMetrics {
            total_events: 4,
            avg_distance_yds: Some(14.26),
            common_distance_yds: Some(12.0),
            avg_xg: Some(0.1234),
            goal_pct: Some(25.0),
            dominant_assist: Some(AssistType::Crosses),
            dominant_half: Some(2),
            ..Default::default()
        };
        let rows = insight_rows(&m);
        assert_eq!(rows[0], ("Avg. Shot Distance", "14.3 yds".to_string()));
        assert_eq!(rows[2], ("Avg. xG per Shot (Expected Goals)", "0.12".to_string()));
        assert!(rows.contains(&("Most Common Assist Type", "Crosses".to_string())));
        assert!(rows.contains(&("Most Common Half", "Half 2".to_string())));
        assert!(!rows.iter().any(|(l, _)| *l == "Headers"));
    }
}
