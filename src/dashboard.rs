use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::SmResult;
use crate::filter::filter;
use crate::metrics::{summarize, SummaryMetrics};
use crate::render::{Heatmap, Renderer};
use crate::selection::Selection;
use crate::{assets, render};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Everything one request produces, apart from the raster.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub selection: Selection,
    pub team_label: String,
    pub title: String,
    pub total_label: &'static str,
    pub metrics: SummaryMetrics,
    pub logo: Option<PathBuf>,
}

pub struct DashboardView {
    pub summary: Summary,
    pub heatmap: Option<Heatmap>,
}

/// Filter, summarise and (optionally) render one selection.
///
/// Nothing here outlives the call: the dataset is borrowed and the view is
/// dropped once metrics and raster are built.
pub fn build(
    dataset: &Dataset,
    selection: &Selection,
    config: &Config,
    with_heatmap: bool,
) -> SmResult<DashboardView> {
    let renderer = if with_heatmap {
        Some(Renderer::new(config.render.clone())?)
    } else {
        None
    };

    let view = filter(dataset, selection);
    info!(
        "🔎 {} {} {}: {} rows",
        selection.team_label(),
        selection.season,
        selection.mode,
        view.len()
    );

    let metrics = summarize(&view);
    let heatmap = match renderer {
        Some(r) => Some(r.render(
            view.rows.iter().map(|s| &s.event),
            &selection.team,
            selection.season,
            selection.half,
            selection.mode,
        )?),
        None => None,
    };

    let summary = Summary {
        selection: selection.clone(),
        team_label: selection.team_label(),
        title: render::title(
            &selection.team,
            selection.season,
            selection.half,
            selection.mode,
        ),
        total_label: selection.mode.total_label(),
        metrics,
        logo: assets::find_logo(&config.data.logo_dir, &selection.team),
    };

    Ok(DashboardView { summary, heatmap })
}
