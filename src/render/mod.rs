pub mod canvas;
pub mod captions;
pub mod colormap;
pub mod kde;
pub mod pitch;

use crate::config::RenderParams;
use crate::dataset::ShotEvent;
use crate::error::SmResult;
use crate::selection::{display_team, Half, ShotMode};
use canvas::{Canvas, Viewport, WHITE};
use captions::Fonts;
use image::RgbImage;
use kde::{band_of, iso_levels, Degenerate, GaussianKde};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Bandwidths of padding around the data when locating density levels.
const SUPPORT_CUT: f64 = 3.0;

/// What happened to the density overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DensityLayer {
    Drawn { levels: Vec<f64> },
    Skipped(Degenerate),
}

impl DensityLayer {
    pub fn is_drawn(&self) -> bool {
        matches!(self, DensityLayer::Drawn { .. })
    }
}

/// A finished heatmap: the captioned raster plus the caption text.
pub struct Heatmap {
    pub title: String,
    pub subtitle: String,
    pub image: RgbImage,
    pub points: usize,
    pub density: DensityLayer,
}

impl Heatmap {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SmResult<()> {
        self.image.save(path.as_ref())?;
        info!("🖼️  Heatmap written to {}", path.as_ref().display());
        Ok(())
    }
}

pub fn title(team: &str, season: i32, half: Half, mode: ShotMode) -> String {
    format!(
        "{} {} {} Half {} Heatmap",
        display_team(team),
        season,
        half,
        mode.noun()
    )
}

pub fn subtitle(half: Half, mode: ShotMode) -> String {
    format!("Visualizing {} Half {}", half, mode.plural())
}

/// Draws shot-location heatmaps over a half-field diagram.
pub struct Renderer {
    params: RenderParams,
    fonts: Fonts,
}

impl Renderer {
    pub fn new(params: RenderParams) -> SmResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            fonts: Fonts::embedded()?,
        })
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Renders the events of one half.
    ///
    /// Events from the other half, and events without a usable location, do
    /// not contribute. Fewer than two usable points, or points with no spread,
    /// produce the field alone.
    pub fn render<'a, I>(
        &self,
        events: I,
        team: &str,
        season: i32,
        half: Half,
        mode: ShotMode,
    ) -> SmResult<Heatmap>
    where
        I: IntoIterator<Item = &'a ShotEvent>,
    {
        let p = &self.params;
        let points: Vec<(f64, f64)> = events
            .into_iter()
            .filter(|e| e.period_id == Some(half.period_id()))
            .filter_map(ShotEvent::drawing_point)
            .collect();
        let n_points = points.len();
        debug!("Rendering {} points for {} half", n_points, half);

        let view = Viewport::with_width(pitch::VIEW_X, pitch::VIEW_Y, p.width);
        let line_px = p.line_width * p.width as f64 / 1200.0;
        let mut canvas = Canvas::new(view, WHITE);

        pitch::draw_surface(&mut canvas, line_px);

        let density = match GaussianKde::new(points, p.bw_adjust) {
            Ok(kde) => {
                let levels = self.paint_density(&mut canvas, &kde);
                DensityLayer::Drawn { levels }
            }
            Err(reason) => {
                warn!("Density layer skipped: {}", reason);
                DensityLayer::Skipped(reason)
            }
        };

        pitch::draw_markings(&mut canvas, line_px);

        let title = title(team, season, half, mode);
        let subtitle = subtitle(half, mode);
        let image = captions::with_captions(&canvas.into_image(), &self.fonts, &title, &subtitle);

        Ok(Heatmap {
            title,
            subtitle,
            image,
            points: n_points,
            density,
        })
    }

    fn paint_density(&self, canvas: &mut Canvas, kde: &GaussianKde) -> Vec<f64> {
        let p = &self.params;

        // levels come from the full support so mass outside the view still counts
        let support = kde.support_grid(p.grid_size, SUPPORT_CUT);
        let levels = iso_levels(&support.values, p.levels, p.thresh);
        let bands = levels.len().saturating_sub(1).max(1);

        let view = canvas.view;
        let ny = ((p.grid_size as f64) * (view.y.1 - view.y.0) / (view.x.1 - view.x.0))
            .ceil()
            .max(2.0) as usize;
        let surface = kde.grid(view.x, view.y, p.grid_size, ny);

        for py in 0..view.height {
            for px in 0..view.width {
                let (fx, fy) = view.to_field(px, py);
                if !pitch::in_play(fx, fy) {
                    continue;
                }
                if let Some(band) = band_of(&levels, surface.sample(fx, fy)) {
                    let t = if bands > 1 {
                        band as f64 / (bands - 1) as f64
                    } else {
                        1.0
                    };
                    canvas.blend(px as i64, py as i64, p.cmap.sample(t), p.alpha);
                }
            }
        }
        levels
    }
}
