use super::canvas::{Canvas, BLACK, WHITE};

/// Visible part of the field: the attacking half around the penalty area.
pub const VIEW_X: (f64, f64) = (10.0, 90.0);
pub const VIEW_Y: (f64, f64) = (60.0, 105.0);

/// An axis-aligned rectangle in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRect {
    pub origin: (f64, f64),
    pub size: (f64, f64),
}

const fn rect(x: f64, y: f64, w: f64, h: f64) -> FieldRect {
    FieldRect {
        origin: (x, y),
        size: (w, h),
    }
}

pub const TOUCHLINE: FieldRect = rect(0.0, 0.0, 100.0, 100.0);
pub const END_HALF: FieldRect = rect(0.0, 50.0, 100.0, 50.0);
pub const PENALTY_BOX: FieldRect = rect(21.0, 82.0, 58.0, 18.0);
pub const GOAL_BOX: FieldRect = rect(37.0, 94.0, 26.0, 6.0);
pub const GOAL: FieldRect = rect(45.0, 100.0, 10.0, 1.0);
/// Strip behind the goal line that hides density spill-over.
pub const BEYOND_GOAL_LINE: FieldRect = rect(0.0, 100.0, 100.0, 10.0);

/// Elliptical arc in field units, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldArc {
    pub center: (f64, f64),
    pub radii: (f64, f64),
    pub from_deg: f64,
    pub to_deg: f64,
}

pub const PENALTY_ARC: FieldArc = FieldArc {
    center: (50.0, 88.0),
    radii: (14.0, 9.0),
    from_deg: 210.0,
    to_deg: 330.0,
};

impl FieldArc {
    pub fn points(&self, segments: usize) -> Vec<(f64, f64)> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|k| {
                let deg = self.from_deg + (self.to_deg - self.from_deg) * k as f64 / segments as f64;
                let rad = deg.to_radians();
                (
                    self.center.0 + self.radii.0 * rad.cos(),
                    self.center.1 + self.radii.1 * rad.sin(),
                )
            })
            .collect()
    }
}

/// Whether a field point lies inside the live playing area.
pub fn in_play(x: f64, y: f64) -> bool {
    (0.0..=100.0).contains(&x) && (0.0..=100.0).contains(&y)
}

/// Pitch surface drawn underneath the density layer.
pub fn draw_surface(canvas: &mut Canvas, line_px: f64) {
    canvas.fill_rect(TOUCHLINE.origin, TOUCHLINE.size, WHITE);
    canvas.stroke_rect(TOUCHLINE.origin, TOUCHLINE.size, line_px * 1.25, BLACK);
}

/// Mask and line markings drawn over the density layer.
pub fn draw_markings(canvas: &mut Canvas, line_px: f64) {
    canvas.fill_rect(BEYOND_GOAL_LINE.origin, BEYOND_GOAL_LINE.size, WHITE);

    for r in [END_HALF, PENALTY_BOX, GOAL_BOX, GOAL] {
        canvas.stroke_rect(r.origin, r.size, line_px, BLACK);
    }
    canvas.stroke_polyline(&PENALTY_ARC.points(96), line_px, BLACK);
}
