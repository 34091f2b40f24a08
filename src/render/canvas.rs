use image::{DynamicImage, Pixel, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut, Blend,
    Canvas as _,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Maps field units onto raster pixels.
///
/// The vertical axis is inverted relative to a chart: larger field `y` is
/// drawn further down the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Equal-aspect viewport: height follows from width and the field extent.
    pub fn with_width(x: (f64, f64), y: (f64, f64), width: u32) -> Self {
        let aspect = (y.1 - y.0) / (x.1 - x.0);
        let height = ((width as f64) * aspect).round().max(1.0) as u32;
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn scale(&self) -> f64 {
        self.width as f64 / (self.x.1 - self.x.0)
    }

    pub fn to_px(&self, fx: f64, fy: f64) -> (f64, f64) {
        (
            (fx - self.x.0) / (self.x.1 - self.x.0) * self.width as f64,
            (fy - self.y.0) / (self.y.1 - self.y.0) * self.height as f64,
        )
    }

    /// Field coordinate at the centre of pixel `(px, py)`.
    pub fn to_field(&self, px: u32, py: u32) -> (f64, f64) {
        (
            self.x.0 + (px as f64 + 0.5) / self.width as f64 * (self.x.1 - self.x.0),
            self.y.0 + (py as f64 + 0.5) / self.height as f64 * (self.y.1 - self.y.0),
        )
    }
}

/// The raster surface for one render. Owned by a single render call and
/// handed over to the caller when finished.
///
/// Drawing goes through an alpha-blending target, so opaque markings replace
/// what is underneath and translucent density bands mix with it.
pub struct Canvas {
    surface: Blend<RgbaImage>,
    pub view: Viewport,
}

impl Canvas {
    pub fn new(view: Viewport, background: Rgb<u8>) -> Self {
        Self {
            surface: Blend(RgbaImage::from_pixel(
                view.width,
                view.height,
                background.to_rgba(),
            )),
            view,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        self.surface.0.get_pixel(x, y).to_rgb()
    }

    pub fn into_image(self) -> RgbImage {
        DynamicImage::ImageRgba8(self.surface.0).into_rgb8()
    }

    /// Composites `color` at `alpha` over pixel `(x, y)`; out-of-bounds is a
    /// no-op.
    pub fn blend(&mut self, x: i64, y: i64, color: Rgb<u8>, alpha: f64) {
        if x < 0 || y < 0 || x >= self.view.width as i64 || y >= self.view.height as i64 {
            return;
        }
        let [r, g, b] = color.0;
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.surface.draw_pixel(x as u32, y as u32, Rgba([r, g, b, a]));
    }

    /// Fills the pixel-space box spanned by two corners. Empty boxes draw
    /// nothing.
    fn fill_px_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        let (xa, xb) = (x0.min(x1).round() as i32, x0.max(x1).round() as i32);
        let (ya, yb) = (y0.min(y1).round() as i32, y0.max(y1).round() as i32);
        if xb <= xa || yb <= ya {
            return;
        }
        let rect = Rect::at(xa, ya).of_size((xb - xa) as u32, (yb - ya) as u32);
        draw_filled_rect_mut(&mut self.surface, rect, color.to_rgba());
    }

    /// Fills an axis-aligned rectangle given in field units.
    pub fn fill_rect(&mut self, origin: (f64, f64), size: (f64, f64), color: Rgb<u8>) {
        let (x0, y0) = self.view.to_px(origin.0, origin.1);
        let (x1, y1) = self.view.to_px(origin.0 + size.0, origin.1 + size.1);
        self.fill_px_rect(x0, y0, x1, y1, color);
    }

    /// Strokes the outline of a field-unit rectangle with a line `width` pixels
    /// thick, centred on the edge.
    pub fn stroke_rect(
        &mut self,
        origin: (f64, f64),
        size: (f64, f64),
        width: f64,
        color: Rgb<u8>,
    ) {
        let (x0, y0) = self.view.to_px(origin.0, origin.1);
        let (x1, y1) = self.view.to_px(origin.0 + size.0, origin.1 + size.1);
        let hw = (width / 2.0).max(0.5);
        self.fill_px_rect(x0 - hw, y0 - hw, x1 + hw, y0 + hw, color);
        self.fill_px_rect(x0 - hw, y1 - hw, x1 + hw, y1 + hw, color);
        self.fill_px_rect(x0 - hw, y0 - hw, x0 + hw, y1 + hw, color);
        self.fill_px_rect(x1 - hw, y0 - hw, x1 + hw, y1 + hw, color);
    }

    /// Strokes a polyline given in field units: each segment is a quad of the
    /// line width, joints are rounded.
    pub fn stroke_polyline(&mut self, points: &[(f64, f64)], width: f64, color: Rgb<u8>) {
        let color = color.to_rgba();
        let hw = width / 2.0;
        let px: Vec<(f64, f64)> = points.iter().map(|&(x, y)| self.view.to_px(x, y)).collect();

        for seg in px.windows(2) {
            let ((ax, ay), (bx, by)) = (seg[0], seg[1]);
            let len = (bx - ax).hypot(by - ay);
            if len == 0.0 {
                continue;
            }
            let (nx, ny) = (-(by - ay) / len * hw, (bx - ax) / len * hw);
            let quad = [
                Point::new((ax + nx).round() as i32, (ay + ny).round() as i32),
                Point::new((bx + nx).round() as i32, (by + ny).round() as i32),
                Point::new((bx - nx).round() as i32, (by - ny).round() as i32),
                Point::new((ax - nx).round() as i32, (ay - ny).round() as i32),
            ];
            if quad[0] == quad[3] || quad[1] == quad[2] {
                draw_line_segment_mut(
                    &mut self.surface,
                    (ax as f32, ay as f32),
                    (bx as f32, by as f32),
                    color,
                );
            } else {
                draw_polygon_mut(&mut self.surface, &quad, color);
            }
        }

        let radius = hw.round() as i32;
        if radius >= 1 {
            for &(x, y) in &px {
                draw_filled_circle_mut(
                    &mut self.surface,
                    (x.round() as i32, y.round() as i32),
                    radius,
                    color,
                );
            }
        }
    }
}
