use super::canvas::{BLACK, WHITE};
use crate::error::{ShotMapError, SmResult};
use image::{imageops, Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use rusttype::{Font, Scale};

const TITLE_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");
const BODY_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const SUBTITLE_GRAY: Rgb<u8> = Rgb([128, 128, 128]);

/// Typefaces compiled into the binary for heatmap captions.
pub struct Fonts {
    title: Font<'static>,
    body: Font<'static>,
}

impl Fonts {
    pub fn embedded() -> SmResult<Self> {
        let load = |name: &str, bytes: &'static [u8]| {
            Font::try_from_bytes(bytes)
                .ok_or_else(|| ShotMapError::Font(format!("{} is not a usable font", name)))
        };
        Ok(Self {
            title: load("DejaVuSans-Bold", TITLE_FONT)?,
            body: load("DejaVuSans", BODY_FONT)?,
        })
    }
}

/// Height in pixels of the caption band above a field of `width` pixels.
pub fn band_height(width: u32) -> u32 {
    (width as f64 * 0.09).round() as u32
}

/// Places `field` under a white band carrying the title and subtitle, each
/// centred horizontally.
pub fn with_captions(field: &RgbImage, fonts: &Fonts, title: &str, subtitle: &str) -> RgbImage {
    let (width, field_h) = field.dimensions();
    let band = band_height(width);
    let mut out = RgbImage::from_pixel(width, band + field_h, WHITE);
    imageops::replace(&mut out, field, 0, band as i64);

    let w = width as f32;
    draw_centred(
        &mut out,
        &fonts.title,
        Scale::uniform(w * 0.03),
        (band as f32 * 0.12).round() as i32,
        BLACK,
        title,
    );
    draw_centred(
        &mut out,
        &fonts.body,
        Scale::uniform(w * 0.022),
        (band as f32 * 0.58).round() as i32,
        SUBTITLE_GRAY,
        subtitle,
    );
    out
}

fn draw_centred(
    img: &mut RgbImage,
    font: &Font<'static>,
    scale: Scale,
    top: i32,
    color: Rgb<u8>,
    text: &str,
) {
    let (text_w, _) = text_size(scale, font, text);
    let x = ((img.width() as i32 - text_w) / 2).max(0);
    draw_text_mut(img, color, x, top, scale, font, text);
}
