use image::Rgb;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Sequential colour scales for the density bands.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ColorMap {
    #[default]
    Turbo,
    Viridis,
    Magma,
    Inferno,
    Plasma,
}

const VIRIDIS: &[[u8; 3]] = &[
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [110, 206, 88],
    [181, 222, 43],
    [253, 231, 37],
];

const MAGMA: &[[u8; 3]] = &[
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const INFERNO: &[[u8; 3]] = &[
    [0, 0, 4],
    [31, 12, 72],
    [85, 15, 109],
    [136, 34, 106],
    [186, 54, 85],
    [227, 89, 51],
    [249, 140, 10],
    [249, 201, 50],
    [252, 255, 164],
];

const PLASMA: &[[u8; 3]] = &[
    [13, 8, 135],
    [84, 2, 163],
    [139, 10, 165],
    [185, 50, 137],
    [219, 92, 104],
    [244, 136, 73],
    [254, 188, 43],
    [240, 249, 33],
];

impl ColorMap {
    /// Colour at `t` in `[0, 1]`; out-of-range input is clamped.
    pub fn sample(self, t: f64) -> Rgb<u8> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            ColorMap::Turbo => turbo(t),
            ColorMap::Viridis => lerp_stops(VIRIDIS, t),
            ColorMap::Magma => lerp_stops(MAGMA, t),
            ColorMap::Inferno => lerp_stops(INFERNO, t),
            ColorMap::Plasma => lerp_stops(PLASMA, t),
        }
    }
}

// Polynomial fit of the Turbo map (Mikhailov, 2019).
fn turbo(t: f64) -> Rgb<u8> {
    let r = 0.135_721_38
        + t * (4.615_392_60
            + t * (-42.660_322_58 + t * (132.131_082_34 + t * (-152.942_393_96 + t * 59.286_379_43))));
    let g = 0.091_402_61
        + t * (2.194_188_39
            + t * (4.842_966_58 + t * (-14.185_033_33 + t * (4.277_298_57 + t * 2.829_566_04))));
    let b = 0.106_673_30
        + t * (12.641_946_08
            + t * (-60.582_048_36 + t * (110.362_767_71 + t * (-89.903_109_12 + t * 27.348_249_73))));
    Rgb([unit_to_u8(r), unit_to_u8(g), unit_to_u8(b)])
}

fn lerp_stops(stops: &[[u8; 3]], t: f64) -> Rgb<u8> {
    let span = (stops.len() - 1) as f64;
    let pos = t * span;
    let i = (pos.floor() as usize).min(stops.len() - 2);
    let f = pos - i as f64;
    let a = stops[i];
    let b = stops[i + 1];
    let mix = |k: usize| (a[k] as f64 + (b[k] as f64 - a[k] as f64) * f).round() as u8;
    Rgb([mix(0), mix(1), mix(2)])
}

fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
