//! Two-dimensional Gaussian kernel density estimation.
//!
//! The kernel covariance is the sample covariance of the points scaled by the
//! square of Scott's factor (`n^(-1/6)` in two dimensions) times a user
//! adjustment. Density levels are expressed as iso-proportions: the level for
//! proportion `p` is the density above which `1 - p` of the mass lies.

use rayon::prelude::*;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

const SINGULAR_EPS: f64 = 1e-9;

/// Why a density surface could not be estimated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Degenerate {
    TooFewPoints(usize),
    SingularCovariance,
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degenerate::TooFewPoints(n) => write!(f, "{} point(s), need at least 2", n),
            Degenerate::SingularCovariance => write!(f, "points have no spread"),
        }
    }
}

pub struct GaussianKde {
    points: Vec<(f64, f64)>,
    // inverse kernel covariance, row-major [a b; b c]
    inv: [f64; 3],
    norm: f64,
    bandwidth: (f64, f64),
}

impl GaussianKde {
    pub fn new(points: Vec<(f64, f64)>, bw_adjust: f64) -> Result<Self, Degenerate> {
        let n = points.len();
        if n < 2 {
            return Err(Degenerate::TooFewPoints(n));
        }

        let nf = n as f64;
        let (mx, my) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
        let (mx, my) = (mx / nf, my / nf);

        let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
        for &(x, y) in &points {
            let (dx, dy) = (x - mx, y - my);
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }
        let (sxx, sxy, syy) = (sxx / (nf - 1.0), sxy / (nf - 1.0), syy / (nf - 1.0));

        let det = sxx * syy - sxy * sxy;
        if sxx <= SINGULAR_EPS || syy <= SINGULAR_EPS || det <= SINGULAR_EPS * sxx * syy {
            return Err(Degenerate::SingularCovariance);
        }

        let factor = nf.powf(-1.0 / 6.0) * bw_adjust;
        let f2 = factor * factor;
        let (kxx, kxy, kyy) = (sxx * f2, sxy * f2, syy * f2);
        let kdet = kxx * kyy - kxy * kxy;

        Ok(Self {
            inv: [kyy / kdet, -kxy / kdet, kxx / kdet],
            norm: 1.0 / (2.0 * PI * kdet.sqrt() * nf),
            bandwidth: (kxx.sqrt(), kyy.sqrt()),
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Kernel standard deviation along each axis.
    pub fn bandwidth(&self) -> (f64, f64) {
        self.bandwidth
    }

    pub fn density(&self, x: f64, y: f64) -> f64 {
        let [a, b, c] = self.inv;
        let sum: f64 = self
            .points
            .iter()
            .map(|&(px, py)| {
                let (dx, dy) = (x - px, y - py);
                (-0.5 * (a * dx * dx + 2.0 * b * dx * dy + c * dy * dy)).exp()
            })
            .sum();
        sum * self.norm
    }

    /// Evaluates the density on a regular grid. Rows are spread over the
    /// rayon pool; the result does not depend on the thread count.
    pub fn grid(&self, x: (f64, f64), y: (f64, f64), nx: usize, ny: usize) -> DensityGrid {
        let step = |lo: f64, hi: f64, n: usize| if n > 1 { (hi - lo) / (n - 1) as f64 } else { 0.0 };
        let (dx, dy) = (step(x.0, x.1, nx), step(y.0, y.1, ny));

        let mut values = vec![0.0; nx * ny];
        values
            .par_chunks_mut(nx.max(1))
            .enumerate()
            .for_each(|(j, row)| {
                let gy = y.0 + j as f64 * dy;
                for (i, v) in row.iter_mut().enumerate() {
                    *v = self.density(x.0 + i as f64 * dx, gy);
                }
            });

        DensityGrid {
            x,
            y,
            nx,
            ny,
            values,
        }
    }

    /// Grid over the data extent padded by `cut` bandwidths, the region where
    /// practically all of the estimated mass lives.
    pub fn support_grid(&self, size: usize, cut: f64) -> DensityGrid {
        let (bx, by) = self.bandwidth;
        let (mut x0, mut x1, mut y0, mut y1) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
        for &(px, py) in &self.points {
            x0 = x0.min(px);
            x1 = x1.max(px);
            y0 = y0.min(py);
            y1 = y1.max(py);
        }
        self.grid(
            (x0 - cut * bx, x1 + cut * bx),
            (y0 - cut * by, y1 + cut * by),
            size,
            size,
        )
    }
}

/// Density samples on a regular grid, row-major with `y` as the row axis.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub nx: usize,
    pub ny: usize,
    pub values: Vec<f64>,
}

impl DensityGrid {
    fn at(&self, i: usize, j: usize) -> f64 {
        self.values[j * self.nx + i]
    }

    /// Bilinear interpolation; zero outside the grid.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        if self.nx < 2 || self.ny < 2 {
            return 0.0;
        }
        let fx = (x - self.x.0) / (self.x.1 - self.x.0) * (self.nx - 1) as f64;
        let fy = (y - self.y.0) / (self.y.1 - self.y.0) * (self.ny - 1) as f64;
        if !(0.0..=(self.nx - 1) as f64).contains(&fx) || !(0.0..=(self.ny - 1) as f64).contains(&fy) {
            return 0.0;
        }
        let i = (fx.floor() as usize).min(self.nx - 2);
        let j = (fy.floor() as usize).min(self.ny - 2);
        let (tx, ty) = (fx - i as f64, fy - j as f64);
        let top = self.at(i, j) * (1.0 - tx) + self.at(i + 1, j) * tx;
        let bot = self.at(i, j + 1) * (1.0 - tx) + self.at(i + 1, j + 1) * tx;
        top * (1.0 - ty) + bot * ty
    }
}

/// Density values bounding `count` iso-proportion levels evenly spaced from
/// `thresh` to 1, returned in ascending order of density.
pub fn iso_levels(values: &[f64], count: usize, thresh: f64) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if count == 0 || values.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    let mut cumulative = Vec::with_capacity(sorted.len());
    let mut acc = 0.0;
    for v in &sorted {
        acc += v;
        cumulative.push(acc / total);
    }

    let props: Vec<f64> = if count == 1 {
        vec![thresh]
    } else {
        (0..count)
            .map(|k| thresh + (1.0 - thresh) * k as f64 / (count - 1) as f64)
            .collect()
    };

    // ascending proportion is descending mass above, i.e. ascending density
    props
        .iter()
        .map(|p| {
            let target = 1.0 - p;
            let idx = cumulative.partition_point(|&c| c < target);
            sorted[idx.min(sorted.len() - 1)]
        })
        .collect()
}

/// Band index for a density value: `None` below the lowest level, otherwise
/// `0..bands` where `bands = levels.len() - 1` (at least 1).
pub fn band_of(levels: &[f64], value: f64) -> Option<usize> {
    let lowest = *levels.first()?;
    if value < lowest {
        return None;
    }
    let bands = levels.len().saturating_sub(1).max(1);
    let above = levels[1..].iter().filter(|&&l| value >= l).count();
    Some(above.min(bands - 1))
}
