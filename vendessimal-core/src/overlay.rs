//! Overlay masks drawn on top of the residue field.
//!
//! Two independent generators, each producing a `rows × width` array
//! with every value in `[0, 1]`:
//!
//! * **triad** – proximity bands around a few column positions.  The
//!   mask depends on the column only, so every row is identical.
//! * **rails** – toroidal proximity to the lines `C = R·s (mod 1)` for
//!   the irrational slopes √2, √5 and their reciprocals, in normalised
//!   `[0, 1]²` grid coordinates.
//!
//! The engine never combines the two; blending is the renderer's call.
//! Division guards (zero mask maximum, single row or column) are
//! explicit checks rather than relying on NaN propagation.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::grid::{check_width, to_index};

pub const DEFAULT_TRIAD_CENTERS: [f64; 3] = [3.0, 10.0, 17.0];
pub const DEFAULT_TRIAD_SIGMA: f64 = 2.4;
pub const DEFAULT_TRIAD_DELTA: f64 = 2.0;
/// Largest tolerance that still leaves some cells off every rail.
pub const MAX_RAIL_TAU: f64 = 0.5;
pub const DEFAULT_RAIL_TAU: f64 = MAX_RAIL_TAU;
/// Column offsets of the grid-unit rail families.
pub const DEFAULT_RAIL_OFFSETS: [f64; 4] = [0.0, 5.0, 10.0, 15.0];

/// √2, 1/√2, √5, 1/√5.
pub static RAIL_SLOPES: Lazy<[f64; 4]> = Lazy::new(|| {
    let s2 = std::f64::consts::SQRT_2;
    let s5 = 5.0f64.sqrt();
    [s2, 1.0 / s2, s5, 1.0 / s5]
});

/// How a triad center contributes to nearby columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriadMode {
    /// Gaussian falloff `exp(-½((c - center)/σ)²)`.
    #[default]
    #[serde(alias = "gauss")]
    Smooth,
    /// Indicator of `|c - center| <= δ`.
    Hard,
}

impl FromStr for TriadMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smooth" | "gauss" => Ok(TriadMode::Smooth),
            "hard" => Ok(TriadMode::Hard),
            other => Err(GridError::parameter(format!("unknown triad mode '{other}'"))),
        }
    }
}

impl fmt::Display for TriadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriadMode::Smooth => f.write_str("smooth"),
            TriadMode::Hard => f.write_str("hard"),
        }
    }
}

/// Triad band configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriadParams {
    /// Column positions of the bands; fractional values are allowed.
    pub centers: Vec<f64>,
    pub sigma: f64,
    pub mode: TriadMode,
    pub delta: f64,
}

impl Default for TriadParams {
    fn default() -> Self {
        Self {
            centers: DEFAULT_TRIAD_CENTERS.to_vec(),
            sigma: DEFAULT_TRIAD_SIGMA,
            mode: TriadMode::Smooth,
            delta: DEFAULT_TRIAD_DELTA,
        }
    }
}

impl TriadParams {
    pub fn validate(&self) -> GridResult<()> {
        check_triad(&self.centers, self.sigma, self.delta)
    }

    /// Build the mask for a `rows × width` grid.
    pub fn mask(&self, rows: usize, width: usize) -> GridResult<Array2<f64>> {
        triad(rows, width, &self.centers, self.sigma, self.mode, self.delta)
    }
}

pub(crate) fn check_triad(centers: &[f64], sigma: f64, delta: f64) -> GridResult<()> {
    if let Some(bad) = centers.iter().find(|c| !c.is_finite()) {
        return Err(GridError::parameter(format!(
            "triad centers must be finite, got {bad}"
        )));
    }
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(GridError::parameter(format!(
            "triad sigma must be positive, got {sigma}"
        )));
    }
    if !(delta.is_finite() && delta >= 0.0) {
        return Err(GridError::parameter(format!(
            "triad delta must be non-negative, got {delta}"
        )));
    }
    Ok(())
}

#[inline]
fn gaussian(offset: f64, sigma: f64) -> f64 {
    let z = offset / sigma;
    (-0.5 * z * z).exp()
}

/// Triad mask: per-column band weights normalised by their maximum.
pub fn triad(
    rows: usize,
    width: usize,
    centers: &[f64],
    sigma: f64,
    mode: TriadMode,
    delta: f64,
) -> GridResult<Array2<f64>> {
    check_triad(centers, sigma, delta)?;

    let mut profile = vec![0.0f64; width];
    for (col, slot) in profile.iter_mut().enumerate() {
        let c = col as f64;
        for &center in centers {
            *slot += match mode {
                TriadMode::Smooth => gaussian(c - center, sigma),
                TriadMode::Hard => {
                    if (c - center).abs() <= delta {
                        1.0
                    } else {
                        0.0
                    }
                }
            };
        }
    }

    let max = profile.iter().copied().fold(0.0f64, f64::max);
    if max > 0.0 {
        for v in profile.iter_mut() {
            *v /= max;
        }
    }

    Ok(Array2::from_shape_fn((rows, width), |(_, col)| profile[col]))
}

/// Map `index` in `0..count` onto `[0, 1]`; a single sample maps to 0.
#[inline]
fn normalise(index: usize, count: usize) -> f64 {
    let span = if count > 1 { (count - 1) as f64 } else { 1.0 };
    index as f64 / span
}

/// Shortest distance between `a` and `b` on a circle of circumference 1.
#[inline]
pub fn toroidal_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}

pub(crate) fn check_rail_tau(tau: f64) -> GridResult<()> {
    if !(0.0..=MAX_RAIL_TAU).contains(&tau) {
        return Err(GridError::parameter(format!(
            "rail tau must lie in [0, {MAX_RAIL_TAU}], got {tau}"
        )));
    }
    Ok(())
}

/// Rail mask: 1 where any of the four slope families passes within
/// `tau` (toroidally) of the cell, else 0.
pub fn rails(rows: usize, width: usize, tau: f64) -> GridResult<Array2<f64>> {
    check_rail_tau(tau)?;
    let slopes = *RAIL_SLOPES;
    Ok(Array2::from_shape_fn((rows, width), |(row, col)| {
        let r = normalise(row, rows);
        let c = normalise(col, width);
        let on_rail = slopes.iter().any(|&s| {
            let expected = (r * s).rem_euclid(1.0);
            toroidal_distance(c, expected) < tau
        });
        if on_rail {
            1.0
        } else {
            0.0
        }
    }))
}

/// Tolerance of the grid-unit rails, in columns; unbounded above.
pub(crate) fn check_rail_member_tau(tau: f64) -> GridResult<()> {
    if !(tau.is_finite() && tau >= 0.0) {
        return Err(GridError::parameter(format!(
            "rail member tolerance must be non-negative, got {tau}"
        )));
    }
    Ok(())
}

/// Linear indices `<= n` lying on the grid-unit rail family of `slope`.
///
/// For each row `r` and offset `b` the rail passes column
/// `(slope·r + b) mod width`; a cell belongs when its circular column
/// distance to that position is at most `tau` columns.
pub fn rail_members(
    rows: usize,
    width: usize,
    slope: f64,
    offsets: &[f64],
    tau: f64,
    n: u64,
) -> GridResult<BTreeSet<u64>> {
    check_width(width)?;
    check_rail_member_tau(tau)?;
    if !slope.is_finite() {
        return Err(GridError::parameter("rail slope must be finite"));
    }

    let w = width as f64;
    let mut members = BTreeSet::new();
    for row in 0..rows {
        for &b in offsets {
            let pred = (slope * row as f64 + b).rem_euclid(w);
            for col in 0..width {
                let c = col as f64;
                let d = (c - pred).rem_euclid(w).min((pred - c).rem_euclid(w));
                if d <= tau {
                    let index = to_index(row, col, width)?;
                    if index <= n {
                        members.insert(index);
                    }
                }
            }
        }
    }
    Ok(members)
}
