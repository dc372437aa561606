//! Hand-picked threshold highlights.
//!
//! Resolves explicitly supplied `(value, label)` pairs to grid cells.
//! Values outside `[1, n]` are dropped silently; this is display
//! clipping, not a data error.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::grid::{to_grid, GridCoord};
use crate::primes::is_prime;

/// The prime/composite boundary around 1061–1064 highlighted by default.
pub const DEFAULT_THRESHOLDS: [(u64, &str); 3] = [
    (1061, "1061"),
    (1063, "1063 (prime)"),
    (1064, "1064 = 2³·7·19"),
];

/// A labelled value to highlight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    pub value: u64,
    pub label: String,
}

impl Threshold {
    pub fn new(value: u64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl<S: Into<String>> From<(u64, S)> for Threshold {
    fn from((value, label): (u64, S)) -> Self {
        Threshold::new(value, label)
    }
}

pub fn default_thresholds() -> Vec<Threshold> {
    DEFAULT_THRESHOLDS
        .iter()
        .map(|&(value, label)| Threshold::new(value, label))
        .collect()
}

/// A threshold resolved to its cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub row: usize,
    pub col: usize,
    pub value: u64,
    pub label: String,
    /// Whether `value` is prime, so the renderer can style the boundary.
    pub prime: bool,
}

impl Annotation {
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.row, self.col)
    }
}

/// Resolve thresholds to cells, preserving input order.
pub fn annotate(thresholds: &[Threshold], n: u64, width: usize) -> GridResult<Vec<Annotation>> {
    if width == 0 {
        return Err(GridError::index("grid width must be positive"));
    }
    let mut out = Vec::with_capacity(thresholds.len());
    for t in thresholds {
        if t.value < 1 || t.value > n {
            log::trace!("threshold {} ({}) outside 1..={}, skipped", t.value, t.label, n);
            continue;
        }
        let cell = to_grid(t.value, width)?;
        out.push(Annotation {
            row: cell.row,
            col: cell.col,
            value: t.value,
            label: t.label.clone(),
            prime: is_prime(t.value),
        });
    }
    Ok(out)
}
