//! Wrapped-grid coordinate mapping.
//!
//! Integers `1..=n` are laid out row-major in a grid of fixed width,
//! with `1` at the top-left cell.  Every other component places its
//! values through these three functions.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Default grid width (one row per twenty integers).
pub const DEFAULT_GRID_WIDTH: usize = 20;

/// Zero-based cell position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[inline]
pub(crate) fn check_width(width: usize) -> GridResult<()> {
    if width == 0 {
        return Err(GridError::index("grid width must be positive"));
    }
    Ok(())
}

/// Map a 1-based linear index to its cell.
pub fn to_grid(index: u64, width: usize) -> GridResult<GridCoord> {
    check_width(width)?;
    if index < 1 {
        return Err(GridError::index("linear index must be >= 1"));
    }
    let z = index - 1;
    let w = width as u64;
    Ok(GridCoord::new((z / w) as usize, (z % w) as usize))
}

/// Inverse of [`to_grid`]: `row * width + col + 1`.
pub fn to_index(row: usize, col: usize, width: usize) -> GridResult<u64> {
    check_width(width)?;
    if col >= width {
        return Err(GridError::index(format!(
            "column {col} outside grid of width {width}"
        )));
    }
    (row as u64)
        .checked_mul(width as u64)
        .and_then(|v| v.checked_add(col as u64 + 1))
        .ok_or_else(|| GridError::index(format!("cell ({row}, {col}) overflows the linear index")))
}

/// `ceil(n / width)`.
pub fn rows_needed(n: u64, width: usize) -> GridResult<usize> {
    check_width(width)?;
    Ok(n.div_ceil(width as u64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_cells_of_a_row() {
        assert_eq!(to_grid(1, 20).unwrap(), GridCoord::new(0, 0));
        assert_eq!(to_grid(20, 20).unwrap(), GridCoord::new(0, 19));
        assert_eq!(to_grid(21, 20).unwrap(), GridCoord::new(1, 0));
    }

    #[test]
    fn rows_round_up() {
        assert_eq!(rows_needed(50, 20).unwrap(), 3);
        assert_eq!(rows_needed(60, 20).unwrap(), 3);
        assert_eq!(rows_needed(0, 20).unwrap(), 0);
    }
}
