//! Residue field: the base colouring layer of the grid.
//!
//! Each integer `x` is encoded as `(x mod a) * b + (x mod b)`, a single
//! scalar in `[0, a * b)` that identifies the residue pair.  Cells past
//! `n` in the final row hold [`UNSET_RESIDUE`].

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::grid::{rows_needed, to_grid, GridCoord};

pub const DEFAULT_MODULUS_A: u64 = 19;
pub const DEFAULT_MODULUS_B: u64 = 29;

/// Sentinel for cells with no integer behind them.  Valid residues are
/// never negative.
pub const UNSET_RESIDUE: i64 = -1;

/// `rows × width` residue codes with an unset sentinel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResidueGrid {
    pub values: Array2<i64>,
    pub modulus_a: u64,
    pub modulus_b: u64,
}

impl ResidueGrid {
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    /// Residue code at `coord`; `None` for unset or out-of-grid cells.
    pub fn get(&self, coord: GridCoord) -> Option<u64> {
        self.values
            .get((coord.row, coord.col))
            .copied()
            .filter(|&v| v != UNSET_RESIDUE)
            .map(|v| v as u64)
    }

    /// Exclusive upper bound of the residue codes (`a * b`).
    pub fn code_range(&self) -> u64 {
        self.modulus_a * self.modulus_b
    }
}

/// Encode the residue pair of `x` into one scalar.
#[inline]
pub fn residue_code(x: u64, modulus_a: u64, modulus_b: u64) -> u64 {
    (x % modulus_a) * modulus_b + (x % modulus_b)
}

/// Both moduli must be positive and their product must fit an `i64`
/// residue code.  The offending modulus is reported.
pub(crate) fn check_moduli(modulus_a: u64, modulus_b: u64) -> GridResult<()> {
    for m in [modulus_a, modulus_b] {
        if m == 0 {
            return Err(GridError::InvalidModulus(m));
        }
    }
    match modulus_a.checked_mul(modulus_b) {
        Some(range) if range <= i64::MAX as u64 => Ok(()),
        _ => Err(GridError::InvalidModulus(modulus_a.max(modulus_b))),
    }
}

/// Compute the residue field for `1..=n` on a grid of `width` columns.
pub fn compute(n: u64, width: usize, modulus_a: u64, modulus_b: u64) -> GridResult<ResidueGrid> {
    check_moduli(modulus_a, modulus_b)?;

    let rows = rows_needed(n, width)?;
    let mut values = Array2::from_elem((rows, width), UNSET_RESIDUE);
    for x in 1..=n {
        let cell = to_grid(x, width)?;
        values[[cell.row, cell.col]] = residue_code(x, modulus_a, modulus_b) as i64;
    }
    Ok(ResidueGrid {
        values,
        modulus_a,
        modulus_b,
    })
}
