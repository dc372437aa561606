//! Python bindings for vendessimal-core
//!
//! Exposes the grid pipeline to the Python plotting layer.  Arrays are
//! returned as nested lists (row-major) so they drop straight into
//! `numpy.asarray`.

use ndarray::Array2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::annotate::{annotate as rust_annotate, Threshold};
use crate::config::{SceneConfig, DEFAULT_N};
use crate::error::GridError;
use crate::grid::{rows_needed as rust_rows_needed, to_grid, to_index, DEFAULT_GRID_WIDTH};
use crate::overlay::{rails, triad, TriadMode, DEFAULT_RAIL_TAU, DEFAULT_TRIAD_DELTA, DEFAULT_TRIAD_SIGMA};
use crate::primes;
use crate::residue::{self, DEFAULT_MODULUS_A, DEFAULT_MODULUS_B, UNSET_RESIDUE};
use crate::scene::GridScene;

fn py_err(e: GridError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn to_nested<T: Copy>(a: &Array2<T>) -> Vec<Vec<T>> {
    a.outer_iter().map(|row| row.to_vec()).collect()
}

#[pyfunction]
fn is_prime(n: u64) -> bool {
    primes::is_prime(n)
}

#[pyfunction]
fn primes_upto(n: u64) -> Vec<u64> {
    primes::primes_upto(n)
}

/// Twin-pair members, ascending.
#[pyfunction]
fn twin_pairs_upto(n: u64) -> Vec<u64> {
    primes::twin_pairs_upto(n).into_iter().collect()
}

#[pyfunction]
fn lucky_prime_trace(n: u64) -> Vec<u64> {
    primes::lucky_prime_trace(n)
}

#[pyfunction]
#[pyo3(signature = (index, width=DEFAULT_GRID_WIDTH))]
fn grid_coords(index: u64, width: usize) -> PyResult<(usize, usize)> {
    let cell = to_grid(index, width).map_err(py_err)?;
    Ok((cell.row, cell.col))
}

#[pyfunction]
#[pyo3(signature = (row, col, width=DEFAULT_GRID_WIDTH))]
fn flat_index(row: usize, col: usize, width: usize) -> PyResult<u64> {
    to_index(row, col, width).map_err(py_err)
}

#[pyfunction]
#[pyo3(signature = (n, width=DEFAULT_GRID_WIDTH))]
fn rows_needed(n: u64, width: usize) -> PyResult<usize> {
    rust_rows_needed(n, width).map_err(py_err)
}

/// Residue codes; unset cells hold `UNSET_RESIDUE`.
#[pyfunction]
#[pyo3(signature = (n, width=DEFAULT_GRID_WIDTH, modulus_a=DEFAULT_MODULUS_A, modulus_b=DEFAULT_MODULUS_B))]
fn residue_field(n: u64, width: usize, modulus_a: u64, modulus_b: u64) -> PyResult<Vec<Vec<i64>>> {
    let field = residue::compute(n, width, modulus_a, modulus_b).map_err(py_err)?;
    Ok(to_nested(&field.values))
}

#[pyfunction]
#[pyo3(signature = (rows, width, centers, sigma=DEFAULT_TRIAD_SIGMA, mode="smooth", delta=DEFAULT_TRIAD_DELTA))]
fn triad_mask(
    rows: usize,
    width: usize,
    centers: Vec<f64>,
    sigma: f64,
    mode: &str,
    delta: f64,
) -> PyResult<Vec<Vec<f64>>> {
    let mode: TriadMode = mode.parse().map_err(py_err)?;
    let mask = triad(rows, width, &centers, sigma, mode, delta).map_err(py_err)?;
    Ok(to_nested(&mask))
}

#[pyfunction]
#[pyo3(signature = (rows, width, tau=DEFAULT_RAIL_TAU))]
fn rails_mask(rows: usize, width: usize, tau: f64) -> PyResult<Vec<Vec<f64>>> {
    let mask = rails(rows, width, tau).map_err(py_err)?;
    Ok(to_nested(&mask))
}

/// Resolve `(value, label)` pairs to `(row, col, label)`, dropping
/// values outside `[1, n]`.
#[pyfunction]
#[pyo3(signature = (values_with_labels, n, width=DEFAULT_GRID_WIDTH))]
fn annotate(values_with_labels: Vec<(u64, String)>, n: u64, width: usize) -> PyResult<Vec<(usize, usize, String)>> {
    let thresholds: Vec<Threshold> = values_with_labels.into_iter().map(Threshold::from).collect();
    let notes = rust_annotate(&thresholds, n, width).map_err(py_err)?;
    Ok(notes.into_iter().map(|a| (a.row, a.col, a.label)).collect())
}

/// Run the full pipeline for a JSON config and return the scene as JSON.
#[pyfunction]
#[pyo3(signature = (config_json="{}"))]
fn compute_scene_json(config_json: &str) -> PyResult<String> {
    let config = SceneConfig::from_json_str(config_json).map_err(py_err)?;
    let scene = GridScene::compute(&config).map_err(py_err)?;
    scene.to_json().map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn vendessimal_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("DEFAULT_N", DEFAULT_N)?;
    m.add("DEFAULT_GRID_WIDTH", DEFAULT_GRID_WIDTH)?;
    m.add("DEFAULT_MODULUS_A", DEFAULT_MODULUS_A)?;
    m.add("DEFAULT_MODULUS_B", DEFAULT_MODULUS_B)?;
    m.add("DEFAULT_RAIL_TAU", DEFAULT_RAIL_TAU)?;
    m.add("UNSET_RESIDUE", UNSET_RESIDUE)?;

    m.add_function(wrap_pyfunction!(is_prime, m)?)?;
    m.add_function(wrap_pyfunction!(primes_upto, m)?)?;
    m.add_function(wrap_pyfunction!(twin_pairs_upto, m)?)?;
    m.add_function(wrap_pyfunction!(lucky_prime_trace, m)?)?;
    m.add_function(wrap_pyfunction!(grid_coords, m)?)?;
    m.add_function(wrap_pyfunction!(flat_index, m)?)?;
    m.add_function(wrap_pyfunction!(rows_needed, m)?)?;
    m.add_function(wrap_pyfunction!(residue_field, m)?)?;
    m.add_function(wrap_pyfunction!(triad_mask, m)?)?;
    m.add_function(wrap_pyfunction!(rails_mask, m)?)?;
    m.add_function(wrap_pyfunction!(annotate, m)?)?;
    m.add_function(wrap_pyfunction!(compute_scene_json, m)?)?;
    Ok(())
}
