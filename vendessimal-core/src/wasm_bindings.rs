//! WebAssembly bindings for vendessimal-core
//!
//! This module exposes the grid pipeline to JavaScript via
//! `wasm-bindgen`. The API is intentionally kept close to the Python
//! bindings so both front-end and back-end draw from the same data.
//! Masks and fields are returned flat and row-major with their shape
//! available through `rows()` / `width()`.

use wasm_bindgen::prelude::*;
use js_sys::Array;
use serde::Serialize;

use crate::config::{SceneConfig, DEFAULT_N};
use crate::error::GridError;
use crate::features::FeatureSet;
use crate::grid::DEFAULT_GRID_WIDTH;
use crate::overlay::{rails, triad, TriadMode, DEFAULT_RAIL_TAU};
use crate::primes;
use crate::residue::{DEFAULT_MODULUS_A, DEFAULT_MODULUS_B, UNSET_RESIDUE};
use crate::scene::GridScene as RustGridScene;

fn js_err(e: GridError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Shared constants exposed to JavaScript
#[wasm_bindgen]
pub fn constants() -> JsValue {
    #[derive(Serialize)]
    struct Constants {
        default_n: u64,
        default_grid_width: usize,
        default_modulus_a: u64,
        default_modulus_b: u64,
        default_rail_tau: f64,
        unset_residue: i64,
    }

    let c = Constants {
        default_n: DEFAULT_N,
        default_grid_width: DEFAULT_GRID_WIDTH,
        default_modulus_a: DEFAULT_MODULUS_A,
        default_modulus_b: DEFAULT_MODULUS_B,
        default_rail_tau: DEFAULT_RAIL_TAU,
        unset_residue: UNSET_RESIDUE,
    };

    serde_wasm_bindgen::to_value(&c).unwrap_or(JsValue::NULL)
}

/// A computed scene held on the Rust side.
#[wasm_bindgen]
pub struct GridScene {
    inner: RustGridScene,
}

fn feature_array(set: &FeatureSet) -> Array {
    let out = Array::new();
    for p in &set.points {
        let cell = Array::new();
        cell.push(&JsValue::from_f64(p.row as f64));
        cell.push(&JsValue::from_f64(p.col as f64));
        cell.push(&JsValue::from_f64(p.value as f64));
        out.push(&cell);
    }
    out
}

#[wasm_bindgen]
impl GridScene {
    /// Compute a scene from a JSON config; `"{}"` uses all defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<GridScene, JsValue> {
        let config = SceneConfig::from_json_str(config_json).map_err(js_err)?;
        let inner = RustGridScene::compute(&config).map_err(js_err)?;
        Ok(GridScene { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize {
        self.inner.rows
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.inner.width
    }

    /// Residue codes, row-major; unset cells hold -1.
    pub fn residues(&self) -> Vec<f64> {
        self.inner.residues.values.iter().map(|&v| v as f64).collect()
    }

    pub fn triad_mask(&self) -> Vec<f64> {
        self.inner.triad_mask.iter().copied().collect()
    }

    pub fn rail_mask(&self) -> Vec<f64> {
        self.inner.rail_mask.iter().copied().collect()
    }

    /// `[[row, col, value], ...]` for the twin-prime members.
    pub fn twins(&self) -> Array {
        feature_array(&self.inner.twins)
    }

    pub fn lucky_trace(&self) -> Array {
        feature_array(&self.inner.lucky_trace)
    }

    /// Grid-unit rail members for slope √2, same layout as `twins()`.
    pub fn rail_sqrt2(&self) -> Array {
        feature_array(&self.inner.rail_sqrt2)
    }

    pub fn rail_sqrt5(&self) -> Array {
        feature_array(&self.inner.rail_sqrt5)
    }

    /// Every feature set, thresholds included, in drawing order.
    pub fn feature_sets(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.feature_sets()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Threshold annotations as plain JS objects.
    pub fn thresholds(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.thresholds).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, JsValue> {
        self.inner.to_json().map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[wasm_bindgen]
pub fn is_prime(n: u64) -> bool {
    primes::is_prime(n)
}

#[wasm_bindgen]
pub fn primes_upto(n: u64) -> Vec<u64> {
    primes::primes_upto(n)
}

#[wasm_bindgen]
pub fn lucky_prime_trace(n: u64) -> Vec<u64> {
    primes::lucky_prime_trace(n)
}

/// Triad mask, flat row-major.
#[wasm_bindgen]
pub fn triad_mask(rows: usize, width: usize, centers: Vec<f64>, sigma: f64, mode: &str, delta: f64) -> Result<Vec<f64>, JsValue> {
    let mode: TriadMode = mode.parse().map_err(js_err)?;
    let mask = triad(rows, width, &centers, sigma, mode, delta).map_err(js_err)?;
    Ok(mask.iter().copied().collect())
}

/// Rail mask, flat row-major.
#[wasm_bindgen]
pub fn rails_mask(rows: usize, width: usize, tau: f64) -> Result<Vec<f64>, JsValue> {
    let mask = rails(rows, width, tau).map_err(js_err)?;
    Ok(mask.iter().copied().collect())
}
