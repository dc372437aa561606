//! Core computation for the vendessimal prime grid
//!
//! This crate turns the integer range `1..=n` into the data behind the
//! prime-grid visualisation.  It is organised in the same order the
//! data flows:
//!
//! 1. **Primes** – trial division, a sieve of Eratosthenes, the twin
//!    prime set and the Euler polynomial trace `k² + k + 41`.
//! 2. **Grid** – the bijection between 1-based integers and cells of a
//!    fixed-width wrapped grid.
//! 3. **Residue field** – the base colouring layer, one scalar per cell
//!    encoding the integer's remainders under two moduli.
//! 4. **Overlays** – the triad band mask and the irrational-slope rail
//!    mask, both bounded to `[0, 1]`.
//! 5. **Annotations** – explicitly labelled threshold integers.
//!
//! [`scene::GridScene`] runs the whole pipeline for a
//! [`config::SceneConfig`].  Drawing is left to the caller; the crate
//! exposes bindings via either Python (using pyo3) or WebAssembly
//! (using wasm‑bindgen) depending on the enabled feature.  When neither
//! binding feature is enabled the crate provides pure Rust types.

pub mod error;
pub mod primes;
pub mod grid;
pub mod residue;
pub mod overlay;
pub mod annotate;
pub mod features;
pub mod config;
pub mod scene;

pub use error::{GridError, GridResult};

// Conditional bindings.  Only compile the Python or WASM API if the
// corresponding feature flag has been enabled.

#[cfg(feature = "python")]
pub mod pybindings;

#[cfg(feature = "wasm")]
pub mod wasm_bindings;
