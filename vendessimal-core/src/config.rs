//! Scene configuration.
//!
//! Every field has a default, so a partial JSON document such as
//! `{"n": 500, "triad": {"mode": "hard"}}` is a complete config.

use serde::{Deserialize, Serialize};

use crate::annotate::{default_thresholds, Threshold};
use crate::error::{GridError, GridResult};
use crate::grid::{check_width, DEFAULT_GRID_WIDTH};
use crate::overlay::{
    check_rail_member_tau, check_rail_tau, TriadParams, DEFAULT_RAIL_OFFSETS, DEFAULT_RAIL_TAU,
};
use crate::residue::{check_moduli, DEFAULT_MODULUS_A, DEFAULT_MODULUS_B};

pub const DEFAULT_N: u64 = 3000;
/// Column tolerance for the grid-unit rail member sets.
pub const DEFAULT_RAIL_MEMBER_TAU: f64 = 0.55;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Upper end of the integer range `1..=n`.
    pub n: u64,
    pub width: usize,
    pub modulus_a: u64,
    pub modulus_b: u64,
    pub triad: TriadParams,
    /// Toroidal tolerance of the rail mask, in normalised units.
    pub rail_tau: f64,
    pub rail_offsets: Vec<f64>,
    /// Tolerance of the rail member sets, in columns.
    pub rail_member_tau: f64,
    pub thresholds: Vec<Threshold>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            width: DEFAULT_GRID_WIDTH,
            modulus_a: DEFAULT_MODULUS_A,
            modulus_b: DEFAULT_MODULUS_B,
            triad: TriadParams::default(),
            rail_tau: DEFAULT_RAIL_TAU,
            rail_offsets: DEFAULT_RAIL_OFFSETS.to_vec(),
            rail_member_tau: DEFAULT_RAIL_MEMBER_TAU,
            thresholds: default_thresholds(),
        }
    }
}

impl SceneConfig {
    pub fn with_n(n: u64) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> GridResult<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> GridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every parameter before any computation runs.
    pub fn validate(&self) -> GridResult<()> {
        if self.n < 1 {
            return Err(GridError::parameter("n must be at least 1"));
        }
        check_width(self.width)?;
        check_moduli(self.modulus_a, self.modulus_b)?;
        self.triad.validate()?;
        check_rail_tau(self.rail_tau)?;
        check_rail_member_tau(self.rail_member_tau)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::TriadMode;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = SceneConfig::from_json_str(r#"{"n": 500, "triad": {"mode": "gauss", "sigma": 1.5}}"#).unwrap();
        assert_eq!(cfg.n, 500);
        assert_eq!(cfg.width, DEFAULT_GRID_WIDTH);
        assert_eq!(cfg.triad.mode, TriadMode::Smooth);
        assert_eq!(cfg.triad.centers, vec![3.0, 10.0, 17.0]);
        assert_eq!(cfg.thresholds.len(), 3);
    }

    #[test]
    fn toolkit_tau_is_rejected() {
        let err = SceneConfig::from_json_str(r#"{"rail_tau": 0.55}"#).unwrap_err();
        assert!(matches!(err, GridError::InvalidParameter(_)));
    }

    #[test]
    fn validation_matches_the_components() {
        let zero_width = SceneConfig {
            width: 0,
            ..SceneConfig::default()
        };
        assert!(matches!(zero_width.validate(), Err(GridError::InvalidIndex(_))));

        let nan_tau = SceneConfig {
            rail_tau: f64::NAN,
            ..SceneConfig::default()
        };
        assert!(matches!(nan_tau.validate(), Err(GridError::InvalidParameter(_))));

        let huge_moduli = SceneConfig {
            modulus_a: u64::MAX,
            modulus_b: 2,
            ..SceneConfig::default()
        };
        assert!(matches!(huge_moduli.validate(), Err(GridError::InvalidModulus(_))));

        let mut nan_center = SceneConfig::default();
        nan_center.triad.centers.push(f64::NAN);
        assert!(matches!(nan_center.validate(), Err(GridError::InvalidParameter(_))));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SceneConfig::from_json_str("{n: }").unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }
}
