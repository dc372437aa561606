//! One full computation pass over `1..=n`.
//!
//! [`GridScene::compute`] runs every component once and bundles the
//! plain data a renderer needs: the residue field, both overlay masks
//! and the feature coordinate lists.  Nothing is cached between calls.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::annotate::{annotate, Annotation};
use crate::config::SceneConfig;
use crate::error::GridResult;
use crate::features::{FeatureCategory, FeatureSet};
use crate::grid::rows_needed;
use crate::overlay::{rail_members, rails};
use crate::primes::{lucky_prime_trace, twin_pairs_upto};
use crate::residue::{self, ResidueGrid};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridScene {
    pub n: u64,
    pub rows: usize,
    pub width: usize,
    pub residues: ResidueGrid,
    pub triad_mask: Array2<f64>,
    pub rail_mask: Array2<f64>,
    pub twins: FeatureSet,
    pub lucky_trace: FeatureSet,
    /// Grid-unit rail members for slope √2.
    pub rail_sqrt2: FeatureSet,
    /// Grid-unit rail members for slope √5.
    pub rail_sqrt5: FeatureSet,
    pub thresholds: Vec<Annotation>,
}

impl GridScene {
    pub fn compute(config: &SceneConfig) -> GridResult<Self> {
        config.validate()?;
        let (n, width) = (config.n, config.width);
        let rows = rows_needed(n, width)?;

        let residues = residue::compute(n, width, config.modulus_a, config.modulus_b)?;
        log::debug!(
            "residue field {}x{} (mod {} / mod {})",
            rows,
            width,
            config.modulus_a,
            config.modulus_b
        );

        let triad_mask = config.triad.mask(rows, width)?;
        let rail_mask = rails(rows, width, config.rail_tau)?;
        log::debug!(
            "masks: triad mode={} sigma={} | rails tau={} ({} cells on)",
            config.triad.mode,
            config.triad.sigma,
            config.rail_tau,
            rail_mask.iter().filter(|&&v| v > 0.0).count()
        );

        let twins = FeatureSet::from_values(FeatureCategory::TwinPrime, twin_pairs_upto(n), n, width)?;
        let lucky_trace =
            FeatureSet::from_values(FeatureCategory::LuckyTrace, lucky_prime_trace(n), n, width)?;

        let member_set = |slope: f64| -> GridResult<FeatureSet> {
            let members = rail_members(
                rows,
                width,
                slope,
                &config.rail_offsets,
                config.rail_member_tau,
                n,
            )?;
            FeatureSet::from_values(FeatureCategory::Rail, members, n, width)
        };
        let rail_sqrt2 = member_set(std::f64::consts::SQRT_2)?;
        let rail_sqrt5 = member_set(5.0f64.sqrt())?;

        let thresholds = annotate(&config.thresholds, n, width)?;
        log::debug!(
            "features: {} twin members, {} lucky trace, {}+{} rail members, {}/{} thresholds",
            twins.len(),
            lucky_trace.len(),
            rail_sqrt2.len(),
            rail_sqrt5.len(),
            thresholds.len(),
            config.thresholds.len()
        );

        Ok(Self {
            n,
            rows,
            width,
            residues,
            triad_mask,
            rail_mask,
            twins,
            lucky_trace,
            rail_sqrt2,
            rail_sqrt5,
            thresholds,
        })
    }

    /// Every feature set, thresholds included, in drawing order.
    pub fn feature_sets(&self) -> Vec<FeatureSet> {
        vec![
            self.rail_sqrt2.clone(),
            self.rail_sqrt5.clone(),
            self.twins.clone(),
            self.lucky_trace.clone(),
            FeatureSet::from_annotations(&self.thresholds),
        ]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_scene_shapes_agree() {
        let scene = GridScene::compute(&SceneConfig::with_n(50)).unwrap();
        assert_eq!(scene.rows, 3);
        assert_eq!(scene.residues.values.dim(), (3, 20));
        assert_eq!(scene.triad_mask.dim(), (3, 20));
        assert_eq!(scene.rail_mask.dim(), (3, 20));
        // thresholds 1061.. lie past n = 50
        assert!(scene.thresholds.is_empty());
    }
}
