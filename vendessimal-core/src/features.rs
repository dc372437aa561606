//! Feature sets handed to the renderer.
//!
//! A feature set is a category tag plus the grid cells of the integers
//! that carry it.  Threshold members additionally carry their label.

use serde::{Deserialize, Serialize};

use crate::annotate::Annotation;
use crate::error::GridResult;
use crate::grid::{to_grid, GridCoord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    TwinPrime,
    LuckyTrace,
    Threshold,
    Rail,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeaturePoint {
    pub row: usize,
    pub col: usize,
    pub value: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FeaturePoint {
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.row, self.col)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub category: FeatureCategory,
    pub points: Vec<FeaturePoint>,
}

impl FeatureSet {
    pub fn empty(category: FeatureCategory) -> Self {
        Self {
            category,
            points: Vec::new(),
        }
    }

    /// Place each value in `[1, n]` on the grid; others are clipped.
    pub fn from_values<I>(category: FeatureCategory, values: I, n: u64, width: usize) -> GridResult<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut points = Vec::new();
        for value in values {
            if value < 1 || value > n {
                continue;
            }
            let cell = to_grid(value, width)?;
            points.push(FeaturePoint {
                row: cell.row,
                col: cell.col,
                value,
                label: None,
            });
        }
        Ok(Self { category, points })
    }

    pub fn from_annotations(annotations: &[Annotation]) -> Self {
        let points = annotations
            .iter()
            .map(|a| FeaturePoint {
                row: a.row,
                col: a.col,
                value: a.value,
                label: Some(a.label.clone()),
            })
            .collect();
        Self {
            category: FeatureCategory::Threshold,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn coords(&self) -> Vec<GridCoord> {
        self.points.iter().map(FeaturePoint::coord).collect()
    }

    pub fn contains_value(&self, value: u64) -> bool {
        self.points.iter().any(|p| p.value == value)
    }
}
