use crate::classifiers::error::BuildError;
use serde::{Deserialize, Serialize};

/// Build parameters for the forest. The defaults are the settings used in
/// the SysFor paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SysForParameters {
    /// Minimum number of records in a leaf, as in C4.5.
    pub min_leaf_size: usize,
    /// Requested forest size; fewer trees may be built on small or
    /// low-diversity datasets.
    pub number_of_trees: usize,
    /// Maximum gain-ratio gap from the best candidate for a split point to
    /// stay in the good-attribute set.
    pub goodness: f64,
    /// Minimum normalized distance between two retained split points on the
    /// same numeric attribute.
    pub separation: f64,
    /// Pruning confidence factor, passed through to the single-tree learner.
    pub confidence: f64,
}

impl Default for SysForParameters {
    fn default() -> Self {
        Self {
            min_leaf_size: 10,
            number_of_trees: 60,
            goodness: 0.3,
            separation: 0.3,
            confidence: 0.25,
        }
    }
}

impl SysForParameters {
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.min_leaf_size < 1 {
            return Err(BuildError::InvalidParameter(
                "min_leaf_size must be >= 1".into(),
            ));
        }
        if self.number_of_trees < 1 {
            return Err(BuildError::InvalidParameter(
                "number_of_trees must be >= 1".into(),
            ));
        }
        if !self.goodness.is_finite() || self.goodness < 0.0 {
            return Err(BuildError::InvalidParameter(
                "goodness must be >= 0".into(),
            ));
        }
        if !self.separation.is_finite() || self.separation < 0.0 {
            return Err(BuildError::InvalidParameter(
                "separation must be >= 0".into(),
            ));
        }
        if !self.confidence.is_finite() || self.confidence <= 0.0 || self.confidence >= 1.0 {
            return Err(BuildError::InvalidParameter(
                "confidence must be in (0, 1)".into(),
            ));
        }
        Ok(())
    }
}
