use crate::classifiers::error::BuildError;
use crate::classifiers::tree_learner::{TreeLearner, TreeModel};
use crate::core::Dataset;
use crate::core::instances::Instance;

/// A model that always answers with the same distribution. Handy for driving
/// the voting logic from tests.
pub struct FixedTreeModel {
    distribution: Vec<f64>,
    leaves: usize,
}

impl FixedTreeModel {
    pub fn new(distribution: Vec<f64>, leaves: usize) -> FixedTreeModel {
        FixedTreeModel {
            distribution,
            leaves,
        }
    }
}

impl TreeModel for FixedTreeModel {
    fn distribution_for_instance(&self, _instance: &dyn Instance) -> Vec<f64> {
        self.distribution.clone()
    }

    fn num_leaves(&self) -> usize {
        self.leaves
    }

    fn describe(&self) -> String {
        format!("fixed {:?}", self.distribution)
    }
}

/// Deterministic stand-in for the external single-tree learner: a one-leaf
/// model predicting the training subset's majority class.
pub struct MajorityTreeLearner;

struct MajorityTreeModel {
    distribution: Vec<f64>,
    class_name: String,
}

impl TreeModel for MajorityTreeModel {
    fn distribution_for_instance(&self, _instance: &dyn Instance) -> Vec<f64> {
        self.distribution.clone()
    }

    fn num_leaves(&self) -> usize {
        1
    }

    fn describe(&self) -> String {
        format!("{} (majority)", self.class_name)
    }
}

impl TreeLearner for MajorityTreeLearner {
    fn train(
        &self,
        dataset: &Dataset,
        _confidence: f64,
        _min_leaf_size: usize,
    ) -> Result<Box<dyn TreeModel>, BuildError> {
        let majority = dataset.majority_class();
        let mut distribution = vec![0.0; dataset.num_classes()];
        if majority < distribution.len() {
            distribution[majority] = 1.0;
        }
        let class_name = dataset
            .header()
            .class_name(majority)
            .unwrap_or("?")
            .to_string();
        Ok(Box::new(MajorityTreeModel {
            distribution,
            class_name,
        }))
    }
}

/// A learner that always fails, for exercising error propagation.
pub struct FailingTreeLearner;

impl TreeLearner for FailingTreeLearner {
    fn train(
        &self,
        _dataset: &Dataset,
        _confidence: f64,
        _min_leaf_size: usize,
    ) -> Result<Box<dyn TreeModel>, BuildError> {
        Err(BuildError::Learner("stub learner always fails".into()))
    }
}
