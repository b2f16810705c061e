use crate::classifiers::error::BuildError;
use crate::core::Dataset;
use crate::core::instances::Instance;

/// A trained single decision tree, as produced by a [`TreeLearner`].
pub trait TreeModel {
    /// Class distribution predicted for `instance`; length equals the number
    /// of classes, entries are non-negative.
    fn distribution_for_instance(&self, instance: &dyn Instance) -> Vec<f64>;

    fn num_leaves(&self) -> usize;

    /// Plain-text rendering of the tree body, one branch per line.
    fn describe(&self) -> String;
}

/// The single-tree supervised learner used to complete forest branches.
///
/// The forest treats this as a black box: a C4.5-style trainer taking a
/// pruning confidence factor and a minimum leaf size. A failure here aborts
/// the forest build that requested it.
pub trait TreeLearner {
    fn train(
        &self,
        dataset: &Dataset,
        confidence: f64,
        min_leaf_size: usize,
    ) -> Result<Box<dyn TreeModel>, BuildError>;
}
