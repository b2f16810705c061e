pub mod tree_learners;

pub use tree_learners::{FailingTreeLearner, FixedTreeModel, MajorityTreeLearner};
