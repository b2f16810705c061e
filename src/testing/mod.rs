pub mod dummies;
pub mod stubs;

pub use stubs::{FailingTreeLearner, FixedTreeModel, MajorityTreeLearner};
