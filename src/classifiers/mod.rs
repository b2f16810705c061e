pub mod classifier;
pub mod error;
pub mod sysfor;
pub mod tree_learner;

pub use classifier::Classifier;
pub use error::BuildError;
pub use tree_learner::{TreeLearner, TreeModel};
