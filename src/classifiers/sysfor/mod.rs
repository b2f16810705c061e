mod cancellation;
mod distribution;
mod forest;
mod parameters;
mod scoring;
mod selector;
mod split;
mod sysfor;
mod tree;

pub use cancellation::CancellationToken;
pub use distribution::NumericSplitDistribution;
pub use forest::Forest;
pub use parameters::SysForParameters;
pub use selector::select_good_attributes;
pub use split::{ScoredSplit, SplitPoint, split_dataset};
pub use sysfor::SysFor;
pub use tree::{BranchChild, ForestMember, LeafNode, SplitBranch, SplitTree};
