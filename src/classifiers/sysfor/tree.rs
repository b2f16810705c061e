use crate::classifiers::sysfor::split::SplitPoint;
use crate::classifiers::tree_learner::TreeModel;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;

/// What hangs off one branch of a split tree: either an externally trained
/// single-tree model over the branch subset, or a nested forest member (the
/// second level of a two-level tree).
pub enum BranchChild {
    Model(Box<dyn TreeModel>),
    Tree(Box<ForestMember>),
}

pub struct SplitBranch {
    pub class_counts: Vec<usize>,
    pub majority_class: usize,
    pub child: BranchChild,
}

pub struct SplitTree {
    pub split: SplitPoint,
    pub branches: Vec<SplitBranch>,
}

/// A branch that never splits. Holds a one-hot count vector for the class of
/// the subset's first record (class 0 for an empty subset).
pub struct LeafNode {
    pub class_counts: Vec<usize>,
    pub majority_class: usize,
}

/// One tree of the forest.
///
/// `Tree` is the usual shape: a root split whose branches are completed by
/// the external learner (level one) or by nested members (level two). `Leaf`
/// stands in for branches over degenerate subsets, and `Delegate` is the
/// terminal whole-dataset fallback used when nothing can be split.
pub enum ForestMember {
    Leaf(LeafNode),
    Tree(SplitTree),
    Delegate(Box<dyn TreeModel>),
}

impl ForestMember {
    pub fn distribution_for_instance(
        &self,
        instance: &dyn Instance,
        num_classes: usize,
    ) -> Vec<f64> {
        match self {
            ForestMember::Leaf(leaf) => leaf.class_counts.iter().map(|&c| c as f64).collect(),
            ForestMember::Delegate(model) => model.distribution_for_instance(instance),
            ForestMember::Tree(tree) => match tree.split.branch_for_instance(instance) {
                Some(branch) if branch < tree.branches.len() => {
                    match &tree.branches[branch].child {
                        BranchChild::Model(model) => model.distribution_for_instance(instance),
                        BranchChild::Tree(member) => {
                            member.distribution_for_instance(instance, num_classes)
                        }
                    }
                }
                _ => vec![0.0; num_classes],
            },
        }
    }

    pub fn num_leaves(&self) -> usize {
        match self {
            ForestMember::Leaf(_) => 1,
            ForestMember::Delegate(model) => model.num_leaves().max(1),
            ForestMember::Tree(tree) => tree.branches.iter().map(branch_leaves).sum(),
        }
    }

    pub fn describe(&self, header: &InstanceHeader, class_names: &[String]) -> String {
        match self {
            ForestMember::Leaf(leaf) => {
                leaf_line(leaf.majority_class, &leaf.class_counts, class_names)
            }
            ForestMember::Delegate(model) => model.describe(),
            ForestMember::Tree(tree) => describe_tree(tree, header, class_names),
        }
    }
}

fn branch_leaves(branch: &SplitBranch) -> usize {
    match &branch.child {
        BranchChild::Model(model) => model.num_leaves().max(1),
        BranchChild::Tree(member) => member.num_leaves(),
    }
}

fn describe_tree(tree: &SplitTree, header: &InstanceHeader, class_names: &[String]) -> String {
    let mut out = String::new();
    if tree.split.is_numeric() {
        // The <= side prints first even though it is branch 1.
        for (position, branch_index) in [1usize, 0].into_iter().enumerate() {
            if position > 0 {
                out.push('\n');
            }
            out.push_str(&tree.split.describe_branch(header, branch_index));
            if let Some(branch) = tree.branches.get(branch_index) {
                out.push_str(&branch_body(branch, header, class_names));
            }
        }
    } else {
        for (branch_index, branch) in tree.branches.iter().enumerate() {
            if branch_index > 0 {
                out.push('\n');
            }
            out.push_str(&tree.split.describe_branch(header, branch_index));
            out.push_str(&branch_body(branch, header, class_names));
        }
    }
    out
}

fn branch_body(branch: &SplitBranch, header: &InstanceHeader, class_names: &[String]) -> String {
    if branch_leaves(branch) <= 1 {
        let mut line = String::from(": ");
        line.push_str(&leaf_line(
            branch.majority_class,
            &branch.class_counts,
            class_names,
        ));
        line
    } else {
        let text = match &branch.child {
            BranchChild::Model(model) => model.describe(),
            BranchChild::Tree(member) => member.describe(header, class_names),
        };
        format!("\n{}", indent(&text))
    }
}

/// `majority {classA,3;classB,1;} (4/1)`: majority name, per-class counts,
/// then total over misclassified.
fn leaf_line(majority_class: usize, class_counts: &[usize], class_names: &[String]) -> String {
    let total: usize = class_counts.iter().sum();
    let majority_count = class_counts.get(majority_class).copied().unwrap_or(0);
    let errors = total - majority_count;

    let mut counts = String::new();
    for (name, count) in class_names.iter().zip(class_counts) {
        counts.push_str(name);
        counts.push(',');
        counts.push_str(&count.to_string());
        counts.push(';');
    }

    let majority_name = class_names
        .get(majority_class)
        .map_or("?", String::as_str);
    format!("{majority_name} {{{counts}}} ({total}/{errors})")
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("|   {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
