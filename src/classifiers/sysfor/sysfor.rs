use crate::classifiers::classifier::Classifier;
use crate::classifiers::error::BuildError;
use crate::classifiers::sysfor::cancellation::CancellationToken;
use crate::classifiers::sysfor::forest::Forest;
use crate::classifiers::sysfor::parameters::SysForParameters;
use crate::classifiers::sysfor::selector::select_good_attributes;
use crate::classifiers::sysfor::split::{ScoredSplit, SplitPoint, split_dataset};
use crate::classifiers::sysfor::tree::{
    BranchChild, ForestMember, LeafNode, SplitBranch, SplitTree,
};
use crate::classifiers::tree_learner::TreeLearner;
use crate::core::Dataset;
use crate::core::attributes::Attribute;
use crate::core::instances::Instance;
use crate::utils::math::max_index;
use std::sync::Arc;

/// The SysFor forest learner.
///
/// Builds first-level trees rooted at each good attribute, then revisits
/// those roots and grows second-level trees from the good attributes of each
/// branch subset, until the requested forest size is reached or the
/// candidates run out. Branch subsets that keep splitting are completed by
/// the external single-tree learner.
pub struct SysFor {
    parameters: SysForParameters,
    learner: Box<dyn TreeLearner>,
    forest: Option<Forest>,
}

impl SysFor {
    pub fn new(
        parameters: SysForParameters,
        learner: Box<dyn TreeLearner>,
    ) -> Result<SysFor, BuildError> {
        parameters.validate()?;
        Ok(SysFor {
            parameters,
            learner,
            forest: None,
        })
    }

    pub fn with_defaults(learner: Box<dyn TreeLearner>) -> SysFor {
        SysFor {
            parameters: SysForParameters::default(),
            learner,
            forest: None,
        }
    }

    pub fn parameters(&self) -> &SysForParameters {
        &self.parameters
    }

    pub fn forest(&self) -> Option<&Forest> {
        self.forest.as_ref()
    }

    /// Builds the forest over `dataset`.
    ///
    /// The token is polled at every branch and subtree boundary; once set,
    /// the member under construction is abandoned and the forest built so far
    /// becomes the result. A learner failure aborts the whole build instead.
    pub fn build(
        &mut self,
        dataset: &Dataset,
        cancel: &CancellationToken,
    ) -> Result<(), BuildError> {
        let header = Arc::clone(dataset.header());
        if header.number_of_classes() == 0 {
            return Err(BuildError::NonNominalClass);
        }
        if dataset.is_empty() {
            return Err(BuildError::EmptyDataset);
        }

        // Domains are fixed once, from the data as supplied, and reused for
        // every separation check including the stage-two subsets.
        let attribute_domains = attribute_domains(dataset);

        let mut data = dataset.clone();
        let class_index = data.class_index();
        for index in 0..data.num_attributes() {
            if index != class_index {
                data.delete_with_missing(index);
            }
        }

        let num_classes = header.number_of_classes();
        let mut forest = Forest::new(
            Arc::clone(&header),
            header.class_names(),
            data.class_counts(),
        );

        // Nothing but the class attribute: a single whole-dataset delegate is
        // the entire forest.
        if data.num_attributes() <= 1 {
            let model = self.learner.train(
                &data,
                self.parameters.confidence,
                self.parameters.min_leaf_size,
            )?;
            forest.push(ForestMember::Delegate(model));
            self.forest = Some(forest);
            return Ok(());
        }

        let good = select_good_attributes(&data, &self.parameters, &attribute_domains);
        let target = self.parameters.number_of_trees;

        // Stage one: a single-split tree per good attribute, best first.
        let mut index = 0usize;
        while forest.len() < target && index < good.len() {
            if cancel.is_cancelled() {
                self.forest = Some(forest);
                return Ok(());
            }
            match self.build_split_tree(&data, &good[index].split, cancel)? {
                Some(tree) => forest.push(ForestMember::Tree(tree)),
                None => {
                    self.forest = Some(forest);
                    return Ok(());
                }
            }
            index += 1;
        }

        // Stage two: revisit each stage-one root and grow two-level trees
        // from its branch subsets.
        let stage_one_count = forest.len();
        let mut index = 0usize;
        while forest.len() < target && index < stage_one_count {
            if cancel.is_cancelled() {
                self.forest = Some(forest);
                return Ok(());
            }
            let root = &good[index].split;
            let bags = split_dataset(&data, root);
            let nested: Vec<Vec<ScoredSplit>> = bags
                .iter()
                .map(|bag| select_good_attributes(bag, &self.parameters, &attribute_domains))
                .collect();

            // Size-weighted average candidate count, floored: how many more
            // trees this root can yield.
            let total: usize = bags.iter().map(Dataset::num_instances).sum();
            let weighted: usize = nested
                .iter()
                .zip(&bags)
                .map(|(candidates, bag)| candidates.len() * bag.num_instances())
                .sum();
            let possible = if total == 0 { 0 } else { weighted / total };

            let mut x = 0usize;
            while forest.len() < target && x < possible {
                let mut branches = Vec::with_capacity(bags.len());
                for (bag, candidates) in bags.iter().zip(&nested) {
                    if cancel.is_cancelled() {
                        self.forest = Some(forest);
                        return Ok(());
                    }
                    // Each branch takes its (x+1)-th candidate when it has
                    // one, its best otherwise, and stays a leaf when it has
                    // none to offer.
                    let chosen = if candidates.len() > x + 1 {
                        Some(&candidates[x + 1].split)
                    } else if bag.num_instances() == 1 || candidates.is_empty() {
                        None
                    } else {
                        Some(&candidates[0].split)
                    };
                    let member = match chosen {
                        Some(split) => match self.build_split_tree(bag, split, cancel)? {
                            Some(tree) => ForestMember::Tree(tree),
                            None => {
                                self.forest = Some(forest);
                                return Ok(());
                            }
                        },
                        None => leaf_member(bag, num_classes),
                    };
                    let class_counts = bag.class_counts();
                    let majority_class = bag.majority_class();
                    branches.push(SplitBranch {
                        class_counts,
                        majority_class,
                        child: BranchChild::Tree(Box::new(member)),
                    });
                }
                forest.push(ForestMember::Tree(SplitTree {
                    split: root.clone(),
                    branches,
                }));
                x += 1;
            }
            index += 1;
        }

        self.forest = Some(forest);
        Ok(())
    }

    pub fn distribution_for_instance(&self, instance: &dyn Instance) -> Option<Vec<f64>> {
        self.forest
            .as_ref()
            .map(|forest| forest.distribution_for_instance(instance))
    }

    pub fn classify_instance(&self, instance: &dyn Instance) -> Option<usize> {
        self.distribution_for_instance(instance)
            .map(|distribution| max_index(&distribution))
    }

    pub fn predicted_class_name(&self, instance: &dyn Instance) -> Option<&str> {
        let forest = self.forest.as_ref()?;
        let class = forest.classify_instance(instance);
        forest.class_names().get(class).map(String::as_str)
    }

    pub fn describe(&self) -> String {
        match &self.forest {
            Some(forest) => forest.describe(),
            None => "No forest built".to_string(),
        }
    }

    /// One single-split tree: partitions `data` at `split` and completes
    /// every branch with the external learner. `Ok(None)` means the build was
    /// cancelled mid-member.
    fn build_split_tree(
        &self,
        data: &Dataset,
        split: &SplitPoint,
        cancel: &CancellationToken,
    ) -> Result<Option<SplitTree>, BuildError> {
        let bags = split_dataset(data, split);
        let mut branches = Vec::with_capacity(bags.len());
        for bag in &bags {
            if cancel.is_cancelled() {
                return Ok(None);
            }
            let class_counts = bag.class_counts();
            let majority_class = bag.majority_class();
            let model = self.learner.train(
                bag,
                self.parameters.confidence,
                self.parameters.min_leaf_size,
            )?;
            branches.push(SplitBranch {
                class_counts,
                majority_class,
                child: BranchChild::Model(model),
            });
        }
        Ok(Some(SplitTree {
            split: split.clone(),
            branches,
        }))
    }
}

impl Classifier for SysFor {
    fn build_classifier(&mut self, dataset: &Dataset) -> Result<(), BuildError> {
        self.build(dataset, &CancellationToken::new())
    }

    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Option<Vec<f64>> {
        self.distribution_for_instance(instance)
    }
}

/// A leaf over a branch subset: one-hot counts for the first record's class,
/// class 0 when the subset is empty.
fn leaf_member(bag: &Dataset, num_classes: usize) -> ForestMember {
    let class = bag
        .instance(0)
        .and_then(Instance::class_value)
        .map_or(0, |c| if c.is_nan() { 0 } else { c as usize });
    let mut class_counts = vec![0usize; num_classes];
    if class < num_classes {
        class_counts[class] = 1;
    }
    ForestMember::Leaf(LeafNode {
        class_counts,
        majority_class: class,
    })
}

/// Per-attribute domain sizes: value range for numeric attributes, count of
/// distinct observed values for nominal ones. Missing values are skipped.
fn attribute_domains(data: &Dataset) -> Vec<f64> {
    let header = data.header();
    (0..data.num_attributes())
        .map(|index| {
            let is_nominal = header
                .attribute_at_index(index)
                .is_some_and(|attribute| attribute.is_nominal());
            let values = data.attribute_values(index);
            if is_nominal {
                let mut seen: Vec<usize> = values
                    .iter()
                    .filter(|v| !v.is_nan())
                    .map(|&v| v as usize)
                    .collect();
                seen.sort_unstable();
                seen.dedup();
                seen.len() as f64
            } else {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                for &v in &values {
                    if v.is_nan() {
                        continue;
                    }
                    if v < min {
                        min = v;
                    }
                    if v > max {
                        max = v;
                    }
                }
                if min > max { 0.0 } else { max - min }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::tree_learner::TreeModel;
    use crate::testing::dummies::{
        class_only_header, class_only_instance, numeric_binary_header, numeric_instance,
        random_two_numeric_dataset, two_numeric_header, two_numeric_instance,
    };
    use crate::testing::stubs::{FailingTreeLearner, MajorityTreeLearner};
    use std::cell::Cell;

    fn separable_dataset() -> Dataset {
        let header = numeric_binary_header();
        let instances = (1..=20)
            .map(|i| numeric_instance(&header, i as f64, if i <= 10 { 0 } else { 1 }))
            .collect();
        Dataset::with_instances(header, instances)
    }

    /// Two informative attributes so the build reaches stage two.
    fn two_attribute_dataset() -> Dataset {
        let header = two_numeric_header();
        let instances = (1..=20)
            .map(|i| {
                two_numeric_instance(&header, i as f64, i as f64 + 0.5, if i <= 10 { 0 } else { 1 })
            })
            .collect();
        Dataset::with_instances(header, instances)
    }

    fn learner(
        parameters: SysForParameters,
    ) -> SysFor {
        SysFor::new(parameters, Box::new(MajorityTreeLearner)).unwrap()
    }

    fn small_leaf_parameters() -> SysForParameters {
        SysForParameters {
            min_leaf_size: 2,
            ..SysForParameters::default()
        }
    }

    #[test]
    fn single_good_attribute_caps_the_forest_at_what_is_achievable() {
        // One good attribute and homogeneous branch subsets: stage one adds
        // one tree and stage two has no candidates, far short of the 60
        // requested.
        let mut sysfor = learner(SysForParameters::default());
        sysfor
            .build(&separable_dataset(), &CancellationToken::new())
            .unwrap();

        let forest = sysfor.forest().unwrap();
        assert_eq!(forest.len(), 1);
        assert!(forest.len() <= sysfor.parameters().number_of_trees);

        let text = sysfor.describe();
        assert!(text.contains("Tree 1: \n"));
        assert!(text.contains("x <= 10.5"));
        assert!(text.contains("x > 10.5"));
    }

    #[test]
    fn forest_never_exceeds_the_requested_size() {
        let parameters = SysForParameters {
            min_leaf_size: 2,
            number_of_trees: 3,
            ..SysForParameters::default()
        };
        let mut sysfor = learner(parameters);
        sysfor
            .build(&two_attribute_dataset(), &CancellationToken::new())
            .unwrap();
        assert!(sysfor.forest().unwrap().len() <= 3);
    }

    #[test]
    fn classification_routes_through_the_root_split() {
        let mut sysfor = learner(SysForParameters::default());
        let data = separable_dataset();
        sysfor.build(&data, &CancellationToken::new()).unwrap();

        let header = numeric_binary_header();
        let low = numeric_instance(&header, 3.0, 0);
        let high = numeric_instance(&header, 17.0, 0);
        assert_eq!(sysfor.classify_instance(&low), Some(0));
        assert_eq!(sysfor.classify_instance(&high), Some(1));
        assert_eq!(sysfor.predicted_class_name(&high), Some("b"));
    }

    #[test]
    fn votes_form_a_distribution() {
        let parameters = small_leaf_parameters();
        let mut sysfor = learner(parameters);
        let data = random_two_numeric_dataset(7, 60);
        sysfor.build(&data, &CancellationToken::new()).unwrap();

        let header = two_numeric_header();
        for (x, z) in [(0.5, 0.5), (9.0, 9.0), (5.0, 5.0)] {
            let instance = two_numeric_instance(&header, x, z, 0);
            let distribution = sysfor.distribution_for_instance(&instance).unwrap();
            assert_eq!(distribution.len(), 2);
            assert!(distribution.iter().all(|&p| p >= 0.0));
            assert!((distribution.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn building_twice_gives_the_same_forest() {
        let data = two_attribute_dataset();
        let mut first = learner(small_leaf_parameters());
        first.build(&data, &CancellationToken::new()).unwrap();
        let mut second = learner(small_leaf_parameters());
        second.build(&data, &CancellationToken::new()).unwrap();

        assert_eq!(first.describe(), second.describe());
        assert_eq!(first.forest().unwrap().len(), second.forest().unwrap().len());
    }

    #[test]
    fn class_only_dataset_gets_a_single_delegate() {
        let header = class_only_header();
        let instances = (0..10)
            .map(|i| class_only_instance(&header, if i < 7 { 0 } else { 1 }))
            .collect();
        let data = Dataset::with_instances(header.clone(), instances);

        let mut sysfor = learner(SysForParameters::default());
        sysfor.build(&data, &CancellationToken::new()).unwrap();

        let forest = sysfor.forest().unwrap();
        assert_eq!(forest.len(), 1);
        assert!(matches!(forest.members()[0], ForestMember::Delegate(_)));

        let instance = class_only_instance(&header, 0);
        assert_eq!(sysfor.classify_instance(&instance), Some(0));
    }

    #[test]
    fn no_good_attributes_leaves_an_empty_forest_with_majority_fallback() {
        // Every value identical: no split point exists anywhere.
        let header = numeric_binary_header();
        let instances = (0..20)
            .map(|i| numeric_instance(&header, 5.0, if i < 14 { 1 } else { 0 }))
            .collect();
        let data = Dataset::with_instances(header.clone(), instances);

        let mut sysfor = learner(SysForParameters::default());
        sysfor.build(&data, &CancellationToken::new()).unwrap();

        let forest = sysfor.forest().unwrap();
        assert!(forest.is_empty());

        let instance = numeric_instance(&header, 5.0, 0);
        assert_eq!(
            sysfor.distribution_for_instance(&instance),
            Some(vec![0.0, 1.0])
        );
    }

    #[test]
    fn missing_values_are_dropped_before_scoring() {
        let header = numeric_binary_header();
        let mut instances: Vec<_> = (1..=20)
            .map(|i| numeric_instance(&header, i as f64, if i <= 10 { 0 } else { 1 }))
            .collect();
        instances.push(numeric_instance(&header, f64::NAN, 1));
        let data = Dataset::with_instances(header, instances);

        let mut sysfor = learner(SysForParameters::default());
        sysfor.build(&data, &CancellationToken::new()).unwrap();
        assert_eq!(sysfor.forest().unwrap().len(), 1);
        assert!(sysfor.describe().contains("x <= 10.5"));
    }

    #[test]
    fn learner_failure_aborts_the_build() {
        let mut sysfor =
            SysFor::new(SysForParameters::default(), Box::new(FailingTreeLearner)).unwrap();
        let err = sysfor
            .build(&separable_dataset(), &CancellationToken::new())
            .unwrap_err();
        assert!(matches!(err, BuildError::Learner(_)));
        assert!(sysfor.forest().is_none());
    }

    /// Delegates to the majority learner, cancelling the shared token after a
    /// fixed number of train calls.
    struct CancelAfter {
        remaining: Cell<usize>,
        token: CancellationToken,
    }

    impl TreeLearner for CancelAfter {
        fn train(
            &self,
            dataset: &Dataset,
            confidence: f64,
            min_leaf_size: usize,
        ) -> Result<Box<dyn TreeModel>, BuildError> {
            let model = MajorityTreeLearner.train(dataset, confidence, min_leaf_size)?;
            let left = self.remaining.get();
            if left <= 1 {
                self.token.cancel();
            }
            self.remaining.set(left.saturating_sub(1));
            Ok(model)
        }
    }

    #[test]
    fn cancellation_yields_a_strict_prefix() {
        let data = two_attribute_dataset();

        let mut full = learner(small_leaf_parameters());
        full.build(&data, &CancellationToken::new()).unwrap();
        let full_members: Vec<String> = {
            let forest = full.forest().unwrap();
            forest
                .members()
                .iter()
                .map(|m| m.describe(forest.header(), forest.class_names()))
                .collect()
        };
        assert!(full_members.len() > 1);

        let token = CancellationToken::new();
        let cancelling = Box::new(CancelAfter {
            remaining: Cell::new(3),
            token: token.clone(),
        });
        let mut partial = SysFor::new(small_leaf_parameters(), cancelling).unwrap();
        partial.build(&data, &token).unwrap();

        let forest = partial.forest().unwrap();
        assert!(forest.len() < full_members.len());
        for (i, member) in forest.members().iter().enumerate() {
            let text = member.describe(forest.header(), forest.class_names());
            assert_eq!(text, full_members[i]);
        }
    }

    #[test]
    fn describe_before_building_says_so() {
        let sysfor = learner(SysForParameters::default());
        assert_eq!(sysfor.describe(), "No forest built");
        let header = numeric_binary_header();
        let instance = numeric_instance(&header, 1.0, 0);
        assert_eq!(sysfor.distribution_for_instance(&instance), None);
    }

    #[test]
    fn stage_two_members_nest_their_branches() {
        let mut sysfor = learner(small_leaf_parameters());
        sysfor
            .build(&two_attribute_dataset(), &CancellationToken::new())
            .unwrap();
        let forest = sysfor.forest().unwrap();
        assert!(forest.len() > 2, "expected stage two to add members");

        let has_nested = forest.members().iter().any(|member| match member {
            ForestMember::Tree(tree) => tree
                .branches
                .iter()
                .any(|branch| matches!(branch.child, BranchChild::Tree(_))),
            _ => false,
        });
        assert!(has_nested);
    }
}
