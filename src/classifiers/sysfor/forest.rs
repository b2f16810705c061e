use crate::classifiers::sysfor::tree::ForestMember;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::utils::math::{max_index, normalize};
use std::sync::Arc;

/// A built forest: an ordered sequence of members plus the class metadata
/// needed to vote. Grows only during one build call and is read-only
/// afterwards.
pub struct Forest {
    header: Arc<InstanceHeader>,
    members: Vec<ForestMember>,
    class_names: Vec<String>,
    training_class_counts: Vec<usize>,
}

impl Forest {
    pub(crate) fn new(
        header: Arc<InstanceHeader>,
        class_names: Vec<String>,
        training_class_counts: Vec<usize>,
    ) -> Forest {
        Forest {
            header,
            members: Vec::new(),
            class_names,
            training_class_counts,
        }
    }

    pub(crate) fn push(&mut self, member: ForestMember) {
        self.members.push(member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[ForestMember] {
        &self.members
    }

    pub fn num_classes(&self) -> usize {
        self.class_names.len()
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    /// Majority-vote class distribution for `instance`.
    ///
    /// Each member casts one vote for its most probable class while its
    /// probability mass for that class accumulates separately. The vote
    /// counts are normalized; when the normalized mass on class 0 is exactly
    /// one half (an exact tie between two classes) the accumulated full
    /// supports decide instead. An empty forest predicts the training
    /// majority class outright.
    pub fn distribution_for_instance(&self, instance: &dyn Instance) -> Vec<f64> {
        let num_classes = self.num_classes();
        if self.members.is_empty() {
            let mut distribution = vec![0.0; num_classes];
            let majority = majority_of(&self.training_class_counts);
            if majority < distribution.len() {
                distribution[majority] = 1.0;
            }
            return distribution;
        }

        let mut votes = vec![0.0; num_classes];
        let mut full_supports = vec![0.0; num_classes];
        for member in &self.members {
            let member_distribution = member.distribution_for_instance(instance, num_classes);
            let top = max_index(&member_distribution);
            if top < num_classes {
                full_supports[top] += member_distribution[top];
                votes[top] += 1.0;
            }
        }

        normalize(&mut votes);
        if !votes.is_empty() && votes[0] == 0.5 {
            normalize(&mut full_supports);
            return full_supports;
        }
        votes
    }

    /// Index of the most voted class for `instance`.
    pub fn classify_instance(&self, instance: &dyn Instance) -> usize {
        max_index(&self.distribution_for_instance(instance))
    }

    pub fn num_leaves(&self) -> usize {
        self.members.iter().map(ForestMember::num_leaves).sum()
    }

    /// One text block per member, numbered in insertion order.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for (i, member) in self.members.iter().enumerate() {
            if i != 0 {
                out.push('\n');
            }
            out.push_str(&format!("Tree {}: \n", i + 1));
            out.push_str(&member.describe(&self.header, &self.class_names));
            out.push('\n');
        }
        out
    }
}

fn majority_of(counts: &[usize]) -> usize {
    let mut best = 0usize;
    let mut best_count = 0usize;
    for (i, &c) in counts.iter().enumerate() {
        if c > best_count {
            best = i;
            best_count = c;
        }
    }
    best
}
