use crate::core::Dataset;
use crate::core::attributes::{Attribute, NominalAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;

/// A root split candidate: an attribute, and for numeric attributes a
/// threshold. Nominal attributes split one branch per declared value and
/// carry no threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPoint {
    pub attribute_index: usize,
    pub threshold: Option<f64>,
}

impl SplitPoint {
    pub fn numeric(attribute_index: usize, threshold: f64) -> SplitPoint {
        SplitPoint {
            attribute_index,
            threshold: Some(threshold),
        }
    }

    pub fn nominal(attribute_index: usize) -> SplitPoint {
        SplitPoint {
            attribute_index,
            threshold: None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.threshold.is_some()
    }

    /// Number of branches this split produces under `header`.
    pub fn num_branches(&self, header: &InstanceHeader) -> usize {
        match self.threshold {
            Some(_) => 2,
            None => header
                .attribute_at_index(self.attribute_index)
                .and_then(|attr| attr.as_any().downcast_ref::<NominalAttribute>())
                .map_or(0, NominalAttribute::num_values),
        }
    }

    /// Branch index for `instance`, or `None` when the tested value is
    /// missing. Numeric splits route `value > threshold` to branch 0 and
    /// `value <= threshold` to branch 1; nominal splits route by value index.
    pub fn branch_for_instance(&self, instance: &dyn Instance) -> Option<usize> {
        let value = instance.value_at_index(self.attribute_index)?;
        if value.is_nan() {
            return None;
        }
        match self.threshold {
            Some(threshold) => Some(if value > threshold { 0 } else { 1 }),
            None => Some(value as usize),
        }
    }

    /// Human-readable predicate for one branch, e.g. `age <= 30.5` or
    /// `outlook = sunny`.
    pub fn describe_branch(&self, header: &InstanceHeader, branch: usize) -> String {
        let name = header
            .attribute_at_index(self.attribute_index)
            .map_or("?", |attr| attr.name());
        match self.threshold {
            Some(threshold) => {
                if branch == 0 {
                    format!("{name} > {threshold}")
                } else {
                    format!("{name} <= {threshold}")
                }
            }
            None => {
                let value = header
                    .attribute_at_index(self.attribute_index)
                    .and_then(|attr| attr.as_any().downcast_ref::<NominalAttribute>())
                    .and_then(|nominal| nominal.value_name(branch))
                    .unwrap_or("?");
                format!("{name} = {value}")
            }
        }
    }
}

/// A split candidate with its computed gain ratio.
#[derive(Debug, Clone)]
pub struct ScoredSplit {
    pub split: SplitPoint,
    pub gain_ratio: f64,
}

/// Partitions `data` into per-branch subsets. Numeric splits return
/// `[> threshold, <= threshold]`; nominal splits return one bag per declared
/// value. Each subset is an independent copy.
pub fn split_dataset(data: &Dataset, split: &SplitPoint) -> Vec<Dataset> {
    let num_branches = split.num_branches(data.header());
    let mut bags: Vec<Dataset> = (0..num_branches).map(|_| data.empty_like()).collect();

    for instance in data.iter() {
        if let Some(branch) = split.branch_for_instance(instance) {
            if branch < bags.len() {
                bags[branch].push(instance.clone());
            }
        }
    }

    bags
}
