use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use std::sync::Arc;

/// An ordered, in-memory collection of instances sharing one header.
///
/// Subsets produced by filtering or partitioning are independent copies;
/// mutating a subset never aliases back into its parent.
#[derive(Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>) -> Dataset {
        Dataset {
            header,
            instances: Vec::new(),
        }
    }

    pub fn with_instances(header: Arc<InstanceHeader>, instances: Vec<DenseInstance>) -> Dataset {
        Dataset { header, instances }
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn num_instances(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn num_attributes(&self) -> usize {
        self.header.number_of_attributes()
    }

    pub fn num_classes(&self) -> usize {
        self.header.number_of_classes()
    }

    pub fn class_index(&self) -> usize {
        self.header.class_index()
    }

    pub fn instance(&self, index: usize) -> Option<&DenseInstance> {
        self.instances.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DenseInstance> {
        self.instances.iter()
    }

    pub fn push(&mut self, instance: DenseInstance) {
        self.instances.push(instance);
    }

    /// An empty dataset over the same header.
    pub fn empty_like(&self) -> Dataset {
        Dataset::new(Arc::clone(&self.header))
    }

    /// Per-class instance counts; records with a missing class are skipped.
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.num_classes()];
        for instance in &self.instances {
            if let Some(class) = instance.class_value() {
                if class.is_nan() {
                    continue;
                }
                let class = class as usize;
                if class < counts.len() {
                    counts[class] += 1;
                }
            }
        }
        counts
    }

    /// Index of the most frequent class (first maximum); 0 for an empty dataset.
    pub fn majority_class(&self) -> usize {
        let counts = self.class_counts();
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

    pub fn attribute_values(&self, index: usize) -> Vec<f64> {
        self.instances
            .iter()
            .filter_map(|i| i.value_at_index(index))
            .collect()
    }

    /// Removes every record whose value at `index` is missing.
    pub fn delete_with_missing(&mut self, index: usize) {
        self.instances.retain(|i| !i.is_missing_at_index(index));
    }

    /// A copy of this dataset sorted ascending by the value at `index`.
    pub fn sorted_by_attribute(&self, index: usize) -> Dataset {
        let mut instances = self.instances.clone();
        instances.sort_by(|a, b| {
            let va = a.value_at_index(index).unwrap_or(f64::NAN);
            let vb = b.value_at_index(index).unwrap_or(f64::NAN);
            va.total_cmp(&vb)
        });
        Dataset::with_instances(Arc::clone(&self.header), instances)
    }
}
