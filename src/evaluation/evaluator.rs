use crate::core::instances::Instance;
use crate::evaluation::confusion_matrix::ConfusionMatrix;
use crate::evaluation::measurement::Measurement;
use crate::utils::math::max_index;

/// Batch classification evaluator: feed it `(instance, votes)` pairs and read
/// accuracy, kappa and the confusion matrix back.
pub struct ClassificationEvaluator {
    matrix: ConfusionMatrix,
}

impl ClassificationEvaluator {
    pub fn new(class_names: Vec<String>) -> ClassificationEvaluator {
        ClassificationEvaluator {
            matrix: ConfusionMatrix::new(class_names),
        }
    }

    /// Records one classified instance. Instances with a missing class and
    /// empty vote vectors are skipped.
    pub fn add_result(&mut self, instance: &dyn Instance, votes: &[f64]) {
        let Some(actual) = instance.class_value() else {
            return;
        };
        if actual.is_nan() || votes.is_empty() {
            return;
        }
        self.matrix.add(actual as usize, max_index(votes));
    }

    pub fn matrix(&self) -> &ConfusionMatrix {
        &self.matrix
    }

    pub fn performance(&self) -> Vec<Measurement> {
        vec![
            Measurement::new("accuracy", self.matrix.accuracy()),
            Measurement::new("kappa", self.matrix.kappa()),
        ]
    }
}
