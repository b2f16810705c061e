mod confusion_matrix;
mod evaluator;
mod measurement;

pub use confusion_matrix::ConfusionMatrix;
pub use evaluator::ClassificationEvaluator;
pub use measurement::Measurement;
