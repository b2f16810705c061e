use crate::classifiers::error::BuildError;
use crate::core::Dataset;
use crate::core::instances::Instance;

pub trait Classifier {
    fn build_classifier(&mut self, dataset: &Dataset) -> Result<(), BuildError>;
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Option<Vec<f64>>;
}
