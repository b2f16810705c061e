use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("dataset has no instances")]
    EmptyDataset,

    #[error("class attribute must be nominal with at least one value")]
    NonNominalClass,

    #[error("tree learner failed: {0}")]
    Learner(String),
}
