use serde::Serialize;

/// Summarized scalar metric produced by an evaluation.
///
/// Typical examples: `"accuracy"`, `"kappa"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    /// Convenience constructor
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
