use crate::core::Dataset;
use crate::testing::dummies::{two_numeric_header, two_numeric_instance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A seeded dataset over two numeric attributes in `[0, 10)` with the class
/// decided by `x + z <= 10`. Same seed, same dataset.
pub fn random_two_numeric_dataset(seed: u64, num_instances: usize) -> Dataset {
    let header = two_numeric_header();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dataset = Dataset::new(header.clone());
    for _ in 0..num_instances {
        let x: f64 = rng.random_range(0.0..10.0);
        let z: f64 = rng.random_range(0.0..10.0);
        let class = if x + z <= 10.0 { 0 } else { 1 };
        dataset.push(two_numeric_instance(&header, x, z, class));
    }
    dataset
}
