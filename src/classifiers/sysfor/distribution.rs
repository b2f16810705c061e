use crate::core::Dataset;
use crate::core::instances::Instance;

/// Tracks how many records of each class sit on either side of a moving
/// numeric split boundary.
///
/// The records are held once, sorted ascending by the tested attribute; a
/// cursor separates the left partition (values at or below every threshold
/// shifted so far) from the right. Thresholds must be applied in increasing
/// order within one scan; a new scan takes a new tracker.
pub struct NumericSplitDistribution {
    records: Vec<(f64, usize)>,
    cursor: usize,
    left_counts: Vec<usize>,
    right_counts: Vec<usize>,
}

impl NumericSplitDistribution {
    pub fn new(dataset: &Dataset, attribute_index: usize) -> NumericSplitDistribution {
        let num_classes = dataset.num_classes();
        let mut records: Vec<(f64, usize)> = dataset
            .iter()
            .filter_map(|instance| {
                let value = instance.value_at_index(attribute_index)?;
                let class = instance.class_value()?;
                if value.is_nan() || class.is_nan() {
                    return None;
                }
                Some((value, class as usize))
            })
            .collect();
        records.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut right_counts = vec![0usize; num_classes];
        for &(_, class) in &records {
            if class < num_classes {
                right_counts[class] += 1;
            }
        }

        NumericSplitDistribution {
            records,
            cursor: 0,
            left_counts: vec![0usize; num_classes],
            right_counts,
        }
    }

    /// Moves every right-side record with `value <= threshold` to the left
    /// side and returns how many records moved.
    pub fn shift(&mut self, threshold: f64) -> usize {
        let mut moved = 0usize;
        while self.cursor < self.records.len() && self.records[self.cursor].0 <= threshold {
            let class = self.records[self.cursor].1;
            if class < self.left_counts.len() {
                self.left_counts[class] += 1;
                self.right_counts[class] -= 1;
            }
            self.cursor += 1;
            moved += 1;
        }
        moved
    }

    pub fn num_left(&self) -> usize {
        self.cursor
    }

    pub fn num_right(&self) -> usize {
        self.records.len() - self.cursor
    }

    pub fn left_counts(&self) -> &[usize] {
        &self.left_counts
    }

    pub fn right_counts(&self) -> &[usize] {
        &self.right_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dataset;
    use crate::testing::dummies::{numeric_binary_header, numeric_instance};

    fn dataset(rows: &[(f64, usize)]) -> Dataset {
        let header = numeric_binary_header();
        let instances = rows
            .iter()
            .map(|&(x, y)| numeric_instance(&header, x, y))
            .collect();
        Dataset::with_instances(header, instances)
    }

    #[test]
    fn starts_with_everything_on_the_right() {
        let d = dataset(&[(1.0, 0), (2.0, 0), (3.0, 1)]);
        let dist = NumericSplitDistribution::new(&d, 0);
        assert_eq!(dist.num_left(), 0);
        assert_eq!(dist.num_right(), 3);
        assert_eq!(dist.right_counts(), &[2, 1]);
    }

    #[test]
    fn shift_moves_records_at_or_below_threshold() {
        let d = dataset(&[(3.0, 1), (1.0, 0), (2.0, 0), (4.0, 1)]);
        let mut dist = NumericSplitDistribution::new(&d, 0);

        assert_eq!(dist.shift(1.5), 1);
        assert_eq!(dist.left_counts(), &[1, 0]);
        assert_eq!(dist.right_counts(), &[1, 2]);

        assert_eq!(dist.shift(3.0), 2);
        assert_eq!(dist.num_left(), 3);
        assert_eq!(dist.left_counts(), &[2, 1]);
        assert_eq!(dist.right_counts(), &[0, 1]);
    }

    #[test]
    fn shift_below_cursor_moves_nothing() {
        let d = dataset(&[(1.0, 0), (2.0, 1)]);
        let mut dist = NumericSplitDistribution::new(&d, 0);
        dist.shift(1.5);
        assert_eq!(dist.shift(0.5), 0);
        assert_eq!(dist.num_left(), 1);
    }
}
