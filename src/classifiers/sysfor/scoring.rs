use crate::utils::math::log2;

/// Entropy of a class distribution `counts` over `total` records, in bits.
pub fn info(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let mut sum = 0.0;
    for &c in counts {
        let p = c as f64 / n;
        sum += p * log2(p);
    }
    -sum
}

/// Information gain of a two-way numeric split given the parent entropy.
pub fn numeric_gain(left_counts: &[usize], right_counts: &[usize], info_before: f64) -> f64 {
    let total_left: usize = left_counts.iter().sum();
    let total_right: usize = right_counts.iter().sum();
    let total = total_left + total_right;
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;

    let info_left = info(left_counts, total_left) * (total_left as f64 / n);
    let info_right = info(right_counts, total_right) * (total_right as f64 / n);

    info_before - (info_left + info_right)
}

/// Split information of a two-way numeric split: entropy of the partition
/// size distribution.
pub fn numeric_split_info(left_counts: &[usize], right_counts: &[usize]) -> f64 {
    let total_left: usize = left_counts.iter().sum();
    let total_right: usize = right_counts.iter().sum();
    let total = total_left + total_right;
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;

    let p_left = total_left as f64 / n;
    let p_right = total_right as f64 / n;
    -(p_left * log2(p_left) + p_right * log2(p_right))
}

/// Information gain of a multiway nominal split given the parent entropy.
///
/// A split with an empty bag is fruitless: the dataset is already homogeneous
/// along this attribute, and the after-split information is taken as 0 so the
/// raw gain flows through unchanged. Deliberately asymmetric with the numeric
/// path; changing it would reorder degenerate nominal candidates.
pub fn nominal_gain(bag_counts: &[Vec<usize>], info_before: f64) -> f64 {
    let totals: Vec<usize> = bag_counts.iter().map(|bag| bag.iter().sum()).collect();
    let total: usize = totals.iter().sum();

    let fruitless = totals.iter().any(|&t| t == 0);
    if fruitless {
        return info_before;
    }

    let n = total as f64;
    let mut info_after = 0.0;
    for (bag, &bag_total) in bag_counts.iter().zip(&totals) {
        info_after += info(bag, bag_total) * (bag_total as f64 / n);
    }
    info_before - info_after
}

/// Split information of a multiway nominal split.
pub fn nominal_split_info(bag_counts: &[Vec<usize>]) -> f64 {
    let totals: Vec<usize> = bag_counts.iter().map(|bag| bag.iter().sum()).collect();
    let total: usize = totals.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;

    let mut split_info = 0.0;
    for &bag_total in &totals {
        let p = bag_total as f64 / n;
        split_info += p * log2(p);
    }
    -split_info
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn info_of_pure_distribution_is_zero() {
        assert!(info(&[10, 0], 10).abs() < EPS);
        assert!(info(&[0, 0], 0).abs() < EPS);
    }

    #[test]
    fn info_of_even_binary_distribution_is_one_bit() {
        assert!((info(&[5, 5], 10) - 1.0).abs() < EPS);
    }

    #[test]
    fn perfect_numeric_split_recovers_parent_entropy() {
        let info_before = info(&[10, 10], 20);
        let gain = numeric_gain(&[10, 0], &[0, 10], info_before);
        assert!((gain - info_before).abs() < EPS);
    }

    #[test]
    fn useless_numeric_split_gains_nothing() {
        let info_before = info(&[10, 10], 20);
        let gain = numeric_gain(&[5, 5], &[5, 5], info_before);
        assert!(gain.abs() < EPS);
    }

    #[test]
    fn even_numeric_split_info_is_one_bit() {
        assert!((numeric_split_info(&[10, 0], &[0, 10]) - 1.0).abs() < EPS);
    }

    #[test]
    fn nominal_gain_weighs_bags_by_size() {
        let info_before = info(&[4, 4], 8);
        let bags = vec![vec![4, 0], vec![0, 4]];
        assert!((nominal_gain(&bags, info_before) - info_before).abs() < EPS);

        let bags = vec![vec![2, 2], vec![2, 2]];
        assert!(nominal_gain(&bags, info_before).abs() < EPS);
    }

    #[test]
    fn fruitless_nominal_split_uses_raw_gain() {
        // One declared value never occurs: the empty bag makes the split
        // fruitless and the parent entropy comes back untouched.
        let info_before = info(&[3, 5], 8);
        let bags = vec![vec![3, 5], vec![0, 0]];
        assert!((nominal_gain(&bags, info_before) - info_before).abs() < EPS);
    }

    #[test]
    fn nominal_split_info_matches_numeric_for_two_bags() {
        let bags = vec![vec![3, 1], vec![2, 2]];
        let expected = numeric_split_info(&[3, 1], &[2, 2]);
        assert!((nominal_split_info(&bags) - expected).abs() < EPS);
    }
}
