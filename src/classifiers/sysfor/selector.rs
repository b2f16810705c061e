use crate::classifiers::sysfor::distribution::NumericSplitDistribution;
use crate::classifiers::sysfor::parameters::SysForParameters;
use crate::classifiers::sysfor::scoring::{
    info, nominal_gain, nominal_split_info, numeric_gain, numeric_split_info,
};
use crate::classifiers::sysfor::split::{ScoredSplit, SplitPoint};
use crate::core::Dataset;
use crate::core::attributes::{Attribute, NominalAttribute};
use crate::core::instances::Instance;

/// Selects the set of good attributes for `data`: every split candidate whose
/// gain ratio lies within `parameters.goodness` of the best one, ordered best
/// first.
///
/// Nominal attributes contribute at most one multiway candidate and are
/// skipped entirely unless at least two of their bags reach the minimum leaf
/// size. Numeric attributes may contribute several thresholds, greedily
/// picked by gain ratio and thinned so that no two retained thresholds lie
/// within `parameters.separation` of each other, normalized by the
/// attribute's domain in `attribute_domains`.
pub fn select_good_attributes(
    data: &Dataset,
    parameters: &SysForParameters,
    attribute_domains: &[f64],
) -> Vec<ScoredSplit> {
    let class_index = data.class_index();
    let info_before = info(&data.class_counts(), data.num_instances());

    let mut scored: Vec<ScoredSplit> = Vec::new();
    for index in 0..data.num_attributes() {
        if index == class_index {
            continue;
        }
        let Some(attribute) = data.header().attribute_at_index(index) else {
            continue;
        };
        if attribute.is_nominal() {
            if let Some(candidate) = nominal_candidate(data, index, parameters, info_before) {
                scored.push(candidate);
            }
        } else {
            let domain = attribute_domains.get(index).copied().unwrap_or(0.0);
            scored.extend(numeric_candidates(
                data,
                index,
                parameters,
                domain,
                info_before,
            ));
        }
    }

    // Stable descending order keeps discovery order for equal gain ratios.
    scored.sort_by(|a, b| b.gain_ratio.total_cmp(&a.gain_ratio));

    if let Some(first) = scored.first() {
        let best = first.gain_ratio;
        let goodness = parameters.goodness;
        let mut position = 0usize;
        scored.retain(|candidate| {
            let keep = if position == 0 {
                true
            } else {
                let mut ratio = candidate.gain_ratio;
                if ratio == f64::NEG_INFINITY {
                    ratio = 0.0;
                }
                (ratio - best).abs() <= goodness
            };
            position += 1;
            keep
        });
    }

    scored
}

fn nominal_candidate(
    data: &Dataset,
    index: usize,
    parameters: &SysForParameters,
    info_before: f64,
) -> Option<ScoredSplit> {
    let nominal = data
        .header()
        .attribute_at_index(index)?
        .as_any()
        .downcast_ref::<NominalAttribute>()?;
    let num_values = nominal.num_values();
    let num_classes = data.num_classes();

    let mut bags = vec![vec![0usize; num_classes]; num_values];
    for instance in data.iter() {
        let (Some(value), Some(class)) = (instance.value_at_index(index), instance.class_value())
        else {
            continue;
        };
        if value.is_nan() || class.is_nan() {
            continue;
        }
        let (value, class) = (value as usize, class as usize);
        if value < num_values && class < num_classes {
            bags[value][class] += 1;
        }
    }

    let bags_at_floor = bags
        .iter()
        .filter(|bag| bag.iter().sum::<usize>() >= parameters.min_leaf_size)
        .count();
    if bags_at_floor < 2 {
        return None;
    }

    let gain = nominal_gain(&bags, info_before);
    let split_info = nominal_split_info(&bags);
    Some(ScoredSplit {
        split: SplitPoint::nominal(index),
        gain_ratio: gain / split_info,
    })
}

/// All thresholds retained for one numeric attribute, highest gain ratio
/// first.
fn numeric_candidates(
    data: &Dataset,
    index: usize,
    parameters: &SysForParameters,
    domain: f64,
    info_before: f64,
) -> Vec<ScoredSplit> {
    let mut available = available_split_points(data, index, parameters.min_leaf_size);
    if available.is_empty() {
        return Vec::new();
    }

    // One ascending scan scores every surviving threshold.
    let mut dist = NumericSplitDistribution::new(data, index);
    let mut ratios: Vec<f64> = Vec::with_capacity(available.len());
    for &threshold in &available {
        dist.shift(threshold);
        let gain = numeric_gain(dist.left_counts(), dist.right_counts(), info_before);
        let split_info = numeric_split_info(dist.left_counts(), dist.right_counts());
        ratios.push(gain / split_info);
    }

    let mut chosen: Vec<ScoredSplit> = Vec::new();
    let mut chosen_points: Vec<f64> = Vec::new();
    while !available.is_empty() {
        let mut best = 0usize;
        let mut best_ratio = f64::NEG_INFINITY;
        for (j, &ratio) in ratios.iter().enumerate() {
            if ratio > best_ratio {
                best = j;
                best_ratio = ratio;
            }
        }

        let point = available.remove(best);
        let ratio = ratios.remove(best);
        chosen.push(ScoredSplit {
            split: SplitPoint::numeric(index, point),
            gain_ratio: ratio,
        });
        chosen_points.push(point);

        // Drop every remaining threshold that sits too close to a chosen one.
        let keep: Vec<bool> = available
            .iter()
            .map(|&p| {
                chosen_points
                    .iter()
                    .all(|&c| (p - c).abs() / domain > parameters.separation)
            })
            .collect();
        let mut flags = keep.iter();
        available.retain(|_| *flags.next().unwrap());
        let mut flags = keep.iter();
        ratios.retain(|_| *flags.next().unwrap());
    }

    chosen
}

/// Midpoints between consecutive distinct sorted values whose two-way split
/// leaves at least `min_leaf_size` records on each side.
fn available_split_points(data: &Dataset, index: usize, min_leaf_size: usize) -> Vec<f64> {
    if data.num_instances() < 2 {
        return Vec::new();
    }

    let mut values = data.attribute_values(index);
    values.retain(|v| !v.is_nan());
    values.sort_by(f64::total_cmp);

    let mut dist = NumericSplitDistribution::new(data, index);
    let mut points = Vec::new();
    for pair in values.windows(2) {
        if pair[0] != pair[1] {
            let midpoint = (pair[0] + pair[1]) / 2.0;
            dist.shift(midpoint);
            if dist.num_left() >= min_leaf_size && dist.num_right() >= min_leaf_size {
                points.push(midpoint);
            }
        }
    }
    points
}
