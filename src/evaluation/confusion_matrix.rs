use serde::Serialize;

/// Square confusion matrix indexed `[actual][predicted]`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfusionMatrix {
    class_names: Vec<String>,
    counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    pub fn new(class_names: Vec<String>) -> ConfusionMatrix {
        let k = class_names.len();
        ConfusionMatrix {
            class_names,
            counts: vec![vec![0usize; k]; k],
        }
    }

    pub fn num_classes(&self) -> usize {
        self.class_names.len()
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Records one observation; out-of-range indices are ignored.
    pub fn add(&mut self, actual: usize, predicted: usize) {
        if actual < self.counts.len() && predicted < self.counts.len() {
            self.counts[actual][predicted] += 1;
        }
    }

    pub fn count(&self, actual: usize, predicted: usize) -> usize {
        self.counts
            .get(actual)
            .and_then(|row| row.get(predicted))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn correct(&self) -> usize {
        (0..self.counts.len()).map(|i| self.counts[i][i]).sum()
    }

    /// Fraction of correctly classified observations; NaN when empty.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return f64::NAN;
        }
        self.correct() as f64 / total as f64
    }

    /// Cohen's kappa: agreement corrected for chance. NaN when undefined.
    pub fn kappa(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return f64::NAN;
        }
        let n = total as f64;
        let p_o = self.correct() as f64 / n;

        let mut p_e = 0.0;
        for c in 0..self.counts.len() {
            let row: usize = self.counts[c].iter().sum();
            let col: usize = self.counts.iter().map(|r| r[c]).sum();
            p_e += (row as f64 / n) * (col as f64 / n);
        }

        let denom = 1.0 - p_e;
        if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Plain-text table, one row per actual class.
    pub fn describe(&self) -> String {
        let mut out = String::from("classified as -->");
        for name in &self.class_names {
            out.push(' ');
            out.push_str(name);
        }
        out.push('\n');
        for (actual, row) in self.counts.iter().enumerate() {
            for count in row {
                out.push_str(&count.to_string());
                out.push(' ');
            }
            out.push_str("| ");
            out.push_str(&self.class_names[actual]);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["a".to_string(), "b".to_string()]
    }

    #[test]
    fn empty_matrix_has_nan_metrics() {
        let m = ConfusionMatrix::new(names());
        assert!(m.accuracy().is_nan());
        assert!(m.kappa().is_nan());
        assert_eq!(m.total(), 0);
    }

    #[test]
    fn accuracy_counts_the_diagonal() {
        let mut m = ConfusionMatrix::new(names());
        m.add(0, 0);
        m.add(0, 0);
        m.add(1, 1);
        m.add(1, 0);
        assert_eq!(m.total(), 4);
        assert_eq!(m.correct(), 3);
        assert!((m.accuracy() - 0.75).abs() < 1e-12);
        assert_eq!(m.count(1, 0), 1);
    }

    #[test]
    fn kappa_is_one_for_perfect_balanced_agreement() {
        let mut m = ConfusionMatrix::new(names());
        m.add(0, 0);
        m.add(1, 1);
        assert!((m.kappa() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kappa_is_zero_at_chance_level() {
        let mut m = ConfusionMatrix::new(names());
        // Predictions ignore the actual class entirely.
        m.add(0, 0);
        m.add(0, 1);
        m.add(1, 0);
        m.add(1, 1);
        assert!(m.kappa().abs() < 1e-12);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut m = ConfusionMatrix::new(names());
        m.add(5, 0);
        m.add(0, 5);
        assert_eq!(m.total(), 0);
    }

    #[test]
    fn json_export_includes_counts() {
        let mut m = ConfusionMatrix::new(names());
        m.add(0, 1);
        let json = m.to_json().unwrap();
        assert!(json.contains("counts"));
        assert!(json.contains("class_names"));
    }

    #[test]
    fn describe_lists_one_row_per_class() {
        let mut m = ConfusionMatrix::new(names());
        m.add(0, 0);
        m.add(1, 0);
        let text = m.describe();
        assert!(text.contains("| a"));
        assert!(text.contains("| b"));
    }
}
