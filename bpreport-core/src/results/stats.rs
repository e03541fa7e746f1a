use crate::results::types::SchemeAccuracyPool;
use indexmap::IndexMap;

/// Geometric mean of accuracy percentages in `[0, 100]`.
///
/// Non-positive values are excluded entirely; they never contribute a zero
/// factor. The mean is taken in log space over unit fractions and scaled back
/// to a percentage. Returns 0 when no positive values remain.
pub fn geometric_mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| **v > 0.0)
        .fold((0.0_f64, 0usize), |(sum, count), v| {
            (sum + (v / 100.0).ln(), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    (sum / count as f64).exp() * 100.0
}

/// scheme -> geometric-mean accuracy, in pool order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemeSummary {
    means: IndexMap<String, f64>,
}

impl SchemeSummary {
    pub fn get(&self, scheme: &str) -> Option<f64> {
        self.means.get(scheme).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.means
            .iter()
            .map(|(scheme, mean)| (scheme.as_str(), *mean))
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

pub fn summarize(pool: &SchemeAccuracyPool) -> SchemeSummary {
    SchemeSummary {
        means: pool
            .iter()
            .map(|(scheme, values)| (scheme.to_string(), geometric_mean(values)))
            .collect(),
    }
}
