use serde::Serialize;

use super::model::Value;

/// Values of a dataset that pass [`valid_number`](super::numeric::valid_number),
/// in numeric form and original order.
pub fn numeric_values(dataset: &[Value]) -> Vec<f64> {
    dataset.iter().filter_map(Value::to_number).collect()
}

/// Arithmetic mean of the numeric entries, `None` when there are none.
pub fn calculate_mean(dataset: &[Value]) -> Option<f64> {
    let nums = numeric_values(dataset);
    if nums.is_empty() {
        return None;
    }
    Some(nums.iter().sum::<f64>() / nums.len() as f64)
}

/// Sum of the numeric entries, `None` when there are none.
///
/// An all-text dataset yields `None`, not `Some(0.0)`.
pub fn find_total(dataset: &[Value]) -> Option<f64> {
    let nums = numeric_values(dataset);
    if nums.is_empty() {
        return None;
    }
    Some(nums.iter().sum())
}

/// Median of the numeric entries, `None` when there are none.
pub fn calculate_median(dataset: &[Value]) -> Option<f64> {
    let mut nums = numeric_values(dataset);
    if nums.is_empty() {
        return None;
    }
    nums.sort_by(f64::total_cmp);
    Some(median_of_sorted(&nums))
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

// ---------------------------------------------------------------------------
// Summary – all three aggregates from one filtering pass
// ---------------------------------------------------------------------------

/// Count, mean, sum and median of a dataset's numeric entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Summary {
    /// Entries that survived numeric filtering.
    pub count: usize,
    /// Entries that were dropped.
    pub skipped: usize,
    pub mean: Option<f64>,
    pub sum: Option<f64>,
    pub median: Option<f64>,
}

impl Summary {
    pub fn of(dataset: &[Value]) -> Self {
        let mut nums = numeric_values(dataset);
        let skipped = dataset.len() - nums.len();
        if nums.is_empty() {
            return Summary {
                skipped,
                ..Summary::default()
            };
        }

        let sum: f64 = nums.iter().sum();
        nums.sort_by(f64::total_cmp);
        Summary {
            count: nums.len(),
            skipped,
            mean: Some(sum / nums.len() as f64),
            sum: Some(sum),
            median: Some(median_of_sorted(&nums)),
        }
    }

    /// Percentage of entries that were numeric.
    pub fn numeric_rate(&self) -> f64 {
        let total = self.count + self.skipped;
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64 * 100.0
        }
    }
}
