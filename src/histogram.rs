//! Margin distribution bucketing for histogram renderers

use crate::error::{Result, ScoopError};
use crate::models::{BucketClass, HistogramBucket, TrialResult};

pub const DEFAULT_BUCKET_WIDTH: f64 = 5.0;
pub const DEFAULT_RANGE_MIN: f64 = -80.0;
pub const DEFAULT_RANGE_MAX: f64 = 100.0;

/// Margins at or above this lower bound are highlighted as high-margin buckets
const HIGH_MARGIN_BOUND: f64 = 50.0;

/// Bucket trial margins into a dense, ascending histogram.
///
/// Every bucket lower bound from `range_min` to `range_max` stepped by
/// `bucket_width` is present, including empty ones. Buckets are aligned to
/// `range_min`; with the default range this is `floor(margin / width) * width`.
/// Margins outside `[range_min, range_max - width]` pile up in the edge
/// buckets instead of being dropped.
pub fn bucket_margins(
    trials: &[TrialResult],
    bucket_width: f64,
    range_min: f64,
    range_max: f64,
) -> Result<Vec<HistogramBucket>> {
    if !(bucket_width.is_finite() && bucket_width > 0.0) {
        return Err(ScoopError::invalid_config(format!(
            "histogram bucket width must be positive, got {}",
            bucket_width
        )));
    }
    if !(range_min.is_finite() && range_max.is_finite()) || range_max - range_min < bucket_width {
        return Err(ScoopError::invalid_config(format!(
            "histogram range [{}, {}] must span at least one bucket",
            range_min, range_max
        )));
    }

    let steps = ((range_max - range_min) / bucket_width + 1e-9).floor() as usize;
    let mut buckets: Vec<HistogramBucket> = (0..=steps)
        .map(|i| {
            let lower_bound = range_min + i as f64 * bucket_width;
            HistogramBucket {
                lower_bound,
                count: 0,
                class: classify(lower_bound),
            }
        })
        .collect();

    // The bucket at range_max never receives values
    let last_filled = (steps - 1) as f64;
    for trial in trials {
        let offset = ((trial.margin_percent - range_min) / bucket_width).floor();
        let index = offset.max(0.0).min(last_filled) as usize;
        buckets[index].count += 1;
    }

    Ok(buckets)
}

/// Histogram over the default -80%..100% range in 5-point buckets
pub fn default_histogram(trials: &[TrialResult]) -> Result<Vec<HistogramBucket>> {
    bucket_margins(trials, DEFAULT_BUCKET_WIDTH, DEFAULT_RANGE_MIN, DEFAULT_RANGE_MAX)
}

fn classify(lower_bound: f64) -> BucketClass {
    if lower_bound < 0.0 {
        BucketClass::Loss
    } else if lower_bound >= HIGH_MARGIN_BOUND {
        BucketClass::High
    } else {
        BucketClass::Profit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trials_with_margins(margins: &[f64]) -> Vec<TrialResult> {
        margins
            .iter()
            .map(|&m| TrialResult {
                items_drawn: Vec::new(),
                bundle_size: 0,
                total_cost: 100.0 - m,
                profit: m,
                margin_percent: m,
            })
            .collect()
    }

    fn count_at(buckets: &[HistogramBucket], lower_bound: f64) -> usize {
        buckets
            .iter()
            .find(|b| b.lower_bound == lower_bound)
            .map(|b| b.count)
            .unwrap_or(0)
    }

    #[test]
    fn test_default_range_is_dense_and_ascending() {
        let buckets = default_histogram(&[]).unwrap();
        assert_eq!(buckets.len(), 37);
        assert_eq!(buckets[0].lower_bound, -80.0);
        assert_eq!(buckets[36].lower_bound, 100.0);
        assert!(buckets.windows(2).all(|w| w[1].lower_bound - w[0].lower_bound == 5.0));
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_known_margins_keep_every_value() {
        let margins = [-10.0, 0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
        let buckets = default_histogram(&trials_with_margins(&margins)).unwrap();

        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), margins.len());
        for m in margins {
            assert_eq!(count_at(&buckets, m), 1, "bucket {}", m);
        }
    }

    #[test]
    fn test_negative_margins_floor_downwards() {
        let buckets = default_histogram(&trials_with_margins(&[-0.1, -4.9, -5.0, 4.9])).unwrap();
        assert_eq!(count_at(&buckets, -5.0), 3);
        assert_eq!(count_at(&buckets, 0.0), 1);
    }

    #[test]
    fn test_outliers_clamp_into_edge_buckets() {
        let buckets =
            default_histogram(&trials_with_margins(&[-250.0, -80.0, 100.0, 97.0, 400.0])).unwrap();
        assert_eq!(count_at(&buckets, -80.0), 2);
        assert_eq!(count_at(&buckets, 95.0), 3);
        assert_eq!(count_at(&buckets, 100.0), 0);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 5);
    }

    #[test]
    fn test_bucket_classes() {
        let buckets = default_histogram(&[]).unwrap();
        assert_eq!(buckets[0].class, BucketClass::Loss);
        assert_eq!(buckets[15].class, BucketClass::Loss); // -5
        assert_eq!(buckets[16].class, BucketClass::Profit); // 0
        assert_eq!(buckets[26].class, BucketClass::High); // 50
    }

    #[test]
    fn test_custom_width_and_range() {
        let trials = trials_with_margins(&[5.0, 15.0, 35.0]);
        let buckets = bucket_margins(&trials, 10.0, 0.0, 30.0).unwrap();
        assert_eq!(buckets.len(), 4);
        assert_eq!(count_at(&buckets, 0.0), 1);
        assert_eq!(count_at(&buckets, 10.0), 1);
        assert_eq!(count_at(&buckets, 20.0), 1);
        assert_eq!(count_at(&buckets, 30.0), 0);
    }

    #[test]
    fn test_range_not_aligned_to_width() {
        let trials = trials_with_margins(&[-75.0, -74.0, 0.0, 21.0, -90.0]);
        let buckets = bucket_margins(&trials, 5.0, -78.0, 22.0).unwrap();

        assert_eq!(buckets.len(), 21);
        assert_eq!(buckets[0].lower_bound, -78.0);
        // -75 and -74 fall in [-78, -73), -90 is clamped there too
        assert_eq!(count_at(&buckets, -78.0), 3);
        assert_eq!(count_at(&buckets, -73.0), 0);
        // 0 falls in [-3, 2)
        assert_eq!(count_at(&buckets, -3.0), 1);
        assert_eq!(count_at(&buckets, 2.0), 0);
        // 21 falls in [17, 22); the bucket at 22 stays empty
        assert_eq!(count_at(&buckets, 17.0), 1);
        assert_eq!(count_at(&buckets, 22.0), 0);
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(bucket_margins(&[], 0.0, -80.0, 100.0).is_err());
        assert!(bucket_margins(&[], 5.0, 10.0, 12.0).is_err());
        assert!(bucket_margins(&[], f64::NAN, -80.0, 100.0).is_err());
    }
}
