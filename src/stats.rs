//! Statistics aggregator over a finished trial set

use crate::error::{Result, ScoopError};
use crate::models::{SimulationSummary, TrialResult};

/// Summarize the margin and cost distribution of `trials`.
///
/// Median and percentiles are index-based on the ascending sort, no
/// interpolation: the median is element `n / 2` and percentile `p` is element
/// `floor(n * p / 100)`.
pub fn summarize(trials: &[TrialResult], selling_price: f64) -> Result<SimulationSummary> {
    if trials.is_empty() {
        return Err(ScoopError::EmptyInput);
    }
    let n = trials.len();

    let mut margins: Vec<f64> = trials.iter().map(|t| t.margin_percent).collect();
    margins.sort_by(|a, b| a.total_cmp(b));

    let mut costs: Vec<f64> = trials.iter().map(|t| t.total_cost).collect();
    costs.sort_by(|a, b| a.total_cmp(b));

    let total_cost: f64 = costs.iter().sum();
    let total_profit: f64 = trials.iter().map(|t| t.profit).sum();

    Ok(SimulationSummary {
        trial_count: n,
        average_margin: margins.iter().sum::<f64>() / n as f64,
        median_margin: margins[n / 2],
        percentile_5: percentile(&margins, 5),
        percentile_10: percentile(&margins, 10),
        percentile_90: percentile(&margins, 90),
        percentile_95: percentile(&margins, 95),
        above_40_pct: pct_of(&margins, |m| m >= 40.0),
        above_50_pct: pct_of(&margins, |m| m >= 50.0),
        negative_pct: pct_of(&margins, |m| m < 0.0),
        average_cost: total_cost / n as f64,
        min_cost: costs[0],
        max_cost: costs[n - 1],
        average_profit: total_profit / n as f64,
        total_revenue: selling_price * n as f64,
        total_cost,
    })
}

/// Element at `floor(len * p / 100)` of an ascending, non-empty slice
pub fn percentile(sorted: &[f64], p: usize) -> f64 {
    let index = (sorted.len() * p) / 100;
    sorted[index.min(sorted.len() - 1)]
}

/// Share of `values` matching `pred`, on a 0-100 scale
fn pct_of(values: &[f64], pred: impl Fn(f64) -> bool) -> f64 {
    let hits = values.iter().filter(|&&v| pred(v)).count();
    (hits as f64 / values.len() as f64) * 100.0
}

/// Index of the cheapest and the most expensive trial, first occurrence wins
pub fn cost_extremes(trials: &[TrialResult]) -> Option<(usize, usize)> {
    if trials.is_empty() {
        return None;
    }
    let mut cheapest = 0;
    let mut priciest = 0;
    for (i, trial) in trials.iter().enumerate() {
        if trial.total_cost < trials[cheapest].total_cost {
            cheapest = i;
        }
        if trial.total_cost > trials[priciest].total_cost {
            priciest = i;
        }
    }
    Some((cheapest, priciest))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trials with the given margins at a selling price of 100, so cost = 100 - margin
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

    #[test]
    fn test_summary_of_known_margins() {
        // Deliberately unsorted
        let trials =
            trials_with_margins(&[50.0, -10.0, 80.0, 0.0, 30.0, 10.0, 70.0, 20.0, 60.0, 40.0]);
        let summary = summarize(&trials, 100.0).unwrap();

        assert_eq!(summary.trial_count, 10);
        assert_eq!(summary.average_margin, 35.0);
        assert_eq!(summary.median_margin, 40.0);
        assert_eq!(summary.percentile_5, -10.0);
        assert_eq!(summary.percentile_10, 0.0);
        assert_eq!(summary.percentile_90, 80.0);
        assert_eq!(summary.percentile_95, 80.0);
        assert_eq!(summary.above_40_pct, 50.0);
        assert_eq!(summary.above_50_pct, 40.0);
        assert_eq!(summary.negative_pct, 10.0);
        assert_eq!(summary.min_cost, 20.0);
        assert_eq!(summary.max_cost, 110.0);
        assert_eq!(summary.average_cost, 65.0);
        assert_eq!(summary.average_profit, 35.0);
        assert_eq!(summary.total_revenue, 1000.0);
        assert_eq!(summary.total_cost, 650.0);
    }

    #[test]
    fn test_median_is_lower_middle_for_even_count() {
        let trials = trials_with_margins(&[1.0, 2.0, 3.0, 4.0]);
        let summary = summarize(&trials, 100.0).unwrap();
        // Index 2 of the sorted margins, not the average of 2 and 3
        assert_eq!(summary.median_margin, 3.0);
    }

    #[test]
    fn test_single_trial() {
        let trials = trials_with_margins(&[-5.0]);
        let summary = summarize(&trials, 100.0).unwrap();
        assert_eq!(summary.median_margin, -5.0);
        assert_eq!(summary.percentile_5, -5.0);
        assert_eq!(summary.percentile_95, -5.0);
        assert_eq!(summary.negative_pct, 100.0);
        assert_eq!(summary.min_cost, summary.max_cost);
    }

    #[test]
    fn test_percentile_indexing() {
        let sorted: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert_eq!(percentile(&sorted, 5), 1.0);
        assert_eq!(percentile(&sorted, 10), 2.0);
        assert_eq!(percentile(&sorted, 90), 18.0);
        assert_eq!(percentile(&sorted, 95), 19.0);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(summarize(&[], 100.0), Err(ScoopError::EmptyInput)));
    }

    #[test]
    fn test_summarize_is_repeatable() {
        let trials = trials_with_margins(&[12.5, -3.0, 48.0, 51.0, 40.0]);
        let first = summarize(&trials, 100.0).unwrap();
        let second = summarize(&trials, 100.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_does_not_change_summary() {
        let forward = trials_with_margins(&[5.0, 15.0, 25.0, 35.0, 45.0, 55.0]);
        let mut reversed = forward.clone();
        reversed.reverse();
        let a = summarize(&forward, 100.0).unwrap();
        let b = summarize(&reversed, 100.0).unwrap();
        assert_eq!(a.median_margin, b.median_margin);
        assert_eq!(a.percentile_90, b.percentile_90);
        assert_eq!(a.above_50_pct, b.above_50_pct);
        assert_eq!(a.min_cost, b.min_cost);
    }

    #[test]
    fn test_cost_extremes() {
        let trials = trials_with_margins(&[10.0, 60.0, -20.0, 60.0]);
        assert_eq!(cost_extremes(&trials), Some((1, 2)));
        assert_eq!(cost_extremes(&[]), None);
    }
}
