//! Console rendering of setup, price tables and simulation reports

use crate::catalog::CatalogSummary;
use crate::models::{BucketClass, HistogramBucket, SimulationConfig, TrialResult};
use crate::monte_carlo::SimulationReport;
use crate::pricing::{PricePoint, Recommendation};

const HISTOGRAM_WIDTH: usize = 40;

/// Display the catalog overview and the configured run
pub fn display_setup(catalog: &CatalogSummary, config: &SimulationConfig, estimate: Option<f64>) {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                          SCOOP PROFITABILITY SIMULATION                      ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    println!(
        "Items: {} | Avg packaged cost: {:.0} | Packaging: {:.0}/item",
        catalog.item_count, catalog.average_packaged_cost, catalog.packaging_surcharge
    );
    println!(
        "  Budget (<=30): {} | Mid (31-80): {} | Premium (80+): {}",
        catalog.tiers.budget, catalog.tiers.mid, catalog.tiers.premium
    );
    println!(
        "\nMarked price: {:.2} | Discount: {}% | Selling price: {:.2}",
        config.marked_price,
        config.discount_percent,
        config.selling_price()
    );
    println!(
        "Items per scoop: {}-{} | Simulations: {}",
        config.min_items_per_bundle, config.max_items_per_bundle, config.trial_count
    );
    match estimate {
        Some(margin) => println!("Estimated margin (avg scoop): {:.1}%\n", margin),
        None => println!("Estimated margin (avg scoop): -\n"),
    }
}

/// Display the reference price table
pub fn display_price_table(table: &[PricePoint]) {
    println!("Quick price reference:");
    println!("  {:>8} {:>10} {:>9} {:>10}  Verdict", "MRP", "After disc", "Margin", "Profit");
    for point in table {
        println!(
            "  {:>8.0} {:>10.0} {:>8.1}% {:>10.0}  {}",
            point.marked_price,
            point.selling_price,
            point.estimated_margin,
            point.estimated_profit,
            point.verdict.label()
        );
    }
    println!();
}

/// Display the summary statistics of a finished run
pub fn display_report(report: &SimulationReport) {
    let s = &report.summary;
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                              SIMULATION RESULTS                              ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    println!("{} scoops simulated (seed {})\n", s.trial_count, report.seed);

    println!("Key Metrics:");
    println!("  Average margin:   {:.1}%", s.average_margin);
    println!("  Median margin:    {:.1}%", s.median_margin);
    println!("  Margin >= 40%:    {:.1}% of scoops", s.above_40_pct);
    println!("  Margin >= 50%:    {:.1}% of scoops", s.above_50_pct);
    println!("  Loss-making:      {:.1}% of scoops", s.negative_pct);

    println!("\nMargin Percentiles:");
    println!("  5th:   {:.1}%", s.percentile_5);
    println!("  10th:  {:.1}%", s.percentile_10);
    println!("  90th:  {:.1}%", s.percentile_90);
    println!("  95th:  {:.1}%", s.percentile_95);

    println!("\nCost Analysis:");
    println!("  Average scoop cost:  {:.0}", s.average_cost);
    println!("  Min cost observed:   {:.0}", s.min_cost);
    println!("  Max cost observed:   {:.0}", s.max_cost);
    println!("  Average profit:      {:.0}", s.average_profit);
    println!("  Total revenue:       {:.0}", s.total_revenue);
    println!("  Total cost:          {:.0}", s.total_cost);

    display_trial("Lucky scoop (cheapest)", &report.best_trial);
    display_trial("Expensive scoop", &report.worst_trial);
    display_histogram(&report.histogram);
    display_recommendation(&report.recommendation, &report.config);
}

/// Display the pricing advice for the simulated configuration
pub fn display_recommendation(recommendation: &Recommendation, config: &SimulationConfig) {
    println!("\nRecommendation: {}", recommendation.title());
    match recommendation {
        Recommendation::ExcellentPricePoint {
            average_margin,
            above_40_pct,
            negative_pct,
            monthly_profit,
            monthly_cost,
        } => {
            println!(
                "  At {:.0} MRP with {}% off ({:.0} selling price), the average margin is {:.1}%.",
                config.marked_price,
                config.discount_percent,
                config.selling_price(),
                average_margin
            );
            println!(
                "  {:.0}% of scoops reach a 40% margin, loss probability is {:.1}%.",
                above_40_pct, negative_pct
            );
            println!(
                "  Selling 100 scoops a month: ~{:.0} profit on ~{:.0} cost.",
                monthly_profit, monthly_cost
            );
        }
        Recommendation::RoomToLowerPrice {
            average_margin,
            suggested_marked_price,
        } => {
            println!(
                "  Average margin of {:.1}% is above the 50% target. \
                 Even at {:.0} MRP margins should stay near 50%.",
                average_margin, suggested_marked_price
            );
        }
        Recommendation::RaiseMarkedPrice {
            average_margin,
            negative_pct,
        } => {
            println!(
                "  Average margin of {:.1}% is below the 50% target. \
                 At the current price {:.1}% of scoops lose money.",
                average_margin, negative_pct
            );
        }
    }
}

fn display_trial(label: &str, trial: &TrialResult) {
    println!(
        "\n{}: {} items, cost {:.0}, margin {:.1}%",
        label, trial.bundle_size, trial.total_cost, trial.margin_percent
    );
    let names: Vec<&str> = trial.items_drawn.iter().map(|i| i.name.as_str()).collect();
    println!("  {}", names.join(", "));
}

/// Display the margin histogram as horizontal bars
pub fn display_histogram(buckets: &[HistogramBucket]) {
    println!("\nMargin Distribution:");
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bucket in buckets {
        let len = bucket.count * HISTOGRAM_WIDTH / max;
        let glyph = match bucket.class {
            BucketClass::Loss => "-",
            BucketClass::Profit => "=",
            BucketClass::High => "#",
        };
        println!(
            "  {:>5.0}% | {:<width$} {}",
            bucket.lower_bound,
            glyph.repeat(len),
            bucket.count,
            width = HISTOGRAM_WIDTH
        );
    }
    println!("  (- loss, = profit <50%, # profit >=50%)");
}
