//! Quick analytic price checks that need no simulation run

use serde::Serialize;

use crate::models::{selling_price, Inventory, SimulationConfig, SimulationSummary};

/// Marked prices listed in the reference table
pub const REFERENCE_PRICES: &[f64] = &[
    799.0, 999.0, 1199.0, 1299.0, 1399.0, 1499.0, 1599.0, 1699.0, 1799.0, 1999.0, 2499.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceVerdict {
    Safe,
    SweetSpot,
    Tight,
    LossProne,
}

impl PriceVerdict {
    pub fn from_margin(margin: f64) -> Self {
        if margin >= 55.0 {
            PriceVerdict::Safe
        } else if margin >= 48.0 {
            PriceVerdict::SweetSpot
        } else if margin >= 35.0 {
            PriceVerdict::Tight
        } else {
            PriceVerdict::LossProne
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceVerdict::Safe => "Safe",
            PriceVerdict::SweetSpot => "Sweet spot",
            PriceVerdict::Tight => "Tight",
            PriceVerdict::LossProne => "Loss-prone",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub marked_price: f64,
    pub selling_price: f64,
    pub estimated_margin: f64,
    pub estimated_profit: f64,
    pub verdict: PriceVerdict,
}

/// Expected bundle cost: average packaged item cost times the average bundle size
pub fn estimated_bundle_cost(inventory: &Inventory, config: &SimulationConfig) -> f64 {
    inventory.average_packaged_cost() * config.average_bundle_size()
}

/// Estimated margin at the configured price, None when the selling price is not positive
pub fn estimated_margin(inventory: &Inventory, config: &SimulationConfig) -> Option<f64> {
    let sp = config.selling_price();
    if sp > 0.0 {
        Some((sp - estimated_bundle_cost(inventory, config)) / sp * 100.0)
    } else {
        None
    }
}

/// Price each reference marked price at the configured discount.
/// A non-positive selling price is reported as a -100% margin.
pub fn reference_price_table(inventory: &Inventory, config: &SimulationConfig) -> Vec<PricePoint> {
    let estimated_cost = estimated_bundle_cost(inventory, config);

    REFERENCE_PRICES
        .iter()
        .map(|&marked_price| {
            let sp = selling_price(marked_price, config.discount_percent);
            let estimated_margin = if sp > 0.0 {
                (sp - estimated_cost) / sp * 100.0
            } else {
                -100.0
            };
            PricePoint {
                marked_price,
                selling_price: sp,
                estimated_margin,
                estimated_profit: sp - estimated_cost,
                verdict: PriceVerdict::from_margin(estimated_margin),
            }
        })
        .collect()
}

/// Average-margin band treated as a well-chosen price
const SWEET_SPOT_LOW: f64 = 48.0;
const SWEET_SPOT_HIGH: f64 = 56.0;

/// Scoops per month assumed for the monthly profit hint
const MONTHLY_SCOOPS: f64 = 100.0;

/// Pricing advice drawn from a finished run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Average margin within the sweet spot; monthly figures assume 100 scoops
    ExcellentPricePoint {
        average_margin: f64,
        above_40_pct: f64,
        negative_pct: f64,
        monthly_profit: f64,
        monthly_cost: f64,
    },
    /// Margin above the sweet spot, the price can come down
    RoomToLowerPrice {
        average_margin: f64,
        suggested_marked_price: f64,
    },
    /// Margin below the sweet spot
    RaiseMarkedPrice {
        average_margin: f64,
        negative_pct: f64,
    },
}

impl Recommendation {
    pub fn title(&self) -> &'static str {
        match self {
            Recommendation::ExcellentPricePoint { .. } => "Excellent price point",
            Recommendation::RoomToLowerPrice { .. } => "High margin, room to be competitive",
            Recommendation::RaiseMarkedPrice { .. } => "Consider raising MRP",
        }
    }
}

pub fn recommend(summary: &SimulationSummary, config: &SimulationConfig) -> Recommendation {
    let avg = summary.average_margin;
    if (SWEET_SPOT_LOW..=SWEET_SPOT_HIGH).contains(&avg) {
        Recommendation::ExcellentPricePoint {
            average_margin: avg,
            above_40_pct: summary.above_40_pct,
            negative_pct: summary.negative_pct,
            monthly_profit: summary.average_profit * MONTHLY_SCOOPS,
            monthly_cost: summary.average_cost * MONTHLY_SCOOPS,
        }
    } else if avg > SWEET_SPOT_HIGH {
        // 10% lower, to the nearest hundred
        Recommendation::RoomToLowerPrice {
            average_margin: avg,
            suggested_marked_price: (config.marked_price * 0.9 / 100.0).round() * 100.0,
        }
    } else {
        Recommendation::RaiseMarkedPrice {
            average_margin: avg,
            negative_pct: summary.negative_pct,
        }
    }
}
