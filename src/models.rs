//! Data model shared by the trial engine, the aggregator and the CLI.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoopError};

/// Fixed per-item packaging cost added on top of every item's base cost
pub const PACKAGING_SURCHARGE: f64 = 6.0;

/// Inventory entry that can end up in a bundle
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub base_cost: f64,
    pub packaged_cost: f64,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, base_cost: f64) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ScoopError::invalid_item(format!("item {} has an empty name", id)));
        }
        check_cost(id, base_cost)?;

        Ok(Item {
            id,
            name: trimmed.to_string(),
            base_cost,
            packaged_cost: base_cost + PACKAGING_SURCHARGE,
        })
    }

    pub fn rename(&mut self, name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ScoopError::invalid_item(format!("item {} has an empty name", self.id)));
        }
        self.name = trimmed.to_string();
        Ok(())
    }

    pub fn set_base_cost(&mut self, base_cost: f64) -> Result<()> {
        check_cost(self.id, base_cost)?;
        self.base_cost = base_cost;
        self.packaged_cost = base_cost + PACKAGING_SURCHARGE;
        Ok(())
    }

    /// Editing the packaged cost back-computes the base cost, floored at zero.
    /// A packaged cost below the surcharge is raised to the surcharge so the
    /// `packaged = base + surcharge` invariant keeps holding.
    pub fn set_packaged_cost(&mut self, packaged_cost: f64) -> Result<()> {
        if !packaged_cost.is_finite() {
            return Err(ScoopError::invalid_item(format!(
                "item {} has a non-finite packaged cost",
                self.id
            )));
        }
        self.base_cost = (packaged_cost - PACKAGING_SURCHARGE).max(0.0);
        self.packaged_cost = self.base_cost + PACKAGING_SURCHARGE;
        Ok(())
    }
}

fn check_cost(id: u32, base_cost: f64) -> Result<()> {
    if !base_cost.is_finite() || base_cost < 0.0 {
        return Err(ScoopError::invalid_item(format!(
            "item {} has invalid base cost {}",
            id, base_cost
        )));
    }
    Ok(())
}

/// Snapshot of all items available for bundling, ids unique
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        if let Some(w) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(ScoopError::invalid_item(format!("duplicate item id {}", w[0])));
        }
        Ok(Inventory { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Next id is one past the largest id ever present in this snapshot
    pub fn add(&mut self, name: &str, base_cost: f64) -> Result<&Item> {
        let id = self.items.iter().map(|i| i.id).max().map_or(1, |m| m + 1);
        let item = Item::new(id, name, base_cost)?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn remove(&mut self, id: u32) -> Option<Item> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn average_packaged_cost(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.items.iter().map(|i| i.packaged_cost).sum::<f64>() / self.items.len() as f64
    }
}

/// Immutable input for a single simulation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub marked_price: f64,
    pub discount_percent: f64,
    pub min_items_per_bundle: usize,
    pub max_items_per_bundle: usize,
    pub trial_count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            marked_price: 1499.0,
            discount_percent: 25.0,
            min_items_per_bundle: 8,
            max_items_per_bundle: 10,
            trial_count: 10_000,
        }
    }
}

impl SimulationConfig {
    /// Marked price after discount; a discount above 100% yields a negative price
    pub fn selling_price(&self) -> f64 {
        selling_price(self.marked_price, self.discount_percent)
    }

    pub fn average_bundle_size(&self) -> f64 {
        (self.min_items_per_bundle + self.max_items_per_bundle) as f64 / 2.0
    }

    /// Rejects configurations the trial engine cannot run against `inventory_size` items
    pub fn validate(&self, inventory_size: usize) -> Result<()> {
        if !self.marked_price.is_finite() || self.marked_price < 0.0 {
            return Err(ScoopError::invalid_config(format!(
                "marked price must be a non-negative number, got {}",
                self.marked_price
            )));
        }
        if !self.discount_percent.is_finite() {
            return Err(ScoopError::invalid_config("discount percent must be a finite number"));
        }
        validate_bounds(
            inventory_size,
            self.trial_count,
            self.min_items_per_bundle,
            self.max_items_per_bundle,
        )
    }
}

pub fn selling_price(marked_price: f64, discount_percent: f64) -> f64 {
    marked_price * (1.0 - discount_percent / 100.0)
}

/// Bundle-size and trial-count checks shared by config validation and the trial engine
pub fn validate_bounds(
    inventory_size: usize,
    trial_count: usize,
    min_items: usize,
    max_items: usize,
) -> Result<()> {
    if trial_count < 1 {
        return Err(ScoopError::invalid_config("trial count must be at least 1"));
    }
    if min_items < 1 {
        return Err(ScoopError::invalid_config("minimum items per bundle must be at least 1"));
    }
    if min_items > max_items {
        return Err(ScoopError::invalid_config(format!(
            "minimum items per bundle ({}) exceeds maximum ({})",
            min_items, max_items
        )));
    }
    if inventory_size < max_items {
        return Err(ScoopError::invalid_config(format!(
            "need at least {} items in inventory to simulate, found {}",
            max_items, inventory_size
        )));
    }
    Ok(())
}

/// Margin as a percentage of selling price; zero when the price is not positive
pub fn margin_percent(profit: f64, selling_price: f64) -> f64 {
    if selling_price > 0.0 {
        (profit / selling_price) * 100.0
    } else {
        0.0
    }
}

/// Outcome of one simulated bundle draw
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialResult {
    pub items_drawn: Vec<Item>,
    pub bundle_size: usize,
    pub total_cost: f64,
    pub profit: f64,
    pub margin_percent: f64,
}

impl TrialResult {
    pub fn from_items(items_drawn: Vec<Item>, selling_price: f64) -> Self {
        let total_cost: f64 = items_drawn.iter().map(|i| i.packaged_cost).sum();
        let profit = selling_price - total_cost;
        TrialResult {
            bundle_size: items_drawn.len(),
            items_drawn,
            total_cost,
            profit,
            margin_percent: margin_percent(profit, selling_price),
        }
    }
}

/// Aggregate statistics over a full trial set
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub trial_count: usize,
    pub average_margin: f64,
    pub median_margin: f64,
    pub percentile_5: f64,
    pub percentile_10: f64,
    pub percentile_90: f64,
    pub percentile_95: f64,
    pub above_40_pct: f64,
    pub above_50_pct: f64,
    pub negative_pct: f64,
    pub average_cost: f64,
    pub min_cost: f64,
    pub max_cost: f64,
    pub average_profit: f64,
    pub total_revenue: f64,
    pub total_cost: f64,
}

/// Rendering hint for a histogram bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketClass {
    Loss,
    Profit,
    High,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistogramBucket {
    pub lower_bound: f64,
    pub count: usize,
    pub class: BucketClass,
}
