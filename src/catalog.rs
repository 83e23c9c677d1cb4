//! Built-in item catalog, inventory files and catalog summaries

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScoopError};
use crate::models::{Inventory, Item, PACKAGING_SURCHARGE};

/// (id, name, base cost) of the stock catalog
const DEFAULT_ITEMS: &[(u32, &str, f64)] = &[
    (1, "Bracelet", 30.0),
    (2, "Ring", 20.0),
    (3, "Hair Clip", 20.0),
    (4, "Hair Crunchy", 20.0),
    (5, "Locket & Earring", 55.0),
    (6, "Stone Locket & Earring", 110.0),
    (7, "Earring", 100.0),
    (8, "Beauty Blender", 15.0),
    (9, "Lipstick", 70.0),
    (10, "Lip oil", 65.0),
    (11, "Lip gel", 100.0),
    (12, "Sheet mask", 40.0),
    (13, "Candy mask", 6.0),
    (14, "Mud mask", 15.0),
    (15, "Diary", 60.0),
    (16, "Mirror", 100.0),
    (17, "Eraser", 50.0),
    (18, "Cup", 110.0),
    (19, "Fake nails", 100.0),
    (20, "Nail sticker", 50.0),
    (21, "Washi Tape", 10.0),
    (22, "Bag", 105.0),
    (23, "Plushy", 110.0),
    (24, "Highlighter", 30.0),
    (25, "Charm", 10.0),
    (26, "Tip × 3", 15.0),
];

/// Packaged-cost ceilings for the budget and mid tiers
const BUDGET_CEILING: f64 = 30.0;
const MID_CEILING: f64 = 80.0;

/// On-disk form of an item; packaged cost is always derived.
#[derive(Debug, Serialize, Deserialize)]
struct ItemRecord {
    id: u32,
    name: String,
    base_cost: f64,
}

pub fn default_inventory() -> Inventory {
    let items = DEFAULT_ITEMS
        .iter()
        .map(|&(id, name, base_cost)| Item {
            id,
            name: name.to_string(),
            base_cost,
            packaged_cost: base_cost + PACKAGING_SURCHARGE,
        })
        .collect();
    let inventory = Inventory::new(items);
    debug_assert!(inventory.is_ok(), "default catalog has duplicate ids");
    inventory.unwrap_or_default()
}

/// Load an inventory from a JSON array of `{id, name, base_cost}` records
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    let raw = fs::read_to_string(path).map_err(|source| ScoopError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<ItemRecord> = serde_json::from_str(&raw).map_err(|source| ScoopError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let items = records
        .into_iter()
        .map(|r| Item::new(r.id, r.name, r.base_cost))
        .collect::<Result<Vec<_>>>()?;
    debug!(path = %path.display(), items = items.len(), "Loaded inventory");
    Inventory::new(items)
}

pub fn save_inventory(inventory: &Inventory, path: &Path) -> Result<()> {
    let records: Vec<ItemRecord> = inventory
        .items()
        .iter()
        .map(|i| ItemRecord {
            id: i.id,
            name: i.name.clone(),
            base_cost: i.base_cost,
        })
        .collect();
    let json = serde_json::to_string_pretty(&records).map_err(ScoopError::Serialize)?;
    fs::write(path, json).map_err(|source| ScoopError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Item counts per packaged-cost tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostTiers {
    pub budget: usize,
    pub mid: usize,
    pub premium: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub item_count: usize,
    pub average_packaged_cost: f64,
    pub packaging_surcharge: f64,
    pub tiers: CostTiers,
}

pub fn summarize_catalog(inventory: &Inventory) -> CatalogSummary {
    let mut tiers = CostTiers {
        budget: 0,
        mid: 0,
        premium: 0,
    };
    for item in inventory.items() {
        if item.packaged_cost <= BUDGET_CEILING {
            tiers.budget += 1;
        } else if item.packaged_cost <= MID_CEILING {
            tiers.mid += 1;
        } else {
            tiers.premium += 1;
        }
    }

    CatalogSummary {
        item_count: inventory.len(),
        average_packaged_cost: inventory.average_packaged_cost(),
        packaging_surcharge: PACKAGING_SURCHARGE,
        tiers,
    }
}
