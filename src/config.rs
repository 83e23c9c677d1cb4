//! Run configuration file, layered under command-line overrides

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoopError};
use crate::models::SimulationConfig;
use crate::monte_carlo::{RunOptions, DEFAULT_CHUNK_SIZE};

/// Contents of a `--config` JSON file; every field is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoopConfig {
    #[serde(flatten)]
    pub simulation: SimulationConfig,
    pub seed: Option<u64>,
    pub chunk_size: usize,
    pub parallel: bool,
    /// Inventory JSON file, relative paths resolve against the config file
    pub inventory: Option<PathBuf>,
}

impl Default for ScoopConfig {
    fn default() -> Self {
        ScoopConfig {
            simulation: SimulationConfig::default(),
            seed: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel: true,
            inventory: None,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub marked_price: Option<f64>,
    pub discount_percent: Option<f64>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub trials: Option<usize>,
    pub seed: Option<u64>,
    pub chunk_size: Option<usize>,
    pub sequential: bool,
    pub inventory: Option<PathBuf>,
}

impl ScoopConfig {
    pub fn apply(&mut self, overrides: &Overrides) {
        let sim = &mut self.simulation;
        if let Some(v) = overrides.marked_price {
            sim.marked_price = v;
        }
        if let Some(v) = overrides.discount_percent {
            sim.discount_percent = v;
        }
        if let Some(v) = overrides.min_items {
            sim.min_items_per_bundle = v;
        }
        if let Some(v) = overrides.max_items {
            sim.max_items_per_bundle = v;
        }
        if let Some(v) = overrides.trials {
            sim.trial_count = v;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(v) = overrides.chunk_size {
            self.chunk_size = v;
        }
        if overrides.sequential {
            self.parallel = false;
        }
        if overrides.inventory.is_some() {
            self.inventory = overrides.inventory.clone();
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            seed: self.seed,
            chunk_size: self.chunk_size,
            parallel: self.parallel,
        }
    }
}

pub fn load_config(path: &Path) -> Result<ScoopConfig> {
    let raw = fs::read_to_string(path).map_err(|source| ScoopError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: ScoopConfig = serde_json::from_str(&raw).map_err(|source| ScoopError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let (Some(inventory), Some(dir)) = (&config.inventory, path.parent()) {
        if inventory.is_relative() {
            config.inventory = Some(dir.join(inventory));
        }
    }
    Ok(config)
}
