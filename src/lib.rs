//! Monte Carlo profitability estimates for scoop bundles: fixed-price packs
//! holding a random selection of inventory items.
//!
//! The core is [`run_trials`], [`summarize`] and [`bucket_margins`];
//! [`run_simulation`] chains them with seeding, chunking and parallelism.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod histogram;
pub mod models;
pub mod monte_carlo;
pub mod pricing;
pub mod reporting;
pub mod sampler;
pub mod stats;

pub use error::{Result, ScoopError};
pub use histogram::bucket_margins;
pub use models::{
    HistogramBucket, Inventory, Item, SimulationConfig, SimulationSummary, TrialResult,
    PACKAGING_SURCHARGE,
};
pub use monte_carlo::{run_simulation, RunOptions, SimulationReport};
pub use sampler::run_trials;
pub use stats::summarize;
