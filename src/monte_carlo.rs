//! Monte Carlo run orchestration and result bundling

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, ScoopError};
use crate::histogram::default_histogram;
use crate::models::{HistogramBucket, Inventory, SimulationConfig, SimulationSummary, TrialResult};
use crate::pricing::{recommend, Recommendation};
use crate::sampler::run_trials;
use crate::stats::{cost_extremes, summarize};

pub const DEFAULT_CHUNK_SIZE: usize = 1_000;

/// How a run is executed, independent of what is simulated
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Seed for reproducibility (None = random)
    pub seed: Option<u64>,
    /// Trials per chunk; cancellation is checked between chunks
    pub chunk_size: usize,
    /// Spread chunks over the rayon thread pool
    pub parallel: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            seed: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel: true,
        }
    }
}

/// Everything one run produces, handed to whatever renders it
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub seed: u64,
    pub selling_price: f64,
    pub summary: SimulationSummary,
    pub histogram: Vec<HistogramBucket>,
    pub recommendation: Recommendation,
    /// Cheapest bundle drawn
    pub best_trial: TrialResult,
    /// Most expensive bundle drawn
    pub worst_trial: TrialResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trials: Vec<TrialResult>,
}

/// Run the full simulation: draw trials, then summarize and bucket them.
///
/// Trials are drawn in chunks; chunk `k` uses its own generator seeded with
/// `seed + k`, so a sequential and a parallel run with the same seed produce
/// the same trials in the same order. If `cancel` is set between chunks the
/// run is abandoned and nothing is returned.
pub fn run_simulation(
    inventory: &Inventory,
    config: &SimulationConfig,
    options: &RunOptions,
    cancel: Option<&AtomicBool>,
) -> Result<SimulationReport> {
    config.validate(inventory.len())?;
    if options.chunk_size == 0 {
        return Err(ScoopError::invalid_config("chunk size must be at least 1"));
    }

    let seed = options.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let selling_price = config.selling_price();
    let start = Instant::now();

    info!(
        trials = config.trial_count,
        items = inventory.len(),
        selling_price,
        seed,
        parallel = options.parallel,
        "Starting scoop simulation"
    );

    let chunks = chunk_sizes(config.trial_count, options.chunk_size);
    let run_chunk = |(k, size): (usize, usize)| -> Result<Vec<TrialResult>> {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(ScoopError::Cancelled);
        }
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(k as u64));
        let trials = run_trials(
            &mut rng,
            inventory,
            size,
            selling_price,
            config.min_items_per_bundle,
            config.max_items_per_bundle,
        )?;
        debug!(chunk = k, trials = size, "Chunk complete");
        Ok(trials)
    };

    let per_chunk: Vec<Vec<TrialResult>> = if options.parallel {
        chunks.into_par_iter().enumerate().map(run_chunk).collect::<Result<_>>()?
    } else {
        chunks.into_iter().enumerate().map(run_chunk).collect::<Result<_>>()?
    };
    let trials: Vec<TrialResult> = per_chunk.into_iter().flatten().collect();

    let summary = summarize(&trials, selling_price)?;
    let histogram = default_histogram(&trials)?;
    let (cheapest, priciest) = cost_extremes(&trials).ok_or(ScoopError::EmptyInput)?;
    let recommendation = recommend(&summary, config);

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        average_margin = summary.average_margin,
        negative_pct = summary.negative_pct,
        "Simulation complete"
    );

    Ok(SimulationReport {
        config: config.clone(),
        seed,
        selling_price,
        summary,
        histogram,
        recommendation,
        best_trial: trials[cheapest].clone(),
        worst_trial: trials[priciest].clone(),
        trials,
    })
}

/// Split `total` trials into chunks of at most `chunk_size`
fn chunk_sizes(total: usize, chunk_size: usize) -> Vec<usize> {
    let mut sizes = vec![chunk_size; total / chunk_size];
    if total % chunk_size > 0 {
        sizes.push(total % chunk_size);
    }
    sizes
}
