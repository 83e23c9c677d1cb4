//! CLI definitions using clap derive API

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

/// Monte Carlo profitability simulator for fixed-price scoop bundles
#[derive(Parser, Debug)]
#[command(name = "scoop-sim", version)]
pub struct Cli {
    /// JSON run configuration; flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// JSON inventory file (array of {id, name, base_cost}); defaults to the built-in catalog
    #[arg(long, short = 'i')]
    pub inventory: Option<PathBuf>,

    /// Marked price before discount
    #[arg(long)]
    pub mrp: Option<f64>,

    /// Discount percentage applied to the marked price
    #[arg(long, allow_hyphen_values = true)]
    pub discount: Option<f64>,

    /// Minimum items per scoop
    #[arg(long)]
    pub min_items: Option<usize>,

    /// Maximum items per scoop
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Number of simulated scoops
    #[arg(long, short = 'n')]
    pub trials: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long, env = "SCOOP_SIM_SEED")]
    pub seed: Option<u64>,

    /// Trials per chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Run all chunks on the current thread
    #[arg(long)]
    pub sequential: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Include every trial in JSON output
    #[arg(long, requires = "json")]
    pub include_trials: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            marked_price: self.mrp,
            discount_percent: self.discount,
            min_items: self.min_items,
            max_items: self.max_items,
            trials: self.trials,
            seed: self.seed,
            chunk_size: self.chunk_size,
            sequential: self.sequential,
            inventory: self.inventory.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_become_overrides() {
        let cli = Cli::parse_from([
            "scoop-sim",
            "--mrp",
            "999",
            "--max-items",
            "12",
            "--sequential",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.marked_price, Some(999.0));
        assert_eq!(overrides.max_items, Some(12));
        assert_eq!(overrides.min_items, None);
        assert!(overrides.sequential);
    }
}
