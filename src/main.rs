use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use scoop_sim::catalog::{default_inventory, load_inventory, summarize_catalog};
use scoop_sim::cli::Cli;
use scoop_sim::config::{load_config, ScoopConfig};
use scoop_sim::pricing::{estimated_margin, reference_price_table};
use scoop_sim::reporting::{display_price_table, display_report, display_setup};
use scoop_sim::{run_simulation, Result, ScoopError};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ScoopConfig::default(),
    };
    config.apply(&cli.overrides());

    let inventory = match &config.inventory {
        Some(path) => load_inventory(path)?,
        None => default_inventory(),
    };

    let sim = &config.simulation;
    if sim.discount_percent > 100.0 {
        warn!(
            discount = sim.discount_percent,
            "Discount above 100% gives a negative selling price"
        );
    }

    if !cli.json {
        display_setup(&summarize_catalog(&inventory), sim, estimated_margin(&inventory, sim));
        display_price_table(&reference_price_table(&inventory, sim));
    }

    let mut report = run_simulation(&inventory, sim, &config.run_options(), None)?;

    if cli.json {
        if !cli.include_trials {
            report.trials.clear();
        }
        let json = serde_json::to_string_pretty(&report).map_err(ScoopError::Serialize)?;
        println!("{}", json);
    } else {
        display_report(&report);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
