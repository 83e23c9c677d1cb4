//! Trial engine: draws random bundles from the inventory and prices them

use rand::seq::index;
use rand::Rng;
use rand_distr::Uniform;

use crate::error::Result;
use crate::models::{validate_bounds, Inventory, Item, TrialResult};

/// Draw `trial_count` independent bundles from `inventory`.
///
/// Each trial picks a bundle size uniformly from `[min_items, max_items]`, then
/// that many distinct items uniformly without replacement from the full
/// inventory. Nothing is drawn if the bounds are invalid.
pub fn run_trials<R: Rng + ?Sized>(
    rng: &mut R,
    inventory: &Inventory,
    trial_count: usize,
    selling_price: f64,
    min_items: usize,
    max_items: usize,
) -> Result<Vec<TrialResult>> {
    validate_bounds(inventory.len(), trial_count, min_items, max_items)?;

    let bundle_sizes = Uniform::new_inclusive(min_items, max_items);
    let mut trials = Vec::with_capacity(trial_count);

    for _ in 0..trial_count {
        let bundle_size = rng.sample(&bundle_sizes);
        let picked = draw_bundle(rng, inventory.items(), bundle_size);
        trials.push(TrialResult::from_items(picked, selling_price));
    }

    Ok(trials)
}

/// Uniform random subset of `size` items, callers guarantee `size <= items.len()`
fn draw_bundle<R: Rng + ?Sized>(rng: &mut R, items: &[Item], size: usize) -> Vec<Item> {
    index::sample(rng, items.len(), size)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}
