//! CLI implementation for `mode_rotation simulate`
//!
//! Plays many rounds without touching the play log and prints how often
//! each map was picked, as CSV or JSON.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::commands::AppContext;
use crate::cli::output::{create_rounds_bar, is_json};
use crate::core::rotation::validate_players;
use crate::core::simulate::{simulate, SimulationOptions};
use crate::infra::filesystem;

/// Execute the simulate command
pub fn execute(ctx: &AppContext, rounds: usize, players: Option<u16>, seed: Option<u64>) -> Result<()> {
    let catalog = filesystem::load_catalog(&ctx.maps_path)
        .with_context(|| format!("Failed to load maps from {}", ctx.maps_path.display()))?;

    let options = SimulationOptions {
        rounds,
        players: validate_players(players.unwrap_or(ctx.players))?,
        choices: ctx.choices,
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        "Simulating {} rounds with {} players",
        options.rounds,
        options.players
    );

    let bar = create_rounds_bar(rounds as u64);
    let rows = simulate(&catalog, &options, &mut rng, |_| bar.inc(1));
    bar.finish_and_clear();
    let rows = rows.context("Simulation stopped")?;

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}", row.to_csv());
        }
    }

    Ok(())
}
