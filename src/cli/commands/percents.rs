//! CLI implementation for `mode_rotation percents`
//!
//! Shows how likely every map of a mode is to be offered next, given the
//! play log.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::commands::AppContext;
use crate::cli::output::{is_json, percent, styled_mode};
use crate::core::catalog::MapId;
use crate::core::mode::Mode;
use crate::core::rotation::Rotation;
use crate::infra::{filesystem, play_log};

#[derive(Debug, Serialize)]
struct ShareRow<'a> {
    id: MapId,
    nickname: &'a str,
    players: u16,
    share: f64,
}

/// Execute the percents command
pub fn execute(ctx: &AppContext, mode: Mode, players: Option<u16>) -> Result<()> {
    let catalog = filesystem::load_catalog(&ctx.maps_path)
        .with_context(|| format!("Failed to load maps from {}", ctx.maps_path.display()))?;
    let history = play_log::load(&ctx.log_path, &catalog)
        .with_context(|| format!("Failed to load play log from {}", ctx.log_path.display()))?;

    let rotation = Rotation::new(&catalog, &history);
    let scores = rotation.shares(mode, players.unwrap_or(0));

    if is_json() {
        let rows: Vec<ShareRow<'_>> = scores
            .iter()
            .map(|s| ShareRow {
                id: s.map.id,
                nickname: &s.map.nickname,
                players: s.map.players,
                share: s.share,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if scores.is_empty() {
        println!("No maps for {}", styled_mode(mode));
        return Ok(());
    }

    println!("All maps for {}", styled_mode(mode));
    for scored in &scores {
        println!(
            "  {} ({}) {}",
            scored.map.nickname,
            scored.map.players,
            percent(scored.share)
        );
    }

    Ok(())
}
