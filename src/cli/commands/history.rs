//! CLI implementation for `mode_rotation history`

use anyhow::{Context, Result};

use crate::cli::commands::AppContext;
use crate::cli::output::{is_json, print_info, styled_mode};
use crate::infra::{filesystem, play_log};

/// Execute the history command
pub fn execute(ctx: &AppContext, limit: usize) -> Result<()> {
    let catalog = filesystem::load_catalog(&ctx.maps_path)
        .with_context(|| format!("Failed to load maps from {}", ctx.maps_path.display()))?;
    let history = play_log::load(&ctx.log_path, &catalog)
        .with_context(|| format!("Failed to load play log from {}", ctx.log_path.display()))?;

    let skip = history.len().saturating_sub(limit);
    let recent = &history[skip..];

    if is_json() {
        let rows: Vec<serde_json::Value> = recent
            .iter()
            .enumerate()
            .map(|(idx, map)| {
                serde_json::json!({
                    "round": skip + idx + 1,
                    "id": map.id,
                    "nickname": map.nickname,
                    "mode": map.mode,
                    "players": map.players,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if history.is_empty() {
        print_info("No maps played yet");
        return Ok(());
    }

    for (idx, map) in recent.iter().enumerate() {
        println!(
            "{:>5}. {} {} ({})",
            skip + idx + 1,
            map.nickname,
            styled_mode(map.mode),
            map.players
        );
    }

    if let Some(last) = history.last() {
        if !recent.is_empty() {
            println!();
        }
        println!("Next up: {}", styled_mode(last.mode.next()));
    }

    Ok(())
}
