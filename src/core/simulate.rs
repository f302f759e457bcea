//! Rotation simulation
//!
//! Plays many rounds from an empty history, always taking the top entry of
//! each short-list, and counts how often every map comes up. Useful for
//! checking that the scoring spreads plays sensibly.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;

use crate::core::catalog::{MapCatalog, MapId};
use crate::core::mode::Mode;
use crate::core::rotation::Rotation;
use crate::error::RotationError;

/// Rounds played when not specified
pub const DEFAULT_ROUNDS: usize = 10_000;

/// Simulation parameters
#[derive(Debug, Clone)]
pub struct SimulationOptions {
    pub rounds: usize,
    pub players: u16,
    pub choices: usize,
}

/// Play count of one map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayCount {
    pub mode: Mode,
    pub nickname: String,
    pub id: MapId,
    pub plays: u32,
}

impl PlayCount {
    /// CSV row: `"mode","nickname",plays`
    #[must_use]
    pub fn to_csv(&self) -> String {
        format!("\"{}\",\"{}\",{}", self.mode, self.nickname, self.plays)
    }
}

/// Run the simulation
///
/// `on_round` is called after every round with the number of rounds done.
/// Rows are ordered by mode, then by group and variant file order; maps that
/// were never played are left out.
pub fn simulate<R, F>(
    catalog: &MapCatalog,
    options: &SimulationOptions,
    rng: &mut R,
    mut on_round: F,
) -> Result<Vec<PlayCount>, RotationError>
where
    R: Rng + ?Sized,
    F: FnMut(usize),
{
    let mut rotation = Rotation::new(catalog, &[])
        .with_players(options.players)
        .with_choices(options.choices);
    let mut counts: HashMap<MapId, u32> = HashMap::new();

    for round in 0..options.rounds {
        let choices = rotation.choices(rng)?;
        let top = choices[0].map;

        *counts.entry(top.id).or_default() += 1;
        rotation.record(top);
        on_round(round + 1);
    }

    tracing::info!(
        "Simulated {} rounds, {} distinct maps played",
        options.rounds,
        counts.len()
    );

    let mut rows = Vec::new();
    for mode in Mode::ALL {
        for group in catalog.groups() {
            for map in catalog.variants(group).filter(|m| m.mode == mode) {
                if let Some(&plays) = counts.get(&map.id) {
                    rows.push(PlayCount {
                        mode,
                        nickname: map.nickname.clone(),
                        id: map.id,
                        plays,
                    });
                }
            }
        }
    }

    Ok(rows)
}
