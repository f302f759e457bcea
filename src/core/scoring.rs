//! Map scoring
//!
//! Every map carries a recency penalty that grows whenever it, or a sibling
//! variant in the same group, is played, and decays a little with every play
//! that follows. Maps that haven't been played for a while also gain an age
//! bonus. The final score is the inverted, non-linear penalty times the age
//! bonus; scores of a candidate set are normalized into shares that sum to 1.

use crate::core::catalog::{Map, MapCatalog};
use crate::core::mode::Mode;

/// Age is capped here; a never-played map starts at the cap
pub const MAX_AGE: u16 = 200;

/// Penalty added for each play of the map (or a same-mode sibling)
pub const ROUND_PENALTY: f64 = 1000.0;

/// ~ 64th root of 2, so the penalty halves every 64 plays
pub const ROUND_DISCOUNT: f64 = 1.0 / 1.010_889_286_051_700_5;

/// ~ 12th root of 2, so the cross-mode penalty halves every 12 plays
pub const CROSS_MODE_ROUND_DISCOUNT: f64 = 1.0 / 1.059_463_094_359_295_3;

/// Penalty is raised to this power before inverting
pub const PENALTY_NONLINEARITY: f64 = 1.4;

/// Age is raised to this power before multiplying the inverted penalty
pub const AGE_POW: f64 = 0.6;

/// Lower clamp of a final score
pub const MIN_SCORE: f64 = 0.001;

/// Upper clamp of a final score
pub const MAX_SCORE: f64 = 100_000.0;

/// Accumulated recency state of one map
#[derive(Debug, Clone, PartialEq)]
pub struct MapScoring {
    /// Plays since this map was last played, capped at [`MAX_AGE`]
    pub age: u16,
    /// Penalty from plays of this map and same-mode siblings
    pub penalty: f64,
    /// Penalty from plays of siblings in other modes
    pub cross_mode_penalty: f64,
}

impl Default for MapScoring {
    fn default() -> Self {
        Self {
            age: MAX_AGE,
            penalty: 1.0,
            cross_mode_penalty: 1.0,
        }
    }
}

impl MapScoring {
    /// Fold one play into the state of `me`
    pub fn map_played(&mut self, me: &Map, played: &Map) {
        self.penalty *= ROUND_DISCOUNT;
        self.cross_mode_penalty *= CROSS_MODE_ROUND_DISCOUNT;
        self.age = MAX_AGE.min(self.age + 1);

        if played == me {
            self.age = 1;
        }

        if played.group == me.group {
            if played.mode == me.mode {
                self.penalty += ROUND_PENALTY;
            } else {
                self.cross_mode_penalty += me.mode.discount(played.mode) * ROUND_PENALTY;
            }
        }
    }

    /// Un-normalized score; higher is more likely to be offered
    #[must_use]
    pub fn final_score(&self) -> f64 {
        let total = self.penalty + self.cross_mode_penalty;
        let inverted = 1000.0 / total.powf(PENALTY_NONLINEARITY);
        let score = inverted * f64::from(self.age).powf(AGE_POW);
        let score = score.clamp(MIN_SCORE, MAX_SCORE);

        debug_assert!(!score.is_nan());
        score
    }
}

/// A candidate map and its share of the candidate set
#[derive(Debug, Clone, Copy)]
pub struct ScoredMap<'a> {
    /// Normalized score; all shares of one set sum to 1
    pub share: f64,
    pub map: &'a Map,
}

/// Recency state for every playable map, updated one play at a time
#[derive(Debug, Clone)]
pub struct ScoreTracker<'a> {
    entries: Vec<(&'a Map, MapScoring)>,
}

impl<'a> ScoreTracker<'a> {
    /// Fresh state for every enabled map of the catalog
    #[must_use]
    pub fn new(catalog: &'a MapCatalog) -> Self {
        let entries = catalog
            .maps()
            .filter(|m| !m.disabled)
            .map(|m| (m, MapScoring::default()))
            .collect();

        Self { entries }
    }

    /// State after replaying `history` in order
    #[must_use]
    pub fn from_history(catalog: &'a MapCatalog, history: &[&Map]) -> Self {
        let mut tracker = Self::new(catalog);
        for played in history {
            tracker.record(played);
        }
        tracker
    }

    /// Apply one play to every map
    pub fn record(&mut self, played: &Map) {
        for (me, scoring) in &mut self.entries {
            scoring.map_played(*me, played);
        }
    }

    /// Normalized scores of every candidate for `mode` and `players`,
    /// highest share first
    ///
    /// Empty when nothing qualifies.
    #[must_use]
    pub fn scores(&self, mode: Mode, players: u16) -> Vec<ScoredMap<'a>> {
        let raw: Vec<(f64, &'a Map)> = self
            .entries
            .iter()
            .filter(|(m, _)| m.is_candidate(mode, players))
            .map(|(m, s)| {
                tracing::trace!(
                    "{} penalty={:.3} cross={:.3} age={}",
                    m.info(),
                    s.penalty,
                    s.cross_mode_penalty,
                    s.age
                );
                (s.final_score(), *m)
            })
            .collect();

        let mut scores = normalize(&raw);
        sort_by_share(&mut scores);

        for s in &scores {
            tracing::debug!("{:.4} {}", s.share, s.map.info());
        }

        scores
    }
}

/// Scores of the candidates for `mode` and `players` after `history`
#[cfg(test)]
pub(crate) fn build_scores<'a>(
    catalog: &'a MapCatalog,
    history: &[&Map],
    mode: Mode,
    players: u16,
) -> Vec<ScoredMap<'a>> {
    ScoreTracker::from_history(catalog, history).scores(mode, players)
}

/// Sort highest share first; equal shares keep their order
pub fn sort_by_share(scores: &mut [ScoredMap<'_>]) {
    scores.sort_by(|a, b| b.share.total_cmp(&a.share));
}

fn normalize<'a>(raw: &[(f64, &'a Map)]) -> Vec<ScoredMap<'a>> {
    let sum: f64 = raw.iter().map(|(s, _)| s).sum();
    raw.iter()
        .map(|&(s, map)| ScoredMap {
            share: s / sum,
            map,
        })
        .collect()
}
