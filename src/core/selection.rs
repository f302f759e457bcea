//! Weighted random short-list
//!
//! Draws maps one at a time without replacement. Each draw picks among the
//! remaining candidates with probability proportional to their share.

use rand::Rng;

use crate::core::scoring::{sort_by_share, ScoredMap};

/// Number of maps offered per round
pub const DEFAULT_CHOICES: usize = 3;

/// Draw up to `count` distinct maps from `scores`, highest share first
///
/// Returns every candidate when there are fewer than `count`.
pub fn pick_choices<'a, R>(scores: &[ScoredMap<'a>], count: usize, rng: &mut R) -> Vec<ScoredMap<'a>>
where
    R: Rng + ?Sized,
{
    let mut remaining: Vec<ScoredMap<'a>> = scores.to_vec();
    let mut picked = Vec::with_capacity(count.min(remaining.len()));

    while picked.len() < count && !remaining.is_empty() {
        let idx = draw_index(&remaining, rng);
        let choice = remaining.remove(idx);
        tracing::trace!("Drew {} ({:.4})", choice.map.info(), choice.share);
        picked.push(choice);
    }

    sort_by_share(&mut picked);
    picked
}

/// Roulette-wheel draw over `remaining`
fn draw_index<R>(remaining: &[ScoredMap<'_>], rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let sum: f64 = remaining.iter().map(|s| s.share).sum();
    let mut target = rng.gen::<f64>() * sum;

    for (idx, scored) in remaining.iter().enumerate() {
        target -= scored.share;
        if target <= 0.0 {
            return idx;
        }
    }

    // float rounding can leave a sliver past the last entry
    remaining.len() - 1
}
