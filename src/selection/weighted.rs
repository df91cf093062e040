use rand::Rng;

use crate::{
    error::SelectionError,
    types::{CandidateList, Selection},
};

/// Selection weight per rank, best match first. Sums to 1.0.
pub const RANK_WEIGHTS: [f64; 10] = [
    0.30, 0.25, 0.20, 0.10, 0.05, 0.025, 0.025, 0.025, 0.0125, 0.0125,
];

/// Picks one candidate and builds its playable selection.
///
/// With at least [`RANK_WEIGHTS`]`.len()` candidates the pick follows the
/// weight table over the first ten ranks; lower ranks are never chosen.
/// Shorter lists are picked from uniformly.
///
/// The random source is injected so callers can pass a seeded generator.
///
/// # Errors
///
/// Returns [`SelectionError::Empty`] for an empty list.
pub fn select<R: Rng + ?Sized>(
    candidates: &CandidateList,
    rng: &mut R,
) -> Result<Selection, SelectionError> {
    let draw: f64 = rng.random();
    let rank = rank_for_draw(candidates.len(), draw).ok_or(SelectionError::Empty)?;

    candidates
        .get(rank)
        .map(Selection::from)
        .ok_or(SelectionError::Empty)
}

/// Maps a uniform draw in `[0, 1)` to a rank in a list of `len` candidates.
pub fn rank_for_draw(len: usize, draw: f64) -> Option<usize> {
    match len {
        0 => None,
        n if n >= RANK_WEIGHTS.len() => Some(weighted_rank(draw)),
        n => Some(((draw * n as f64) as usize).min(n - 1)),
    }
}

fn weighted_rank(draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (rank, weight) in RANK_WEIGHTS.iter().enumerate() {
        cumulative += weight;
        if draw < cumulative {
            return rank;
        }
    }

    // float rounding can leave the total a hair under 1.0
    RANK_WEIGHTS.len() - 1
}
