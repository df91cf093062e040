//! The search-to-playback run as one linear sequence:
//!
//! ```text
//! Idle → QueryBuilt → ResultsFetched → Filtered → Selected → Dispatched
//! ```
//!
//! Filtered and Selected fall through to Aborted when nothing playable is
//! left.
//!
//! There are no loops or retries. Collaborators are passed in, which keeps the
//! run testable without network access or a real player.

use rand::Rng;

use crate::{
    error::CliTubeError,
    player::{self, MediaPlayer},
    selection,
    types::{CandidateList, Outcome, SearchQuery},
    youtube::SearchService,
};

/// Searches for `query`, picks one result and hands it to `player`.
///
/// A search that yields nothing playable is not an error: it ends as
/// [`Outcome::Aborted`] and the player is never started.
///
/// # Errors
///
/// Fatal failures only: the search request failed, or the player could not be
/// started.
pub fn run<S, P, R>(
    query: &SearchQuery,
    search: &S,
    player: &P,
    rng: &mut R,
) -> Result<Outcome, CliTubeError>
where
    S: SearchService + ?Sized,
    P: MediaPlayer + ?Sized,
    R: Rng + ?Sized,
{
    let raw = search.search(query)?;

    match selection::filter_candidates(&raw) {
        Ok(candidates) => play_one(&candidates, player, rng),
        Err(e) => Ok(Outcome::Aborted(e.into())),
    }
}

/// Picks one of `candidates` and hands it to `player`.
///
/// An empty list aborts without starting the player.
pub fn play_one<P, R>(
    candidates: &CandidateList,
    player: &P,
    rng: &mut R,
) -> Result<Outcome, CliTubeError>
where
    P: MediaPlayer + ?Sized,
    R: Rng + ?Sized,
{
    let chosen = match selection::select(candidates, rng) {
        Ok(chosen) => chosen,
        Err(e) => return Ok(Outcome::Aborted(e.into())),
    };
    let dispatched = player::dispatch(player, chosen)?;

    Ok(Outcome::Dispatched(dispatched))
}
