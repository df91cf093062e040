//! # Player Module
//!
//! Hands the chosen video to an external media player and keeps that player's
//! playlist script current.
//!
//! - [`MediaPlayer`] is the seam the pipeline talks to; [`vlc::Vlc`] is the
//!   real implementation, tests substitute their own
//! - [`dispatch`] starts playback for a [`Selection`] and returns it for
//!   reporting
//! - [`update`] downloads VLC's YouTube playlist parser and installs it into
//!   the VLC installation directory
//!
//! Playback is fire-and-forget: the player is spawned detached and clitube
//! exits without waiting for it.

pub mod update;
pub mod vlc;

pub use vlc::Vlc;

use crate::{error::PlayerError, types::Selection};

pub trait MediaPlayer {
    /// Human readable player name used in messages, e.g. `VLC`.
    fn name(&self) -> &str;

    /// Starts playback of `url` without waiting for the player to exit.
    fn play(&self, url: &str) -> Result<(), PlayerError>;
}

/// Starts playback of the selection and hands it back for reporting.
pub fn dispatch<P: MediaPlayer + ?Sized>(
    player: &P,
    selection: Selection,
) -> Result<Selection, PlayerError> {
    player.play(&selection.url)?;
    Ok(selection)
}
