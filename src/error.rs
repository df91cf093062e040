//! Error types for every stage of a clitube run.
//!
//! Failures fall into two groups that need different exit handling:
//!
//! - **Recoverable** data-quality problems ([`FilterError`]): the search worked
//!   but yielded nothing playable. The run ends cleanly without a selection.
//! - **Fatal** problems ([`ConfigError`], [`SearchError`], [`PlayerError`],
//!   [`UpdateError`]): the process exits non-zero.
//!
//! [`CliTubeError`] is the union the pipeline hands back for fatal outcomes.
//! Filter and selection failures are not part of it; the pipeline reports them
//! as an [`AbortReason`] through [`crate::types::Outcome::Aborted`] instead.

use std::{io, path::PathBuf};

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("YOUTUBE_API_KEY is not set. Add it to your environment or the clitube .env file")]
    MissingApiKey,
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("Cannot prepare config directory: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot read .env file: {0}")]
    Dotenv(#[from] dotenv::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to reach the YouTube API: {0}")]
    Request(reqwest::Error),
    #[error("YouTube API rejected the search ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to parse search response: {0}")]
    Decode(reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("No items found in search result")]
    MissingItems,
    #[error("No results for search term")]
    NoCandidates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Cannot select from an empty candidate list")]
    Empty,
}

/// Why a run ended without starting the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AbortReason {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("{player} not found. Is '{}' installed and on your PATH?", .program.display())]
    NotFound { player: String, program: PathBuf },
    #[error("Failed to start {player} ('{}'): {source}", .program.display())]
    Spawn {
        player: String,
        program: PathBuf,
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("Failed to download playlist script: {0}")]
    Fetch(reqwest::Error),
    #[error("Playlist script download failed with status {0}")]
    Status(StatusCode),
    #[error("VLC installation directory {} does not exist", .0.display())]
    MissingInstallDir(PathBuf),
    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, thiserror::Error)]
pub enum CliTubeError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Player(#[from] PlayerError),
}
