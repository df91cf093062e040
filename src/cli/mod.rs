//! # CLI Module
//!
//! User-facing commands. Each command takes the already loaded
//! [`crate::config::Config`], drives the library and reports the result with
//! the crate's output macros.
//!
//! - [`play`] - search, pick and play (the default command)
//! - [`update`] - refresh VLC's YouTube playlist script (`--update`)
//!
//! [`Command::from_args`] decides which one runs. With neither search terms
//! nor `--update` only usage is printed, before any configuration is read.
//!
//! Fatal problems go through [`crate::error!`], which prints and exits with
//! status 1. Recoverable ones are reported with [`crate::warning!`] and the
//! command returns normally.
//!
//! ## Usage
//!
//! ```bash
//! clitube daft punk harder              # play one of the top hits
//! clitube --player ~/bin/vlc daft punk  # use another VLC executable
//! clitube --update                      # fix VLC's YouTube support
//! ```

mod play;
mod update;

pub use play::play;
pub use update::update;

use crate::types::SearchQuery;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage and exit successfully.
    Usage,
    Update,
    Play(SearchQuery),
}

impl Command {
    /// `--update` wins over search terms; no search terms means usage.
    pub fn from_args<S: AsRef<str>>(search: &[S], update: bool) -> Self {
        if update {
            return Command::Update;
        }

        match SearchQuery::from_tokens(search) {
            Some(query) => Command::Play(query),
            None => Command::Usage,
        }
    }
}
