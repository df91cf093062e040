//! Self-update of VLC's YouTube playlist parser.
//!
//! VLC resolves `youtube.com/watch` URLs with a Lua playlist script that breaks
//! whenever YouTube changes its pages. Upstream fixes land long before VLC
//! releases, so clitube can pull the current script and drop it into the local
//! installation.

use std::{
    fs,
    path::{Path, PathBuf},
};

use reqwest::blocking::Client;

use crate::{error::UpdateError, utils};

/// Location of the playlist script relative to the VLC installation directory.
pub const PLAYLIST_SCRIPT: [&str; 3] = ["lua", "playlist", "youtube.luac"];

/// Source of the script bytes.
pub trait RemoteFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, UpdateError>;
}

/// Fetches over HTTPS, treating any non-2xx answer as a failure.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, UpdateError> {
        let pb = utils::spinner("Fetching playlist script...");

        let response = match self.client.get(url).send() {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    pb.finish_and_clear();
                    return Err(match err.status() {
                        Some(status) => UpdateError::Status(status),
                        None => UpdateError::Fetch(err),
                    });
                }
            },
            Err(err) => {
                pb.finish_and_clear();
                return Err(UpdateError::Fetch(err));
            } // network or reqwest error
        };

        let bytes = response.bytes().map_err(UpdateError::Fetch);
        pb.finish_and_clear();
        Ok(bytes?.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The script was written to the contained path.
    Installed(PathBuf),
    /// The installed script already matched the download.
    UpToDate(PathBuf),
}

pub fn script_path(install_dir: &Path) -> PathBuf {
    PLAYLIST_SCRIPT
        .iter()
        .fold(install_dir.to_path_buf(), |path, part| path.join(part))
}

/// Downloads the playlist script from `url` and installs it below
/// `install_dir`.
///
/// The installation directory must already exist; the `lua/playlist`
/// subdirectories are created as needed. An installed script with identical
/// content is left untouched.
///
/// # Errors
///
/// - [`UpdateError::MissingInstallDir`] if `install_dir` is not a directory.
///   Checked before anything is downloaded
/// - [`UpdateError::Fetch`] / [`UpdateError::Status`] if the download fails
/// - [`UpdateError::Write`] if the script cannot be written
pub fn install_playlist_script<F: RemoteFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    install_dir: &Path,
) -> Result<InstallOutcome, UpdateError> {
    if !install_dir.is_dir() {
        return Err(UpdateError::MissingInstallDir(install_dir.to_path_buf()));
    }

    let script = fetcher.fetch(url)?;
    let target = script_path(install_dir);

    if let Ok(installed) = fs::read(&target) {
        if utils::sha256_digest(&installed) == utils::sha256_digest(&script) {
            return Ok(InstallOutcome::UpToDate(target));
        }
    }

    let write_err = |source| UpdateError::Write {
        path: target.clone(),
        source,
    };
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(&target, &script).map_err(write_err)?;

    Ok(InstallOutcome::Installed(target))
}
