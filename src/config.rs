//! Configuration management for clitube.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Everything is read once at start-up into a [`Config`] that is passed to the
//! commands. Nothing reads the environment after that.

use std::{env, fs, path::PathBuf};

use crate::{error::ConfigError, utils};

pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const DEFAULT_PLAYER: &str = "vlc";
pub const DEFAULT_UPDATE_URL: &str =
    "https://raw.githubusercontent.com/videolan/vlc/master/share/lua/playlist/youtube.lua";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives at `clitube/.env` under the platform's local data directory:
/// - Linux: `~/.local/share/clitube/.env`
/// - macOS: `~/Library/Application Support/clitube/.env`
/// - Windows: `%LOCALAPPDATA%/clitube/.env`
///
/// The directory is created when missing. A missing file is not an error;
/// variables may just as well come from the process environment.
///
/// # Errors
///
/// Fails if the directory cannot be created or the file cannot be parsed.
pub fn load_env() -> Result<(), ConfigError> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("clitube/.env");
    path
}

/// Where VLC usually lives on this platform.
pub fn default_vlc_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        PathBuf::from(r"C:\Program Files\VideoLAN\VLC")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Applications/VLC.app/Contents/MacOS")
    } else {
        PathBuf::from("/usr/lib/vlc")
    }
}

/// Runtime settings for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_key: Option<String>,
    pub api_url: String,
    pub max_results: u32,
    pub player: PathBuf,
    pub player_background: bool,
    pub vlc_dir: PathBuf,
    pub update_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, applying defaults for unset
    /// keys. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for values that do not parse:
    /// - `CLITUBE_MAX_RESULTS` outside `1..=50`
    /// - `CLITUBE_PLAYER_BACKGROUND` not a recognisable boolean
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let max_results = match get("CLITUBE_MAX_RESULTS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=50).contains(n))
                .ok_or(ConfigError::Invalid {
                    key: "CLITUBE_MAX_RESULTS",
                    value,
                })?,
            None => DEFAULT_MAX_RESULTS,
        };

        let player_background = match get("CLITUBE_PLAYER_BACKGROUND") {
            Some(value) => utils::parse_bool(&value).ok_or(ConfigError::Invalid {
                key: "CLITUBE_PLAYER_BACKGROUND",
                value,
            })?,
            None => true,
        };

        Ok(Self {
            api_key: get("YOUTUBE_API_KEY"),
            api_url: get("YOUTUBE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            max_results,
            player: get("CLITUBE_PLAYER")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PLAYER)),
            player_background,
            vlc_dir: get("VLC_INSTALL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_vlc_dir),
            update_url: get("CLITUBE_UPDATE_URL")
                .unwrap_or_else(|| DEFAULT_UPDATE_URL.to_string()),
        })
    }

    /// Returns the YouTube API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if `YOUTUBE_API_KEY` was not set.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    pub fn with_player(mut self, player: Option<PathBuf>) -> Self {
        if let Some(player) = player {
            self.player = player;
        }
        self
    }
}
