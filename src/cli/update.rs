use crate::{
    config::Config,
    error, info,
    player::update::{self, HttpFetcher, InstallOutcome},
    success,
};

/// Replaces VLC's YouTube playlist script with the current upstream version.
pub fn update(config: &Config) {
    info!(
        "Updating YouTube playlist script in {}",
        config.vlc_dir.display()
    );

    let fetcher = HttpFetcher::new();
    match update::install_playlist_script(&fetcher, &config.update_url, &config.vlc_dir) {
        Ok(InstallOutcome::Installed(path)) => {
            success!("Installed playlist script to {}", path.display())
        }
        Ok(InstallOutcome::UpToDate(path)) => {
            info!("Playlist script {} is already up to date", path.display())
        }
        Err(e) => error!("{}", e),
    }
}
