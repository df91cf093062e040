use crate::{
    config::Config,
    error, pipeline,
    player::Vlc,
    success,
    types::{Outcome, SearchQuery},
    warning,
    youtube::YoutubeClient,
};

/// Searches YouTube for `query` and plays one of the top results in VLC.
///
/// # Exit Behaviour
///
/// - Missing API key, failed search or missing player: error message, exit 1
/// - No playable result: warning, the process continues to a clean exit
/// - Success: prints the chosen title and URL; VLC keeps running on its own
pub fn play(config: &Config, query: SearchQuery) {
    let api_key = match config.api_key() {
        Ok(key) => key,
        Err(e) => error!("{}", e),
    };

    let search = YoutubeClient::new(&config.api_url, api_key, config.max_results);
    let player = Vlc::new(config.player.clone(), config.player_background);

    match pipeline::run(&query, &search, &player, &mut rand::rng()) {
        Ok(Outcome::Dispatched(selection)) => {
            success!("Playing {}", selection.title);
            success!("{}", selection.url);
        }
        Ok(Outcome::Aborted(reason)) => warning!("{}", reason),
        Err(e) => error!("{}", e),
    }
}
