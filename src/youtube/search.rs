use reqwest::blocking::Client;
use serde_json::Value;

use crate::{error::SearchError, types::SearchQuery, utils};

/// Anything that can answer a search query with a raw result document.
pub trait SearchService {
    fn search(&self, query: &SearchQuery) -> Result<Value, SearchError>;
}

/// Blocking client for the YouTube Data API v3 search endpoint.
pub struct YoutubeClient {
    client: Client,
    api_url: String,
    api_key: String,
    max_results: u32,
}

impl YoutubeClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>, max_results: u32) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            max_results,
        }
    }

    fn search_url(&self) -> String {
        format!("{uri}/search", uri = self.api_url.trim_end_matches('/'))
    }
}

impl SearchService for YoutubeClient {
    /// Runs one search request and returns the decoded JSON body.
    ///
    /// Shows a spinner while the request is in flight. The spinner is cleared
    /// on every exit path.
    fn search(&self, query: &SearchQuery) -> Result<Value, SearchError> {
        let pb = utils::spinner(format!("Searching YouTube for \"{}\"...", query));

        let max_results = self.max_results.to_string();
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("part", "id,snippet"),
                ("q", query.as_str()),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send();

        let response = match response {
            Ok(resp) => resp,
            Err(err) => {
                pb.finish_and_clear();
                return Err(SearchError::Request(err));
            } // network or reqwest error
        };

        let status = response.status();
        if !status.is_success() {
            pb.finish_and_clear();
            let body = response.text().unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let res = response.json::<Value>().map_err(SearchError::Decode);
        pb.finish_and_clear();
        res
    }
}
