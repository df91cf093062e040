use std::{collections::HashMap, fmt};

use serde_json::Value;

use crate::error::AbortReason;

/// Base of every playable URL handed to the player.
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// The free-text search phrase sent to YouTube.
///
/// Built once from the command line tokens and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Joins the tokens with single spaces, keeping their order.
    ///
    /// Tokens are taken verbatim: no trimming, case folding or escaping.
    /// Returns `None` for an empty token list, in which case the caller shows
    /// usage instead of searching.
    ///
    /// # Example
    ///
    /// ```
    /// let tokens = vec!["daft".to_string(), "punk".to_string()];
    /// let query = SearchQuery::from_tokens(&tokens).unwrap();
    /// assert_eq!(query.as_str(), "daft punk");
    /// ```
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }

        let joined = tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        Some(Self(joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Typed view of one entry of the raw `items` array.
///
/// The search API only loosely guarantees its schema, so both fields are
/// optional and filled by explicit presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchItem {
    pub video_id: Option<String>,
    pub title: Option<String>,
}

impl SearchItem {
    pub fn from_value(value: &Value) -> Self {
        let video_id = value
            .get("id")
            .and_then(|id| id.get("videoId"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let title = value
            .get("snippet")
            .and_then(|snippet| snippet.get("title"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self { video_id, title }
    }

    /// Returns the candidate for this entry if both fields are present.
    pub fn into_candidate(self) -> Option<Candidate> {
        match (self.video_id, self.title) {
            (Some(identifier), Some(title)) => Some(Candidate { identifier, title }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub identifier: String,
    pub title: String,
}

/// Ranked, identifier-unique list of candidates.
///
/// Rank follows the first time an identifier was seen. Pushing a known
/// identifier again only replaces its title.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    candidates: Vec<Candidate>,
    positions: HashMap<String, usize>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: Candidate) {
        match self.positions.get(&candidate.identifier) {
            Some(&rank) => self.candidates[rank].title = candidate.title,
            None => {
                self.positions
                    .insert(candidate.identifier.clone(), self.candidates.len());
                self.candidates.push(candidate);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, rank: usize) -> Option<&Candidate> {
        self.candidates.get(rank)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.positions.contains_key(identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }
}

impl FromIterator<Candidate> for CandidateList {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut list = CandidateList::new();
        for candidate in iter {
            list.push(candidate);
        }
        list
    }
}

/// The single candidate chosen for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub url: String,
    pub title: String,
}

impl From<&Candidate> for Selection {
    fn from(candidate: &Candidate) -> Self {
        Self {
            url: format!("{WATCH_URL_PREFIX}{}", candidate.identifier),
            title: candidate.title.clone(),
        }
    }
}

/// How a search run ended when nothing fatal happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The selection was handed to the player.
    Dispatched(Selection),
    /// Nothing playable came out of the search; the player was not started.
    Aborted(AbortReason),
}
