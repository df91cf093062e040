//! # YouTube Integration Module
//!
//! Talks to the YouTube Data API v3. The only endpoint clitube needs is
//! `GET /search`, used with `part=id,snippet` so each result carries the video
//! id and its title.
//!
//! The response is returned as an untyped [`serde_json::Value`]. Its shape is
//! only loosely guaranteed, so turning it into candidates is left to
//! [`crate::selection::filter`], which tolerates missing and malformed parts.
//!
//! ## Errors
//!
//! - Transport failures (DNS, TLS, timeouts) become [`crate::error::SearchError::Request`]
//! - Non-2xx answers (bad key, exhausted quota) become [`crate::error::SearchError::Status`]
//!   carrying the response body, which holds Google's explanation
//!
//! Nothing is retried; a failed search ends the run.

pub mod search;

pub use search::{SearchService, YoutubeClient};
