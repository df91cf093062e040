//! # Selection Module
//!
//! Turns a raw search response into the one video that gets played.
//!
//! ```text
//! raw response
//!      ↓
//! filter   (well-formed (id, title) pairs, ranked, unique by id)
//!      ↓
//! weighted (one pick, biased towards the top ranks)
//!      ↓
//! Selection { url, title }
//! ```
//!
//! - [`filter`] - extracts candidates from the loosely structured response and
//!   reports missing or empty results as recoverable [`crate::error::FilterError`]s
//! - [`weighted`] - picks one candidate from a fixed rank weight table, or
//!   uniformly when there are too few results for the table to apply

pub mod filter;
pub mod weighted;

pub use filter::filter_candidates;
pub use weighted::select;
