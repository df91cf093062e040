use serde_json::Value;

use crate::{
    error::FilterError,
    types::{CandidateList, SearchItem},
};

/// Extracts the ranked candidate list from a raw search response.
///
/// Entries without both `id.videoId` and `snippet.title` strings are skipped
/// silently. Identifiers keep the rank of their first occurrence; a repeated
/// identifier only replaces the title.
///
/// # Errors
///
/// - [`FilterError::MissingItems`] if the response has no `items` sequence
/// - [`FilterError::NoCandidates`] if no entry qualifies
///
/// # Example
///
/// ```
/// let raw = serde_json::json!({
///     "items": [{ "id": { "videoId": "abc123" }, "snippet": { "title": "Song X" } }]
/// });
/// let candidates = filter_candidates(&raw)?;
/// assert_eq!(candidates.len(), 1);
/// ```
pub fn filter_candidates(raw: &Value) -> Result<CandidateList, FilterError> {
    let items = raw
        .get("items")
        .and_then(Value::as_array)
        .ok_or(FilterError::MissingItems)?;

    let candidates: CandidateList = items
        .iter()
        .map(SearchItem::from_value)
        .filter_map(SearchItem::into_candidate)
        .collect();

    if candidates.is_empty() {
        return Err(FilterError::NoCandidates);
    }

    Ok(candidates)
}
