use clitube::{error::FilterError, selection::filter_candidates};
use serde_json::{Value, json};

// Helper function to create a well-formed search result entry
fn video(id: &str, title: &str) -> Value {
    json!({
        "kind": "youtube#searchResult",
        "id": { "kind": "youtube#video", "videoId": id },
        "snippet": { "title": title }
    })
}

#[test]
fn test_missing_items() {
    let raw = json!({ "kind": "youtube#searchListResponse" });
    assert_eq!(filter_candidates(&raw).unwrap_err(), FilterError::MissingItems);

    // Error bodies from the API look like this
    let raw = json!({ "error": { "code": 403, "message": "quota" } });
    assert_eq!(filter_candidates(&raw).unwrap_err(), FilterError::MissingItems);
}

#[test]
fn test_items_not_a_sequence() {
    let raw = json!({ "items": { "id": "abc" } });
    assert_eq!(filter_candidates(&raw).unwrap_err(), FilterError::MissingItems);

    let raw = json!({ "items": null });
    assert_eq!(filter_candidates(&raw).unwrap_err(), FilterError::MissingItems);
}

#[test]
fn test_empty_items() {
    let raw = json!({ "items": [] });
    assert_eq!(filter_candidates(&raw).unwrap_err(), FilterError::NoCandidates);
}

#[test]
fn test_only_malformed_items() {
    let raw = json!({
        "items": [
            { "id": { "channelId": "UC1" }, "snippet": { "title": "Channel" } },
            { "id": { "videoId": "abc" } },
            { "snippet": { "title": "No id" } },
            "garbage",
            42
        ]
    });
    assert_eq!(filter_candidates(&raw).unwrap_err(), FilterError::NoCandidates);
}

#[test]
fn test_malformed_entries_are_skipped() {
    let raw = json!({
        "items": [
            video("one", "Song 1"),
            { "id": { "playlistId": "PL1" }, "snippet": { "title": "Playlist" } },
            video("two", "Song 2"),
            { "id": { "videoId": "three" }, "snippet": {} },
            video("four", "Song 4")
        ]
    });

    let candidates = filter_candidates(&raw).unwrap();

    // Only qualifying entries count, in response order
    assert_eq!(candidates.len(), 3);
    let ids: Vec<&str> = candidates.iter().map(|c| c.identifier.as_str()).collect();
    assert_eq!(ids, vec!["one", "two", "four"]);
}

#[test]
fn test_duplicate_identifiers() {
    let raw = json!({
        "items": [
            video("x", "Old title"),
            video("y", "Song Y"),
            video("x", "New title")
        ]
    });

    let candidates = filter_candidates(&raw).unwrap();

    assert_eq!(candidates.len(), 2);
    // First occurrence decides the rank, last occurrence the title
    assert_eq!(candidates.get(0).unwrap().identifier, "x");
    assert_eq!(candidates.get(0).unwrap().title, "New title");
    assert_eq!(candidates.get(1).unwrap().identifier, "y");
}
