use clitube::utils::*;

#[test]
fn test_parse_bool() {
    for value in ["1", "true", "TRUE", "yes", "on", " true "] {
        assert_eq!(parse_bool(value), Some(true), "{value}");
    }
    for value in ["0", "false", "No", "off"] {
        assert_eq!(parse_bool(value), Some(false), "{value}");
    }
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

#[test]
fn test_sha256_digest() {
    let digest = sha256_digest(b"abc");

    // Should be deterministic
    assert_eq!(digest, sha256_digest(b"abc"));

    // Different input should produce different output
    assert_ne!(digest, sha256_digest(b"abd"));

    // Known test vector
    assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
}
