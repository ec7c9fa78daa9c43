//! Request signatures
//!
//! The remote service verifies `sha1(sorted "k=v" pairs joined by '&' + secret)`.
//! The secret is appended with no separator.

use sha1::{Digest, Sha1};

/// Sign a set of API parameters with the account secret.
///
/// Parameters are sorted by name before joining, so callers may pass them in
/// any order. An upload signs only `timestamp`, which yields the message
/// `timestamp=<ts><secret>`.
pub fn api_sign_request(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Signature for an upload request issued at `timestamp`.
pub fn sign_upload(timestamp: &str, api_secret: &str) -> String {
    api_sign_request(&[("timestamp", timestamp)], api_secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sha1_hex(input: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(input.as_bytes());
        hex::encode(hasher.finalize())
    }

    #[test]
    fn test_upload_signature_vector() {
        assert_eq!(
            sign_upload("1000000000", "secret"),
            sha1_hex("timestamp=1000000000secret")
        );
    }

    #[test]
    fn test_known_sha1_digest() {
        // sha1("abc")
        assert_eq!(sha1_hex("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(
            api_sign_request(&[("a", "b")], "c"),
            sha1_hex("a=bc")
        );
    }

    #[test]
    fn test_params_are_sorted_before_signing() {
        let forward = api_sign_request(&[("public_id", "x"), ("timestamp", "1")], "s");
        let reversed = api_sign_request(&[("timestamp", "1"), ("public_id", "x")], "s");
        assert_eq!(forward, reversed);
        assert_eq!(forward, sha1_hex("public_id=x&timestamp=1s"));
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let sig = sign_upload("1", "secret");
        assert_eq!(sig.len(), 40);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
