//! Model digest helper.
//!
//! Aggregators identify a model by the lowercase hex SHA-256 of its
//! serialized form. The contract treats the resulting string as opaque.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `model_bytes`.
pub fn model_digest(model_bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(model_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(
            model_digest(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            model_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let d = model_digest(br#"{"weights":[0.1,0.2]}"#);
        assert_eq!(d.len(), 64);
        assert!(d.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }
}
