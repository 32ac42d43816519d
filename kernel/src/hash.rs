//! Content fingerprints with domain separation.
//!
//! Algorithm: SHA-256 over a null-terminated domain prefix followed by the
//! payload bytes. Distinct domains never collide on the same payload.

use sha2::{Digest, Sha256};

/// A content-addressed fingerprint.
///
/// Rendered as `"sha256:<hex_digest>"`; the hex digest alone is available
/// via [`Fingerprint::hex_digest`] and is what keyed stores index on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint {
    hex: String,
}

impl Fingerprint {
    /// The hex digest portion (64 lowercase hex characters).
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.hex
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.hex)
    }
}

/// Compute the fingerprint of a byte slice under a domain prefix.
///
/// Domain prefixes must be null-terminated so no prefix can be a prefix of
/// another; see the `DOMAIN_*` constants in [`crate::store`].
#[must_use]
pub fn fingerprint(domain: &[u8], data: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    Fingerprint {
        hex: hex::encode(hasher.finalize()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = fingerprint(b"TEST::A\0", b"payload");
        let b = fingerprint(b"TEST::A\0", b"payload");
        assert_eq!(a, b);
    }

    #[test]
    fn digest_is_64_hex_chars() {
        let fp = fingerprint(b"TEST::A\0", b"payload");
        assert_eq!(fp.hex_digest().len(), 64);
        assert!(fp.hex_digest().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn domains_separate_identical_payloads() {
        let a = fingerprint(b"TEST::A\0", b"payload");
        let b = fingerprint(b"TEST::B\0", b"payload");
        assert_ne!(a, b);
    }

    #[test]
    fn display_carries_algorithm_prefix() {
        let fp = fingerprint(b"TEST::A\0", b"payload");
        assert_eq!(fp.to_string(), format!("sha256:{}", fp.hex_digest()));
    }
}
