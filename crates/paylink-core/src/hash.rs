//! # Hash Providers
//!
//! Integrity hashes payment providers expect over order fields.
//! Every provider digests its input and returns the raw digest as standard,
//! padded Base64.
//!
//! ```text
//!            HashProvider (trait)
//!                    ▲
//!      ┌─────────────┼──────────────┐
//!  Md5HashProvider  Sha1HashProvider  Sha256HashProvider
//!   (128-bit)        (160-bit)         (256-bit)
//! ```

use crate::error::{LinkError, LinkResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use md5::Md5;
use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Computes a Base64-encoded digest of a string.
///
/// Implementations must be deterministic and side-effect free.
pub trait HashProvider: Send + Sync {
    /// Digest `input` and return it Base64-encoded.
    fn compute_digest(&self, input: &str) -> String;

    /// Algorithm name (for logging and listing).
    fn algorithm(&self) -> &'static str;
}

/// Type alias for a shared hash provider (dynamic dispatch)
pub type SharedHashProvider = Arc<dyn HashProvider>;

/// MD5 digest (16 bytes, 24 Base64 chars)
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5HashProvider;

impl HashProvider for Md5HashProvider {
    fn compute_digest(&self, input: &str) -> String {
        digest_base64::<Md5>(input)
    }

    fn algorithm(&self) -> &'static str {
        "md5"
    }
}

/// SHA-1 digest (20 bytes, 28 Base64 chars)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1HashProvider;

impl HashProvider for Sha1HashProvider {
    fn compute_digest(&self, input: &str) -> String {
        digest_base64::<Sha1>(input)
    }

    fn algorithm(&self) -> &'static str {
        "sha1"
    }
}

/// SHA-256 digest (32 bytes, 44 Base64 chars)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256HashProvider;

impl HashProvider for Sha256HashProvider {
    fn compute_digest(&self, input: &str) -> String {
        digest_base64::<Sha256>(input)
    }

    fn algorithm(&self) -> &'static str {
        "sha256"
    }
}

fn digest_base64<D: Digest>(input: &str) -> String {
    STANDARD.encode(D::digest(ascii_bytes(input)))
}

/// One byte per char; anything outside ASCII becomes `?`.
fn ascii_bytes(input: &str) -> Vec<u8> {
    input
        .chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    /// Build a shared provider for this algorithm
    pub fn provider(self) -> SharedHashProvider {
        match self {
            HashAlgorithm::Md5 => Arc::new(Md5HashProvider),
            HashAlgorithm::Sha1 => Arc::new(Sha1HashProvider),
            HashAlgorithm::Sha256 => Arc::new(Sha256HashProvider),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = LinkError;

    fn from_str(s: &str) -> LinkResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            _ => Err(LinkError::invalid_argument(format!("hash algorithm '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_base64(s: &str) -> bool {
        s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=')
    }

    #[test]
    fn test_md5_known_values() {
        assert_eq!(Md5HashProvider.compute_digest("123"), "ICy5YqxZB1uWSwcVLSNLcA==");
        assert_eq!(Md5HashProvider.compute_digest(""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn test_sha1_known_values() {
        assert_eq!(
            Sha1HashProvider.compute_digest("12000123secret_key"),
            "84zI5CgV1kccTK+gJ0KIqtE1BO8="
        );
        assert_eq!(Sha1HashProvider.compute_digest("123"), "QL0AFWMIX8NRZTKeof9cXsvbvu8=");
    }

    #[test]
    fn test_sha256_known_value() {
        assert_eq!(
            Sha256HashProvider.compute_digest("123"),
            "pmWkWSBCL51Bfkhn79xPuKBKHz//H6B+mY6G9/eieuM="
        );
    }

    #[test]
    fn test_non_ascii_becomes_question_mark() {
        assert_eq!(
            Md5HashProvider.compute_digest("é"),
            Md5HashProvider.compute_digest("?")
        );
        assert_eq!(Md5HashProvider.compute_digest("é"), "0UV7csP7MjomcRJa7z6rXQ==");
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("MD5".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert_eq!("sha-1".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha1);
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);

        let err = "crc32".parse::<HashAlgorithm>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_algorithm_provider_matches_name() {
        for alg in [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256] {
            assert_eq!(alg.provider().algorithm(), alg.as_str());
        }
    }

    proptest! {
        #[test]
        fn prop_digest_is_deterministic_base64(input in ".*") {
            for alg in [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256] {
                let hasher = alg.provider();
                let first = hasher.compute_digest(&input);
                prop_assert_eq!(&first, &hasher.compute_digest(&input));
                prop_assert!(is_base64(&first));
            }
        }

        #[test]
        fn prop_digest_length_is_fixed(input in "[ -~]{0,64}") {
            prop_assert_eq!(Md5HashProvider.compute_digest(&input).len(), 24);
            prop_assert_eq!(Sha1HashProvider.compute_digest(&input).len(), 28);
            prop_assert_eq!(Sha256HashProvider.compute_digest(&input).len(), 44);
        }
    }
}
