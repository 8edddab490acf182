//! Hash-digest leaf generators.
//!
//! Each digest unit draws a fresh random 32-character alphanumeric string
//! per invocation and yields its lowercase hex digest, so the output
//! always has the digest function's fixed length.

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::mock::Mock;
use crate::units::StringUnit;

/// Length of the random input string each digest draw hashes.
const INPUT_LEN: usize = 32;

/// Factory for hash-digest units bound to a [`Mock`] context.
pub struct Hashes {
    mock: Mock,
}

impl Mock {
    /// Hash-digest generators.
    pub fn hashes(&self) -> Hashes {
        Hashes { mock: self.clone() }
    }
}

impl Hashes {
    fn digest_unit<D: Digest + 'static>(&self) -> StringUnit {
        StringUnit::from(
            self.mock
                .strings_sized(INPUT_LEN)
                .map(|s| hex::encode(D::digest(s.as_bytes()))),
        )
    }

    /// SHA-224 hex digests (56 characters).
    pub fn sha224(&self) -> StringUnit {
        self.digest_unit::<Sha224>()
    }

    /// SHA-256 hex digests (64 characters).
    pub fn sha256(&self) -> StringUnit {
        self.digest_unit::<Sha256>()
    }

    /// SHA-384 hex digests (96 characters).
    pub fn sha384(&self) -> StringUnit {
        self.digest_unit::<Sha384>()
    }

    /// SHA-512 hex digests (128 characters).
    pub fn sha512(&self) -> StringUnit {
        self.digest_unit::<Sha512>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_digest_lengths() {
        let mock = Mock::with_seed(42);
        let hashes = mock.hashes();

        for _ in 0..20 {
            assert_eq!(hashes.sha224().value().len(), 56);
            assert_eq!(hashes.sha256().value().len(), 64);
            assert_eq!(hashes.sha384().value().len(), 96);
            assert_eq!(hashes.sha512().value().len(), 128);
        }
    }

    #[test]
    fn test_digests_are_lowercase_hex() {
        let mock = Mock::with_seed(42);
        let digest = mock.hashes().sha256().value();
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn test_consecutive_digests_differ() {
        let mock = Mock::with_seed(42);
        let unit = mock.hashes().sha512();
        assert_ne!(unit.value(), unit.value());
    }
}
