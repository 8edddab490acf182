//! UUID leaf generator.

use rand::Rng;
use uuid::Uuid;

use crate::mock::Mock;
use crate::units::StringUnit;

impl Mock {
    /// Hyphenated v4 UUID strings.
    ///
    /// The sixteen bytes come from the shared RNG rather than the uuid
    /// crate's own entropy, so a seeded context produces reproducible
    /// UUIDs.
    pub fn uuids(&self) -> StringUnit {
        let rng = self.rng();
        StringUnit::new(move || {
            let mut bytes = [0u8; 16];
            rng.borrow_mut().fill(&mut bytes);

            // Version 4 and RFC 4122 variant bits
            bytes[6] = (bytes[6] & 0x0f) | 0x40;
            bytes[8] = (bytes[8] & 0x3f) | 0x80;

            Uuid::from_bytes(bytes).hyphenated().to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_shape_and_version() {
        let mock = Mock::with_seed(42);
        let raw = mock.uuids().value();

        let parsed = Uuid::parse_str(&raw).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(raw.len(), 36);
    }

    #[test]
    fn test_uuids_are_deterministic_under_a_seed() {
        let u1 = Mock::with_seed(42).uuids().value();
        let u2 = Mock::with_seed(42).uuids().value();
        assert_eq!(u1, u2);
    }

    #[test]
    fn test_consecutive_uuids_differ() {
        let mock = Mock::with_seed(42);
        let unit = mock.uuids();
        assert_ne!(unit.value(), unit.value());
    }
}
