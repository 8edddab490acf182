//! Random string leaf generators.

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::mock::Mock;
use crate::units::StringUnit;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const HEX_DIGITS: &[u8] = b"0123456789abcdef";

const DEFAULT_LEN: usize = 64;

/// Character class for random string generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringKind {
    /// ASCII letters and digits.
    Alphanumeric,
    /// ASCII letters only.
    Letters,
    /// Decimal digits only.
    Digits,
    /// Lowercase hexadecimal digits.
    Hex,
}

impl Mock {
    /// Alphanumeric strings of the default length (64 characters).
    pub fn strings(&self) -> StringUnit {
        self.strings_sized(DEFAULT_LEN)
    }

    /// Alphanumeric strings of exactly `len` characters.
    pub fn strings_sized(&self, len: usize) -> StringUnit {
        self.strings_of(StringKind::Alphanumeric, len)
    }

    /// Strings of exactly `len` characters drawn uniformly from `kind`.
    pub fn strings_of(&self, kind: StringKind, len: usize) -> StringUnit {
        let rng = self.rng();
        StringUnit::new(move || {
            let mut rng = rng.borrow_mut();
            match kind {
                StringKind::Alphanumeric => (0..len)
                    .map(|_| rng.sample(Alphanumeric) as char)
                    .collect(),
                StringKind::Letters => pick_chars(&mut *rng, LETTERS, len),
                StringKind::Digits => pick_chars(&mut *rng, DIGITS, len),
                StringKind::Hex => pick_chars(&mut *rng, HEX_DIGITS, len),
            }
        })
    }
}

fn pick_chars<R: Rng>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}
