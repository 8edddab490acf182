//! Boolean leaf generators.

use rand::Rng;

use crate::error::MockError;
use crate::mock::Mock;
use crate::units::BoolUnit;

impl Mock {
    /// Fair coin flips.
    pub fn bools(&self) -> BoolUnit {
        let rng = self.rng();
        BoolUnit::new(move || rng.borrow_mut().random_bool(0.5))
    }

    /// `true` with probability `probability`, which must lie in `[0, 1]`.
    pub fn bools_probability(&self, probability: f64) -> Result<BoolUnit, MockError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(MockError::invalid(
                "probability",
                format!("must lie in [0, 1], got {probability}"),
            ));
        }
        let rng = self.rng();
        Ok(BoolUnit::new(move || {
            rng.borrow_mut().random_bool(probability)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_probabilities() {
        let mock = Mock::with_seed(42);

        let always = mock.bools_probability(1.0).unwrap();
        let never = mock.bools_probability(0.0).unwrap();

        for _ in 0..50 {
            assert!(always.value());
            assert!(!never.value());
        }
    }

    #[test]
    fn test_probability_out_of_range_fails_eagerly() {
        let mock = Mock::with_seed(42);

        assert!(mock.bools_probability(-0.1).is_err());
        assert!(mock.bools_probability(1.1).is_err());
        assert!(mock.bools_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_fair_coin_hits_both_sides() {
        let mock = Mock::with_seed(42);
        let flips: Vec<bool> = mock.bools().list(100).value();

        assert!(flips.iter().any(|&b| b));
        assert!(flips.iter().any(|&b| !b));
    }
}
