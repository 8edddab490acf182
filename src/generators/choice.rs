//! Uniform selection from a caller-supplied pool.

use rand::Rng;

use crate::error::MockError;
use crate::mock::Mock;
use crate::unit::MockUnit;

impl Mock {
    /// Uniform pick from an owned pool of values. Each draw clones one
    /// element. The pool must be non-empty.
    pub fn from_values<T>(&self, values: Vec<T>) -> Result<MockUnit<T>, MockError>
    where
        T: Clone + 'static,
    {
        if values.is_empty() {
            return Err(MockError::invalid("values", "pool must not be empty"));
        }
        let rng = self.rng();
        Ok(MockUnit::new(move || {
            let idx = rng.borrow_mut().random_range(0..values.len());
            values[idx].clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_picks_come_from_the_pool() {
        let mock = Mock::with_seed(42);
        let pool = vec!["red", "green", "blue"];
        let unit = mock.from_values(pool.clone()).unwrap();

        for value in unit.values().take(100) {
            assert!(pool.contains(&value));
        }
    }

    #[test]
    fn test_every_element_is_reachable() {
        let mock = Mock::with_seed(42);
        let unit = mock.from_values(vec![1u8, 2, 3]).unwrap();

        let seen: HashSet<u8> = unit.values().take(200).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_pool_fails_eagerly() {
        let mock = Mock::with_seed(42);
        let err = mock.from_values(Vec::<i32>::new()).unwrap_err();
        assert!(matches!(
            err,
            MockError::InvalidArgument { param: "values", .. }
        ));
    }

    #[test]
    fn test_single_element_pool() {
        let mock = Mock::with_seed(42);
        let unit = mock.from_values(vec!["only"]).unwrap();
        assert_eq!(unit.value(), "only");
    }
}
