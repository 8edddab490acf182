//! Numeric leaf generators.

use rand::Rng;

use crate::error::MockError;
use crate::mock::Mock;
use crate::units::{DoubleUnit, FloatUnit, IntUnit, LongUnit};

impl Mock {
    /// Uniform `i32` over the full range.
    pub fn ints(&self) -> IntUnit {
        let rng = self.rng();
        IntUnit::new(move || rng.borrow_mut().random())
    }

    /// Uniform `i32` in `[min, max]`.
    pub fn int_range(&self, min: i32, max: i32) -> Result<IntUnit, MockError> {
        if min > max {
            return Err(MockError::invalid(
                "min",
                format!("range is inverted: {min} > {max}"),
            ));
        }
        let rng = self.rng();
        Ok(IntUnit::new(move || {
            rng.borrow_mut().random_range(min..=max)
        }))
    }

    /// Uniform `i32` in `[0, bound)`.
    pub fn int_bound(&self, bound: i32) -> Result<IntUnit, MockError> {
        if bound <= 0 {
            return Err(MockError::invalid(
                "bound",
                format!("must be positive, got {bound}"),
            ));
        }
        let rng = self.rng();
        Ok(IntUnit::new(move || rng.borrow_mut().random_range(0..bound)))
    }

    /// Uniform `i64` over the full range.
    pub fn longs(&self) -> LongUnit {
        let rng = self.rng();
        LongUnit::new(move || rng.borrow_mut().random())
    }

    /// Uniform `i64` in `[min, max]`.
    pub fn long_range(&self, min: i64, max: i64) -> Result<LongUnit, MockError> {
        if min > max {
            return Err(MockError::invalid(
                "min",
                format!("range is inverted: {min} > {max}"),
            ));
        }
        let rng = self.rng();
        Ok(LongUnit::new(move || {
            rng.borrow_mut().random_range(min..=max)
        }))
    }

    /// Uniform `f64` in the unit interval `[0, 1)`.
    pub fn doubles(&self) -> DoubleUnit {
        let rng = self.rng();
        DoubleUnit::new(move || rng.borrow_mut().random())
    }

    /// Uniform `f64` in `[min, max)`. Bounds must be finite with
    /// `min < max`.
    pub fn double_range(&self, min: f64, max: f64) -> Result<DoubleUnit, MockError> {
        if !min.is_finite() {
            return Err(MockError::invalid(
                "min",
                format!("must be finite, got {min}"),
            ));
        }
        if !max.is_finite() {
            return Err(MockError::invalid(
                "max",
                format!("must be finite, got {max}"),
            ));
        }
        if min >= max {
            return Err(MockError::invalid(
                "max",
                format!("must exceed min ({min}), got {max}"),
            ));
        }
        let rng = self.rng();
        Ok(DoubleUnit::new(move || {
            rng.borrow_mut().random_range(min..max)
        }))
    }

    /// Uniform `f32` in the unit interval `[0, 1)`.
    pub fn floats(&self) -> FloatUnit {
        let rng = self.rng();
        FloatUnit::new(move || rng.borrow_mut().random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_range_is_inclusive() {
        let mock = Mock::with_seed(42);
        let unit = mock.int_range(10, 20).unwrap();

        for value in unit.values().take(200) {
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_int_range_single_point() {
        let mock = Mock::with_seed(42);
        let unit = mock.int_range(5, 5).unwrap();
        assert_eq!(unit.value(), 5);
    }

    #[test]
    fn test_int_range_inverted_fails_eagerly() {
        let mock = Mock::with_seed(42);
        let err = mock.int_range(20, 10).unwrap_err();
        assert!(matches!(
            err,
            MockError::InvalidArgument { param: "min", .. }
        ));
    }

    #[test]
    fn test_int_bound() {
        let mock = Mock::with_seed(42);
        let unit = mock.int_bound(3).unwrap();

        for value in unit.values().take(100) {
            assert!((0..3).contains(&value));
        }

        assert!(mock.int_bound(0).is_err());
        assert!(mock.int_bound(-1).is_err());
    }

    #[test]
    fn test_long_range() {
        let mock = Mock::with_seed(42);
        let unit = mock.long_range(-1_000_000_000_000, 1_000_000_000_000).unwrap();

        for value in unit.values().take(100) {
            assert!((-1_000_000_000_000..=1_000_000_000_000).contains(&value));
        }
    }

    #[test]
    fn test_doubles_unit_interval() {
        let mock = Mock::with_seed(42);

        for value in mock.doubles().values().take(100) {
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_double_range_rejects_bad_bounds() {
        let mock = Mock::with_seed(42);

        assert!(mock.double_range(1.0, 1.0).is_err());
        assert!(mock.double_range(2.0, 1.0).is_err());
        assert!(mock.double_range(f64::NAN, 1.0).is_err());
        assert!(mock.double_range(0.0, f64::INFINITY).is_err());

        let unit = mock.double_range(-1.5, 1.5).unwrap();
        for value in unit.values().take(100) {
            assert!((-1.5..1.5).contains(&value));
        }
    }

    #[test]
    fn test_double_range_blames_the_offending_bound() {
        let mock = Mock::with_seed(42);

        let err = mock.double_range(f64::NAN, 1.0).unwrap_err();
        assert!(matches!(
            err,
            MockError::InvalidArgument { param: "min", .. }
        ));

        let err = mock.double_range(0.0, f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            MockError::InvalidArgument { param: "max", .. }
        ));

        let err = mock.double_range(2.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            MockError::InvalidArgument { param: "max", .. }
        ));
    }

    #[test]
    fn test_floats_unit_interval() {
        let mock = Mock::with_seed(42);

        for value in mock.floats().values().take(100) {
            assert!((0.0..1.0).contains(&value));
        }
    }
}
