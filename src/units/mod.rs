//! Type-specialized generator units.
//!
//! Each wrapper derefs to [`MockUnit`], so the full combinator algebra is
//! available on every specialized unit for free; the wrappers only add
//! operations that make sense for their scalar type.

use std::ops::Deref;

use crate::unit::MockUnit;

mod numbers;
mod strings;

macro_rules! specialized_unit {
    ($(#[$doc:meta])* $name:ident, $scalar:ty) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name(MockUnit<$scalar>);

        impl $name {
            /// Wrap a producer of the scalar type.
            pub fn new(producer: impl Fn() -> $scalar + 'static) -> Self {
                Self(MockUnit::new(producer))
            }

            /// The underlying general-purpose unit.
            pub fn unit(&self) -> MockUnit<$scalar> {
                self.0.clone()
            }
        }

        impl Deref for $name {
            type Target = MockUnit<$scalar>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<MockUnit<$scalar>> for $name {
            fn from(unit: MockUnit<$scalar>) -> Self {
                Self(unit)
            }
        }
    };
}

specialized_unit!(
    /// `String`-specialized generator unit.
    StringUnit,
    String
);

specialized_unit!(
    /// `i32`-specialized generator unit.
    IntUnit,
    i32
);

specialized_unit!(
    /// `i64`-specialized generator unit.
    LongUnit,
    i64
);

specialized_unit!(
    /// `f64`-specialized generator unit.
    DoubleUnit,
    f64
);

specialized_unit!(
    /// `f32`-specialized generator unit.
    FloatUnit,
    f32
);

specialized_unit!(
    /// `bool`-specialized generator unit.
    BoolUnit,
    bool
);
