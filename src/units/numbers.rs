//! Conversions between the numeric specialized units.

use super::{BoolUnit, DoubleUnit, FloatUnit, IntUnit, LongUnit};

impl IntUnit {
    /// Widen to 64-bit integers.
    pub fn to_longs(&self) -> LongUnit {
        LongUnit::from(self.map(i64::from))
    }

    /// Project to floating point.
    pub fn to_doubles(&self) -> DoubleUnit {
        DoubleUnit::from(self.map(f64::from))
    }
}

impl LongUnit {
    /// Project to floating point. Values beyond 2^53 lose precision.
    pub fn to_doubles(&self) -> DoubleUnit {
        DoubleUnit::from(self.map(|v| v as f64))
    }
}

impl DoubleUnit {
    /// Truncate toward zero into 64-bit integers.
    pub fn to_longs(&self) -> LongUnit {
        LongUnit::from(self.map(|v| v as i64))
    }
}

impl FloatUnit {
    /// Widen to 64-bit floating point.
    pub fn to_doubles(&self) -> DoubleUnit {
        DoubleUnit::from(self.map(f64::from))
    }
}

impl BoolUnit {
    /// Invert each generated boolean.
    pub fn negate(&self) -> BoolUnit {
        BoolUnit::from(self.map(|b| !b))
    }
}
