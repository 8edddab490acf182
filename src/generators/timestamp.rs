//! Timestamp leaf generator.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::MockError;
use crate::mock::Mock;
use crate::unit::MockUnit;

impl Mock {
    /// Uniform timestamps (second resolution) in `[start, end]`.
    pub fn timestamps_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<MockUnit<DateTime<Utc>>, MockError> {
        let (lo, hi) = (start.timestamp(), end.timestamp());
        if lo > hi {
            return Err(MockError::invalid(
                "end",
                format!("must not precede start ({start}), got {end}"),
            ));
        }
        let rng = self.rng();
        Ok(MockUnit::new(move || {
            let seconds = rng.borrow_mut().random_range(lo..=hi);
            DateTime::from_timestamp(seconds, 0).unwrap_or(start)
        }))
    }
}
