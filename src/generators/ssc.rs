//! US social security number leaf generator.
//!
//! Format `AAA-GG-SSSS` with the published validity rules: area 001-899
//! excluding 666, group and serial non-zero, and the two well-known
//! invalid constants never produced.

use rand::Rng;

use crate::mock::Mock;
use crate::units::StringUnit;

const INVALID_SSCS: [&str; 2] = ["078-05-1120", "219-09-9999"];

impl Mock {
    /// Valid-looking US social security numbers.
    pub fn sscs(&self) -> StringUnit {
        let rng = self.rng();
        StringUnit::new(move || {
            let mut rng = rng.borrow_mut();
            loop {
                let area: u32 = rng.random_range(1..=899);
                if area == 666 {
                    continue;
                }
                let group: u32 = rng.random_range(1..=99);
                let serial: u32 = rng.random_range(1..=9999);

                let ssc = format!("{area:03}-{group:02}-{serial:04}");
                if !INVALID_SSCS.contains(&ssc.as_str()) {
                    return ssc;
                }
            }
        })
    }
}
