//! The shared randomness context.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Handle to the RNG stream shared by all units built from one context.
pub(crate) type SharedRng = Rc<RefCell<StdRng>>;

/// Randomness context every leaf generator draws from.
///
/// All units built from the same `Mock` pull from one RNG stream, so a
/// context created with [`Mock::with_seed`] makes whole generation runs
/// reproducible: materializers invoke producers in strict sequential
/// order, and each draw advances the shared stream exactly once.
///
/// The context is single-threaded (`Rc<RefCell<StdRng>>`). Units built
/// from it can be composed and cloned freely, but terminal operations are
/// meant to run on one thread; the core performs no synchronization.
///
/// # Example
///
/// ```rust
/// use mocksmith::Mock;
///
/// let mock = Mock::with_seed(42);
/// let ages = mock.int_range(18, 80).unwrap();
/// let sample = ages.list(10).value();
/// assert_eq!(sample.len(), 10);
/// assert!(sample.iter().all(|a| (18..=80).contains(a)));
/// ```
#[derive(Clone, Debug)]
pub struct Mock {
    rng: SharedRng,
}

impl Mock {
    /// Create a context seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Rc::new(RefCell::new(StdRng::from_os_rng())),
        }
    }

    /// Create a deterministic context with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rc::new(RefCell::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Handle to the shared RNG, for leaf generators.
    pub(crate) fn rng(&self) -> SharedRng {
        Rc::clone(&self.rng)
    }
}

impl Default for Mock {
    fn default() -> Self {
        Self::new()
    }
}
