//! Composable mock-data generators for tests, demos, and seed data.
//!
//! This crate provides [`MockUnit<T>`], a lazily-evaluated, repeatable
//! source of values, together with an algebra of combinators: transform
//! values with `map`, project to type-specialized units, and materialize
//! into lists, sets, maps, and fixed-size arrays over caller-chosen
//! container types. Concrete value sources (numbers, strings, UUIDs,
//! hashes, timestamps, domain codes) are leaf generators built on a
//! shared, optionally seeded randomness context.
//!
//! # Architecture
//!
//! ```text
//! Mock (seeded StdRng, shared)
//!   │
//!   ├── leaf generators: ints(), strings(), uuids(), hashes(), sscs(), ...
//!   │        │
//!   │        ▼
//!   │   MockUnit<T> ── map / map_to_* ──► MockUnit<R> (lazy, new unit)
//!   │        │
//!   │        ├── list / set / collection / array / map_keys / map_vals
//!   │        │        (lazy materializers over Default + Extend)
//!   │        │
//!   │        └── value / consume / values() / persist_to_path
//!   │                 (terminals: generation happens here)
//! ```
//!
//! Nothing is generated until a terminal operation runs; combinators only
//! build new units and never mutate the receiver. Materializers invoke
//! the producer in strict sequential order, so a seeded [`Mock`] makes
//! entire runs reproducible.
//!
//! # Example
//!
//! ```rust
//! use mocksmith::Mock;
//!
//! let mock = Mock::with_seed(42);
//!
//! let emails = mock
//!     .strings_sized(8)
//!     .lower_case()
//!     .append("@example.com")
//!     .list(3)
//!     .value();
//!
//! assert_eq!(emails.len(), 3);
//! assert!(emails.iter().all(|e| e.ends_with("@example.com")));
//!
//! // Units are reusable: materialize again, get fresh draws.
//! let ids = mock.uuids();
//! let batch = ids.list(2).value();
//! assert_ne!(batch[0], batch[1]);
//! ```
//!
//! # Threading
//!
//! A [`Mock`] context and the units built from it are single-threaded by
//! design; see [`Mock`] for details.

pub mod error;
pub mod generators;
pub mod mock;
pub mod unit;
pub mod units;

// Re-exports for convenience
pub use error::MockError;
pub use generators::{Hashes, StringKind};
pub use mock::Mock;
pub use unit::{MockUnit, Values};
pub use units::{BoolUnit, DoubleUnit, FloatUnit, IntUnit, LongUnit, StringUnit};
