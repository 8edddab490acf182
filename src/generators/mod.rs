//! Leaf generators: concrete value sources built on the shared [`Mock`]
//! context.
//!
//! Every leaf holds a clone of the context and closes over its RNG handle,
//! so units built from the same `Mock` draw from one stream. The core only
//! requires that each leaf's producer is repeatable and never blocks; the
//! leaves here all satisfy that by construction (in-memory arithmetic and
//! formatting over RNG draws).
//!
//! [`Mock`]: crate::mock::Mock

pub mod bools;
pub mod choice;
pub mod hash;
pub mod numeric;
pub mod ssc;
pub mod text;
pub mod timestamp;
pub mod uuid;

pub use hash::Hashes;
pub use text::StringKind;
