//! The generator unit and its combinator algebra.
//!
//! [`MockUnit<T>`] is a lazily-evaluated, repeatable source of values of
//! type `T`. Chaining combinators (`map`, the container materializers)
//! never generate anything; they build a new unit whose producer pulls
//! from the original on demand. Generation happens only when a terminal
//! operation (`value`, `consume`, `persist_to_path`, or iterating
//! [`Values`]) runs, and then runs to completion on the calling thread.
//!
//! Container materialization is polymorphic over the target container
//! through the `Default + Extend` capability pair: any container that can
//! be instantiated empty and accept insertions works, built-in or not.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::path::Path;
use std::rc::Rc;

use serde::Serialize;

use crate::error::MockError;
use crate::units::{DoubleUnit, IntUnit, LongUnit, StringUnit};

/// A lazily-evaluated, repeatable source of values of type `T`.
///
/// A unit wraps a single zero-argument producer. The producer may draw
/// randomness on every invocation, so repeated terminal calls can (and
/// usually do) return different values; there is no memoization. Units
/// are immutable after construction: every combinator returns a fresh
/// unit and leaves the receiver fully usable, which is what makes units
/// safe to reuse and compose.
pub struct MockUnit<T> {
    producer: Rc<dyn Fn() -> T>,
}

impl<T> std::fmt::Debug for MockUnit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockUnit").finish_non_exhaustive()
    }
}

impl<T> Clone for MockUnit<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T: 'static> MockUnit<T> {
    /// Wrap a producer.
    pub fn new(producer: impl Fn() -> T + 'static) -> Self {
        Self {
            producer: Rc::new(producer),
        }
    }

    fn producer(&self) -> Rc<dyn Fn() -> T> {
        Rc::clone(&self.producer)
    }

    /// Invoke the producer once and return the generated value.
    pub fn value(&self) -> T {
        (self.producer)()
    }

    /// Generate one value and run it through `transform`.
    pub fn value_via<R>(&self, transform: impl FnOnce(T) -> R) -> R {
        transform(self.value())
    }

    /// Generate one value and hand it to a side-effecting sink.
    pub fn consume(&self, sink: impl FnOnce(T)) {
        sink(self.value());
    }

    /// Lazily transform generated values with `transform`.
    pub fn map<R: 'static>(&self, transform: impl Fn(T) -> R + 'static) -> MockUnit<R> {
        let producer = self.producer();
        MockUnit::new(move || transform(producer()))
    }

    /// [`map`](Self::map) returning the `i32`-specialized unit.
    pub fn map_to_int(&self, transform: impl Fn(T) -> i32 + 'static) -> IntUnit {
        IntUnit::from(self.map(transform))
    }

    /// [`map`](Self::map) returning the `i64`-specialized unit.
    pub fn map_to_long(&self, transform: impl Fn(T) -> i64 + 'static) -> LongUnit {
        LongUnit::from(self.map(transform))
    }

    /// [`map`](Self::map) returning the `f64`-specialized unit.
    pub fn map_to_double(&self, transform: impl Fn(T) -> f64 + 'static) -> DoubleUnit {
        DoubleUnit::from(self.map(transform))
    }

    /// [`map`](Self::map) returning the string-specialized unit.
    pub fn map_to_string(&self, transform: impl Fn(T) -> String + 'static) -> StringUnit {
        StringUnit::from(self.map(transform))
    }

    /// An unbounded iterator of generated values.
    ///
    /// Each `next` invokes the producer (and advances any shared RNG)
    /// exactly once. The iterator never ends and is not restartable;
    /// bound consumption with `take`.
    pub fn values(&self) -> Values<T> {
        Values {
            producer: self.producer(),
        }
    }

    /// Lazily materialize `size` values into any container supporting
    /// "instantiate empty + insert" (`Default + Extend`).
    ///
    /// On each terminal invocation a fresh container is built and the
    /// producer is invoked exactly `size` times, in order.
    pub fn collection<C>(&self, size: usize) -> MockUnit<C>
    where
        C: Default + Extend<T> + 'static,
    {
        let producer = self.producer();
        MockUnit::new(move || {
            let mut out = C::default();
            out.extend((0..size).map(|_| producer()));
            out
        })
    }

    /// Lazily materialize `size` values into a `Vec`.
    pub fn list(&self, size: usize) -> MockUnit<Vec<T>> {
        self.collection(size)
    }

    /// Lazily materialize `size` draws into a `HashSet`.
    ///
    /// The producer still runs exactly `size` times; duplicates collapse
    /// under the set's own uniqueness semantics, so the result may hold
    /// fewer than `size` elements.
    pub fn set(&self, size: usize) -> MockUnit<HashSet<T>>
    where
        T: Eq + Hash,
    {
        self.collection(size)
    }

    /// Lazily materialize a fixed-size array, filled in index order.
    pub fn array<const N: usize>(&self) -> MockUnit<[T; N]> {
        let producer = self.producer();
        MockUnit::new(move || std::array::from_fn(|_| producer()))
    }

    /// Lazily build a map with `size` generated keys and values from this
    /// unit. Keys are drawn from `keys` before the paired value on every
    /// iteration; duplicate keys collapse with last write winning.
    pub fn map_keys<M, K>(&self, size: usize, keys: impl Fn() -> K + 'static) -> MockUnit<M>
    where
        M: Default + Extend<(K, T)> + 'static,
        K: 'static,
    {
        let producer = self.producer();
        MockUnit::new(move || {
            let mut out = M::default();
            out.extend((0..size).map(|_| (keys(), producer())));
            out
        })
    }

    /// [`map_keys`](Self::map_keys) with the default `HashMap` container.
    pub fn hash_map_keys<K>(
        &self,
        size: usize,
        keys: impl Fn() -> K + 'static,
    ) -> MockUnit<HashMap<K, T>>
    where
        K: Eq + Hash + 'static,
    {
        self.map_keys(size, keys)
    }

    /// Lazily build a map with one entry per key from `keys`, each value
    /// freshly generated. Entries are inserted in the key source's order;
    /// duplicate keys keep the value generated on their last occurrence.
    pub fn map_given_keys<M, K, I>(&self, keys: I) -> MockUnit<M>
    where
        M: Default + Extend<(K, T)> + 'static,
        K: 'static,
        I: IntoIterator<Item = K> + Clone + 'static,
    {
        let producer = self.producer();
        MockUnit::new(move || {
            let mut out = M::default();
            out.extend(keys.clone().into_iter().map(|key| (key, producer())));
            out
        })
    }

    /// [`map_given_keys`](Self::map_given_keys) with the default `HashMap`.
    pub fn hash_map_given_keys<K, I>(&self, keys: I) -> MockUnit<HashMap<K, T>>
    where
        K: Eq + Hash + 'static,
        I: IntoIterator<Item = K> + Clone + 'static,
    {
        self.map_given_keys(keys)
    }

    /// Mirror image of [`map_keys`](Self::map_keys): keys come from this
    /// unit, values from `vals`. The key is drawn before the paired value
    /// on every iteration.
    pub fn map_vals<M, V>(&self, size: usize, vals: impl Fn() -> V + 'static) -> MockUnit<M>
    where
        M: Default + Extend<(T, V)> + 'static,
        V: 'static,
    {
        let producer = self.producer();
        MockUnit::new(move || {
            let mut out = M::default();
            out.extend((0..size).map(|_| (producer(), vals())));
            out
        })
    }

    /// [`map_vals`](Self::map_vals) with the default `HashMap` container.
    pub fn hash_map_vals<V>(
        &self,
        size: usize,
        vals: impl Fn() -> V + 'static,
    ) -> MockUnit<HashMap<T, V>>
    where
        T: Eq + Hash,
        V: 'static,
    {
        self.map_vals(size, vals)
    }

    /// Mirror image of [`map_given_keys`](Self::map_given_keys): one entry
    /// per value from `values`, each key freshly generated from this unit.
    pub fn map_given_vals<M, V, I>(&self, values: I) -> MockUnit<M>
    where
        M: Default + Extend<(T, V)> + 'static,
        V: 'static,
        I: IntoIterator<Item = V> + Clone + 'static,
    {
        let producer = self.producer();
        MockUnit::new(move || {
            let mut out = M::default();
            out.extend(values.clone().into_iter().map(|value| (producer(), value)));
            out
        })
    }

    /// [`map_given_vals`](Self::map_given_vals) with the default `HashMap`.
    pub fn hash_map_given_vals<V, I>(&self, values: I) -> MockUnit<HashMap<T, V>>
    where
        T: Eq + Hash,
        V: 'static,
        I: IntoIterator<Item = V> + Clone + 'static,
    {
        self.map_given_vals(values)
    }
}

impl<T: Display + 'static> MockUnit<T> {
    /// Generate once and return the value's string form.
    pub fn value_string(&self) -> String {
        self.value().to_string()
    }

    /// Lazily project each generated value to its string form.
    pub fn as_string_unit(&self) -> StringUnit {
        StringUnit::from(self.map(|value| value.to_string()))
    }
}

impl<T: 'static> MockUnit<Option<T>> {
    /// Generate once, substituting `fallback` when the source yields `None`.
    pub fn value_or(&self, fallback: T) -> T {
        self.value().unwrap_or(fallback)
    }
}

impl<T: Display + 'static> MockUnit<Option<T>> {
    /// Generate once and return the string form of the value, or the
    /// empty string when the source yields `None`.
    pub fn value_string(&self) -> String {
        self.value_string_or("")
    }

    /// Generate once and return the string form of the value, or `if_none`
    /// when the source yields `None`.
    pub fn value_string_or(&self, if_none: &str) -> String {
        match self.value() {
            Some(value) => value.to_string(),
            None => if_none.to_string(),
        }
    }
}

impl<T: Serialize + 'static> MockUnit<T> {
    /// Generate one value and write its JSON serialization to `path`.
    ///
    /// Terminal with an external effect: the producer runs exactly once,
    /// then the destination is created (or truncated) and written.
    pub fn persist_to_path(&self, path: impl AsRef<Path>) -> Result<(), MockError> {
        let path = path.as_ref();
        let value = self.value();
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &value)?;
        tracing::debug!(path = %path.display(), "persisted generated value");
        Ok(())
    }
}

/// Unbounded iterator of generated values, returned by
/// [`MockUnit::values`].
pub struct Values<T> {
    producer: Rc<dyn Fn() -> T>,
}

impl<T> Iterator for Values<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some((self.producer)())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
