//! Uniqueness-constrained collection builders.
//!
//! Every builder fills one slot at a time by asking the rejection sampler
//! for a candidate that is not yet in the accumulator, with a fresh
//! [`AttemptLedger`](crate::AttemptLedger) per slot. When the sampler gives
//! up, the builder stops and returns what it has: a generator whose domain
//! is smaller than `length` (a `bool` generator asked for ten values, say)
//! yields a shorter collection rather than an error.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use rand::Rng;

use crate::attempt::attempt;

/// An accumulator of pairwise-distinct values.
pub trait UniqueSink<T> {
    /// Whether `value` is already present.
    fn holds(&self, value: &T) -> bool;

    /// Add a value known not to be present.
    fn accept(&mut self, value: T);
}

impl<T: Eq + Hash, S: BuildHasher> UniqueSink<T> for HashSet<T, S> {
    fn holds(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn accept(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T: Ord> UniqueSink<T> for BTreeSet<T> {
    fn holds(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn accept(&mut self, value: T) {
        self.insert(value);
    }
}

/// Insertion-ordered; membership is a linear scan.
impl<T: PartialEq> UniqueSink<T> for Vec<T> {
    fn holds(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn accept(&mut self, value: T) {
        self.push(value);
    }
}

/// An accumulator of entries with pairwise-distinct keys.
pub trait UniqueKeySink<K, V> {
    /// Whether `key` is already present.
    fn holds_key(&self, key: &K) -> bool;

    /// Add an entry whose key is known not to be present.
    fn accept_entry(&mut self, key: K, value: V);
}

impl<K: Eq + Hash, V, S: BuildHasher> UniqueKeySink<K, V> for HashMap<K, V, S> {
    fn holds_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn accept_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> UniqueKeySink<K, V> for BTreeMap<K, V> {
    fn holds_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn accept_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: PartialEq, V> UniqueKeySink<K, V> for Vec<(K, V)> {
    fn holds_key(&self, key: &K) -> bool {
        self.iter().any(|(existing, _)| existing == key)
    }

    fn accept_entry(&mut self, key: K, value: V) {
        self.push((key, value));
    }
}

/// Fill `sink` with up to `length` new distinct values from `generator`.
///
/// Stops early, without error, once the sampler exhausts its budget for
/// a slot. Values already in `sink` count as taken.
pub fn fill_unique<R, T, G, A>(rng: &mut R, mut sink: A, mut generator: G, length: usize) -> A
where
    R: Rng + ?Sized,
    T: Eq + Hash,
    G: FnMut(&mut R) -> T,
    A: UniqueSink<T>,
{
    for slot in 0..length {
        match attempt(rng, &mut generator, |candidate| !sink.holds(candidate)) {
            Ok(value) => sink.accept(value),
            Err(error) => {
                tracing::debug!(
                    requested = length,
                    produced = slot,
                    %error,
                    "value domain exhausted, returning partial collection"
                );
                break;
            }
        }
    }
    sink
}

/// Fill `sink` with up to `length` entries whose keys are new and distinct.
///
/// Only keys go through the sampler. One value is drawn per accepted key
/// and is never tested or retried.
pub fn fill_unique_keys<R, K, V, KG, VG, A>(
    rng: &mut R,
    mut sink: A,
    mut key_generator: KG,
    mut value_generator: VG,
    length: usize,
) -> A
where
    R: Rng + ?Sized,
    K: Eq + Hash,
    KG: FnMut(&mut R) -> K,
    VG: FnMut(&mut R) -> V,
    A: UniqueKeySink<K, V>,
{
    for slot in 0..length {
        match attempt(rng, &mut key_generator, |candidate| !sink.holds_key(candidate)) {
            Ok(key) => {
                let value = value_generator(rng);
                sink.accept_entry(key, value);
            }
            Err(error) => {
                tracing::debug!(
                    requested = length,
                    produced = slot,
                    %error,
                    "key domain exhausted, returning partial map"
                );
                break;
            }
        }
    }
    sink
}

/// Build a set of up to `length` distinct values.
///
/// ```
/// use rand::{Rng, SeedableRng};
/// use randora_core::{unique_set, SplitMix};
///
/// let mut rng = SplitMix::seed_from_u64(1);
/// let coins = unique_set(&mut rng, |r| r.gen::<bool>(), 10);
/// assert!(coins.len() <= 2);
/// ```
pub fn unique_set<R, T, G>(rng: &mut R, generator: G, length: usize) -> HashSet<T>
where
    R: Rng + ?Sized,
    T: Eq + Hash,
    G: FnMut(&mut R) -> T,
{
    fill_unique(rng, HashSet::with_capacity(length), generator, length)
}

/// Build a set of up to `length` distinct values, iterated in ascending order.
pub fn unique_sorted_set<R, T, G>(rng: &mut R, generator: G, length: usize) -> BTreeSet<T>
where
    R: Rng + ?Sized,
    T: Ord + Hash,
    G: FnMut(&mut R) -> T,
{
    fill_unique(rng, BTreeSet::new(), generator, length)
}

/// Build a vector of up to `length` distinct values in generation order.
pub fn unique_vec<R, T, G>(rng: &mut R, generator: G, length: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Eq + Hash,
    G: FnMut(&mut R) -> T,
{
    fill_unique(rng, Vec::with_capacity(length), generator, length)
}

/// Collect up to `length` distinct values, in generation order, into any
/// container. `Box<[T]>` and `Arc<[T]>` give frozen snapshots.
pub fn unique_into<C, R, T, G>(rng: &mut R, generator: G, length: usize) -> C
where
    C: FromIterator<T>,
    R: Rng + ?Sized,
    T: Eq + Hash,
    G: FnMut(&mut R) -> T,
{
    unique_vec(rng, generator, length).into_iter().collect()
}

/// Build up to `length` distinct values sorted by `compare`.
///
/// The comparator only orders the result; distinctness is decided by `Eq`.
pub fn unique_sorted_vec_by<R, T, G, F>(
    rng: &mut R,
    generator: G,
    length: usize,
    compare: F,
) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Eq + Hash,
    G: FnMut(&mut R) -> T,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut values = unique_vec(rng, generator, length);
    values.sort_by(compare);
    values
}

/// Build a map of up to `length` entries with distinct keys.
pub fn unique_map<R, K, V, KG, VG>(
    rng: &mut R,
    key_generator: KG,
    value_generator: VG,
    length: usize,
) -> HashMap<K, V>
where
    R: Rng + ?Sized,
    K: Eq + Hash,
    KG: FnMut(&mut R) -> K,
    VG: FnMut(&mut R) -> V,
{
    fill_unique_keys(
        rng,
        HashMap::with_capacity(length),
        key_generator,
        value_generator,
        length,
    )
}

/// Build a map of up to `length` entries, iterated in ascending key order.
pub fn unique_sorted_map<R, K, V, KG, VG>(
    rng: &mut R,
    key_generator: KG,
    value_generator: VG,
    length: usize,
) -> BTreeMap<K, V>
where
    R: Rng + ?Sized,
    K: Ord + Hash,
    KG: FnMut(&mut R) -> K,
    VG: FnMut(&mut R) -> V,
{
    fill_unique_keys(rng, BTreeMap::new(), key_generator, value_generator, length)
}

/// Build up to `length` entries with distinct keys in generation order.
pub fn unique_entries<R, K, V, KG, VG>(
    rng: &mut R,
    key_generator: KG,
    value_generator: VG,
    length: usize,
) -> Vec<(K, V)>
where
    R: Rng + ?Sized,
    K: Eq + Hash,
    KG: FnMut(&mut R) -> K,
    VG: FnMut(&mut R) -> V,
{
    fill_unique_keys(
        rng,
        Vec::with_capacity(length),
        key_generator,
        value_generator,
        length,
    )
}

/// Build up to `length` entries with distinct keys, sorted by `compare`
/// applied to the keys.
pub fn unique_sorted_entries_by<R, K, V, KG, VG, F>(
    rng: &mut R,
    key_generator: KG,
    value_generator: VG,
    length: usize,
    mut compare: F,
) -> Vec<(K, V)>
where
    R: Rng + ?Sized,
    K: Eq + Hash,
    KG: FnMut(&mut R) -> K,
    VG: FnMut(&mut R) -> V,
    F: FnMut(&K, &K) -> Ordering,
{
    let mut entries = unique_entries(rng, key_generator, value_generator, length);
    entries.sort_by(|(left, _), (right, _)| compare(left, right));
    entries
}
