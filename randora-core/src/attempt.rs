//! Bounded rejection sampling.
//!
//! [`attempt`] keeps drawing candidates until one satisfies a predicate.
//! Termination is enforced by an [`AttemptLedger`] that counts how many
//! times each *distinct* candidate has been rejected; the sampler gives
//! up once any single candidate reaches the failure budget.
//!
//! The budget caps repetition of one value, not the total number of
//! draws. A generator that keeps producing new values which all fail the
//! predicate is not stopped by the ledger and can loop indefinitely.
//! Pair unbounded-domain generators with predicates that are satisfiable.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use crate::error::{RandoraError, Result};

/// Default failure budget for the rejection sampler.
pub const ATTEMPT_COUNT: usize = 100;

/// Identity of a rejected candidate in the ledger.
///
/// Absent candidates share the single `None` key, distinct from every
/// real value, so repeated absences accumulate on one counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key<T> {
    None,
    Some(T),
}

impl<T> From<Option<T>> for Key<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Key::Some(value),
            None => Key::None,
        }
    }
}

/// Per-candidate rejection counters for one sampling sequence.
#[derive(Debug, Clone)]
pub struct AttemptLedger<T> {
    budget: usize,
    counts: HashMap<Key<T>, usize>,
}

impl<T: Eq + Hash> AttemptLedger<T> {
    /// Create an empty ledger. A zero budget behaves like a budget of one.
    pub fn new(budget: usize) -> Self {
        AttemptLedger {
            budget: budget.max(1),
            counts: HashMap::new(),
        }
    }

    /// Record one rejection of `key` and return its updated count.
    ///
    /// Fails with `MaxAttemptsExceeded` once the count reaches the budget.
    pub fn reject(&mut self, key: Key<T>) -> Result<usize> {
        let known = self.counts.len();
        let count = match self.counts.entry(key) {
            Entry::Occupied(entry) => {
                let count = entry.into_mut();
                *count += 1;
                *count
            }
            Entry::Vacant(entry) => {
                tracing::trace!(distinct = known + 1, "new rejected candidate");
                *entry.insert(1)
            }
        };

        if count >= self.budget {
            return Err(RandoraError::MaxAttemptsExceeded {
                attempts: self.budget,
            });
        }
        Ok(count)
    }

    /// How many times `key` has been rejected so far.
    pub fn rejections(&self, key: &Key<T>) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct candidates rejected so far.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn budget(&self) -> usize {
        self.budget
    }
}

/// Draw from `generator` until `predicate` accepts a value.
///
/// Uses the default budget of [`ATTEMPT_COUNT`] rejections per distinct
/// candidate. See the module documentation for the termination caveat.
///
/// ```
/// use rand::{Rng, SeedableRng};
/// use randora_core::{attempt, SplitMix};
///
/// let mut rng = SplitMix::seed_from_u64(4);
/// let even = attempt(&mut rng, |r| r.gen::<u32>(), |v| v % 2 == 0).unwrap();
/// assert_eq!(even % 2, 0);
/// ```
pub fn attempt<R, T, G, P>(rng: &mut R, generator: G, predicate: P) -> Result<T>
where
    R: Rng + ?Sized,
    T: Eq + Hash,
    G: FnMut(&mut R) -> T,
    P: FnMut(&T) -> bool,
{
    attempt_with_budget(rng, ATTEMPT_COUNT, generator, predicate)
}

/// [`attempt`] with an explicit failure budget.
pub fn attempt_with_budget<R, T, G, P>(
    rng: &mut R,
    budget: usize,
    generator: G,
    predicate: P,
) -> Result<T>
where
    R: Rng + ?Sized,
    T: Eq + Hash,
    G: FnMut(&mut R) -> T,
    P: FnMut(&T) -> bool,
{
    sample(rng, budget, generator, predicate, Key::Some)
}

/// [`attempt`] for generators that may produce no value.
///
/// Every rejected `None` counts against the shared [`Key::None`] entry.
pub fn attempt_optional<R, T, G, P>(rng: &mut R, generator: G, predicate: P) -> Result<Option<T>>
where
    R: Rng + ?Sized,
    T: Eq + Hash,
    G: FnMut(&mut R) -> Option<T>,
    P: FnMut(&Option<T>) -> bool,
{
    attempt_optional_with_budget(rng, ATTEMPT_COUNT, generator, predicate)
}

/// [`attempt_optional`] with an explicit failure budget.
pub fn attempt_optional_with_budget<R, T, G, P>(
    rng: &mut R,
    budget: usize,
    generator: G,
    predicate: P,
) -> Result<Option<T>>
where
    R: Rng + ?Sized,
    T: Eq + Hash,
    G: FnMut(&mut R) -> Option<T>,
    P: FnMut(&Option<T>) -> bool,
{
    sample(rng, budget, generator, predicate, Key::from)
}

fn sample<R, T, K, G, P, F>(
    rng: &mut R,
    budget: usize,
    mut generator: G,
    mut predicate: P,
    mut key_of: F,
) -> Result<T>
where
    R: Rng + ?Sized,
    K: Eq + Hash,
    G: FnMut(&mut R) -> T,
    P: FnMut(&T) -> bool,
    F: FnMut(T) -> Key<K>,
{
    let mut ledger = AttemptLedger::new(budget);
    loop {
        let candidate = generator(rng);
        if predicate(&candidate) {
            return Ok(candidate);
        }

        if let Err(error) = ledger.reject(key_of(candidate)) {
            tracing::debug!(
                budget = ledger.budget(),
                distinct = ledger.distinct(),
                "attempt budget exhausted"
            );
            return Err(error);
        }
    }
}
