//! Sequence helpers: fixed-length vectors, picking and shuffling.

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use crate::error::{RandoraError, Result};

/// `length` values from `generator`, duplicates allowed.
pub fn vec_of<R, T, G>(rng: &mut R, mut generator: G, length: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    G: FnMut(&mut R) -> T,
{
    (0..length).map(|_| generator(rng)).collect()
}

/// A uniformly chosen element of `items`.
pub fn pick<'a, R, T>(rng: &mut R, items: &'a [T]) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng).ok_or(RandoraError::EmptySequence)
}

/// A uniformly chosen element of `items`, or `None` when it is empty.
pub fn pick_or_none<'a, R, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// A uniformly chosen element of any iterator.
pub fn pick_from<R, I>(rng: &mut R, items: I) -> Option<I::Item>
where
    R: Rng + ?Sized,
    I: IntoIterator,
{
    items.into_iter().choose(rng)
}

/// The same elements in a uniformly random order.
pub fn shuffle<R, T>(rng: &mut R, mut items: Vec<T>) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    items
}
