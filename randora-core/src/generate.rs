//! Type-directed generation.
//!
//! [`Generate`] gives every supported type a default generator so fixtures
//! can be built from types alone. `#[derive(Generate)]` from the
//! `randora` crate extends this to user structs and enums.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use std::time::Duration;

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use rand::Rng;
use uuid::Uuid;

use crate::{compose, scalar, sequence, unique};

/// Types that can produce a random value of themselves.
pub trait Generate: Sized {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! generate_standard {
    ($($ty:ty),*) => {
        $(
            impl Generate for $ty {
                fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.gen()
                }
            }
        )*
    };
}

generate_standard!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

/// Space-separated words.
impl Generate for String {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        scalar::words_string(rng)
    }
}

impl Generate for Duration {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        scalar::duration(rng)
    }
}

impl Generate for DateTime<Utc> {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        scalar::date_time(rng)
    }
}

impl Generate for Uuid {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        scalar::uuid(rng)
    }
}

impl Generate for BigInt {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        scalar::big_integer(rng)
    }
}

impl<T: Generate> Generate for Option<T> {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        compose::optional(rng, T::generate)
    }
}

impl<T: Generate> Generate for Vec<T> {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length = scalar::length(rng);
        sequence::vec_of(rng, T::generate, length)
    }
}

impl<T: Generate, const N: usize> Generate for [T; N] {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        std::array::from_fn(|_| T::generate(rng))
    }
}

impl<T: Generate> Generate for Box<T> {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Box::new(T::generate(rng))
    }
}

impl<T: Generate + Eq + Hash> Generate for HashSet<T> {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length = scalar::length(rng);
        unique::unique_set(rng, T::generate, length)
    }
}

impl<T: Generate + Ord + Hash> Generate for BTreeSet<T> {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length = scalar::length(rng);
        unique::unique_sorted_set(rng, T::generate, length)
    }
}

impl<K: Generate + Eq + Hash, V: Generate> Generate for HashMap<K, V> {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length = scalar::length(rng);
        unique::unique_map(rng, K::generate, V::generate, length)
    }
}

impl<K: Generate + Ord + Hash, V: Generate> Generate for BTreeMap<K, V> {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length = scalar::length(rng);
        unique::unique_sorted_map(rng, K::generate, V::generate, length)
    }
}

impl Generate for () {
    fn generate<R: Rng + ?Sized>(_rng: &mut R) -> Self {}
}

macro_rules! generate_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: Generate),+> Generate for ($($ty,)+) {
            fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
                ($($ty::generate(rng),)+)
            }
        }
    };
}

generate_tuple!(A);
generate_tuple!(A, B);
generate_tuple!(A, B, C);
generate_tuple!(A, B, C, D);
generate_tuple!(A, B, C, D, E);
generate_tuple!(A, B, C, D, E, F);
generate_tuple!(A, B, C, D, E, F, G);
generate_tuple!(A, B, C, D, E, F, G, H);

/// Shorthand for `T::generate(rng)`.
pub fn any<T: Generate, R: Rng + ?Sized>(rng: &mut R) -> T {
    T::generate(rng)
}
