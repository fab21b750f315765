//! Data-shaping combinators: optional values and tuples of generators.

use rand::Rng;

use crate::chance::Probability;

/// Percentage of [`optional`] draws that produce a value.
pub const PRESENCE_PERCENT: i32 = 66;

/// `Some(generator(rng))` with probability [`PRESENCE_PERCENT`], else `None`.
///
/// The presence draw happens first; `generator` only runs when it succeeds.
pub fn optional<R, T, G>(rng: &mut R, generator: G) -> Option<T>
where
    R: Rng + ?Sized,
    G: FnOnce(&mut R) -> T,
{
    if PRESENCE_PERCENT.sample(rng) {
        Some(generator(rng))
    } else {
        None
    }
}

/// A tuple of generators that together produce a tuple of values.
///
/// Implemented for tuples of one to eight `FnMut(&mut R) -> T` generators.
/// Elements are generated left to right.
pub trait GeneratorTuple<R: ?Sized> {
    type Output;

    fn generate_all(&mut self, rng: &mut R) -> Self::Output;
}

macro_rules! generator_tuple {
    ($(($gen:ident, $out:ident, $idx:tt)),+) => {
        impl<R, $($gen, $out),+> GeneratorTuple<R> for ($($gen,)+)
        where
            R: Rng + ?Sized,
            $($gen: FnMut(&mut R) -> $out),+
        {
            type Output = ($($out,)+);

            fn generate_all(&mut self, rng: &mut R) -> Self::Output {
                ($((self.$idx)(rng),)+)
            }
        }
    };
}

generator_tuple!((G1, T1, 0));
generator_tuple!((G1, T1, 0), (G2, T2, 1));
generator_tuple!((G1, T1, 0), (G2, T2, 1), (G3, T3, 2));
generator_tuple!((G1, T1, 0), (G2, T2, 1), (G3, T3, 2), (G4, T4, 3));
generator_tuple!((G1, T1, 0), (G2, T2, 1), (G3, T3, 2), (G4, T4, 3), (G5, T5, 4));
generator_tuple!(
    (G1, T1, 0),
    (G2, T2, 1),
    (G3, T3, 2),
    (G4, T4, 3),
    (G5, T5, 4),
    (G6, T6, 5)
);
generator_tuple!(
    (G1, T1, 0),
    (G2, T2, 1),
    (G3, T3, 2),
    (G4, T4, 3),
    (G5, T5, 4),
    (G6, T6, 5),
    (G7, T7, 6)
);
generator_tuple!(
    (G1, T1, 0),
    (G2, T2, 1),
    (G3, T3, 2),
    (G4, T4, 3),
    (G5, T5, 4),
    (G6, T6, 5),
    (G7, T7, 6),
    (G8, T8, 7)
);

/// Run each generator in `generators` once and return the tuple of results.
///
/// ```
/// use rand::{Rng, SeedableRng};
/// use randora_core::{tuple, SplitMix};
///
/// let mut rng = SplitMix::seed_from_u64(2);
/// let (flag, small, label) = tuple(
///     &mut rng,
///     (|r: &mut SplitMix| r.gen::<bool>(), |r: &mut SplitMix| r.gen_range(0..10u8), |_: &mut SplitMix| "x"),
/// );
/// assert!(small < 10);
/// assert_eq!(label, "x");
/// let _ = flag;
/// ```
pub fn tuple<R, G>(rng: &mut R, mut generators: G) -> G::Output
where
    R: Rng + ?Sized,
    G: GeneratorTuple<R>,
{
    generators.generate_all(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplitMix;
    use rand::SeedableRng;
    use std::cell::RefCell;

    #[test]
    fn optional_presence_is_roughly_two_thirds() {
        let mut rng = SplitMix::seed_from_u64(10);
        let present = (0..10_000)
            .filter(|_| optional(&mut rng, |r| r.gen::<u8>()).is_some())
            .count();
        assert!((6_000..7_200).contains(&present), "present = {present}");
    }

    #[test]
    fn absent_optional_skips_the_generator() {
        let mut rng = SplitMix::seed_from_u64(10);
        let mut calls = 0;
        let mut absent = 0;
        for _ in 0..200 {
            if optional(&mut rng, |_| calls += 1).is_none() {
                absent += 1;
            }
        }
        assert_eq!(calls + absent, 200);
    }

    #[test]
    fn eight_element_tuple_runs_left_to_right() {
        let mut rng = SplitMix::seed_from_u64(10);
        let order = RefCell::new(Vec::new());
        let step = |n: u8| {
            order.borrow_mut().push(n);
            n
        };
        let value = tuple(
            &mut rng,
            (
                |_: &mut SplitMix| step(1),
                |_: &mut SplitMix| u16::from(step(2)),
                |_: &mut SplitMix| u32::from(step(3)),
                |_: &mut SplitMix| u64::from(step(4)),
                |_: &mut SplitMix| i16::from(step(5)),
                |_: &mut SplitMix| i32::from(step(6)),
                |_: &mut SplitMix| i64::from(step(7)),
                |_: &mut SplitMix| char::from(b'0' + step(8)),
            ),
        );
        assert_eq!(value, (1, 2, 3, 4, 5, 6, 7, '8'));
        assert_eq!(order.into_inner(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn same_seed_same_tuple() {
        let build = || {
            let mut rng = SplitMix::seed_from_u64(77);
            tuple(
                &mut rng,
                (
                    |r: &mut SplitMix| r.gen::<u32>(),
                    |r: &mut SplitMix| r.gen::<char>(),
                ),
            )
        };
        assert_eq!(build(), build());
    }
}
