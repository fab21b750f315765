//! First-class generators.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use std::rc::Rc;

use rand::RngCore;

use crate::attempt::attempt;
use crate::chance::Probability;
use crate::error::Result;
use crate::generate::Generate;
use crate::{compose, sequence, unique};

/// A generator for values of type `T`.
///
/// Generators are explicit values that can be stored, cloned and composed.
/// They draw from whatever source is passed to [`Gen::generate`], so one
/// generator can serve both seeded tests and the shared default source.
pub struct Gen<T> {
    generator: Rc<dyn Fn(&mut dyn RngCore) -> T>,
}

impl<T> Clone for Gen<T> {
    fn clone(&self) -> Self {
        Gen {
            generator: Rc::clone(&self.generator),
        }
    }
}

impl<T> Gen<T> {
    /// Create a new generator from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut dyn RngCore) -> T + 'static,
    {
        Gen {
            generator: Rc::new(f),
        }
    }

    /// Generate one value.
    pub fn generate(&self, rng: &mut dyn RngCore) -> T {
        (self.generator)(rng)
    }

    /// Create a generator that always produces the same value.
    pub fn constant(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Gen::new(move |_rng| value.clone())
    }

    /// The default generator for a [`Generate`] type.
    pub fn of() -> Self
    where
        T: Generate + 'static,
    {
        Gen::new(|rng| T::generate(rng))
    }
}

impl<T> Gen<T>
where
    T: 'static,
{
    /// Map a function over the generated values.
    pub fn map<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        Gen::new(move |rng| f(self.generate(rng)))
    }

    /// Bind/flatmap for dependent generation.
    pub fn bind<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> Gen<U> + 'static,
        U: 'static,
    {
        Gen::new(move |rng| {
            let value = self.generate(rng);
            f(value).generate(rng)
        })
    }

    /// Wrap values in `Some` about two times in three.
    pub fn optional(self) -> Gen<Option<T>> {
        Gen::new(move |rng| compose::optional(rng, |rng| self.generate(rng)))
    }

    /// Draw until `predicate` accepts a value, with the default budget.
    pub fn attempt<P>(&self, rng: &mut dyn RngCore, predicate: P) -> Result<T>
    where
        T: Eq + Hash,
        P: FnMut(&T) -> bool,
    {
        attempt(rng, |rng| self.generate(rng), predicate)
    }

    /// Vectors of exactly `length` values.
    pub fn vec_of(self, length: usize) -> Gen<Vec<T>> {
        Gen::new(move |rng| sequence::vec_of(rng, |rng| self.generate(rng), length))
    }

    /// Sets of up to `length` distinct values.
    pub fn set_of(self, length: usize) -> Gen<HashSet<T>>
    where
        T: Eq + Hash,
    {
        Gen::new(move |rng| unique::unique_set(rng, |rng| self.generate(rng), length))
    }

    /// Ordered sets of up to `length` distinct values.
    pub fn sorted_set_of(self, length: usize) -> Gen<BTreeSet<T>>
    where
        T: Ord + Hash,
    {
        Gen::new(move |rng| unique::unique_sorted_set(rng, |rng| self.generate(rng), length))
    }

    /// Maps of up to `length` entries keyed by this generator.
    pub fn map_of<V: 'static>(self, values: Gen<V>, length: usize) -> Gen<HashMap<T, V>>
    where
        T: Eq + Hash,
    {
        Gen::new(move |rng| {
            unique::unique_map(
                rng,
                |rng| self.generate(rng),
                |rng| values.generate(rng),
                length,
            )
        })
    }

    /// Ordered maps of up to `length` entries keyed by this generator.
    pub fn sorted_map_of<V: 'static>(self, values: Gen<V>, length: usize) -> Gen<BTreeMap<T, V>>
    where
        T: Ord + Hash,
    {
        Gen::new(move |rng| {
            unique::unique_sorted_map(
                rng,
                |rng| self.generate(rng),
                |rng| values.generate(rng),
                length,
            )
        })
    }
}

impl<T: crate::scalar::RangeValue + Copy + 'static> Gen<T> {
    /// Values in the half-open range `[low, high)`.
    ///
    /// An empty or unsamplable range is reported when the generator is built.
    pub fn range(low: T, high: T) -> Result<Self> {
        crate::scalar::check_range(&low, &high)?;
        Ok(Gen::new(move |rng| rand::Rng::gen_range(rng, low..high)))
    }
}

/// Primitive generators.
impl Gen<bool> {
    /// Generate a random boolean.
    pub fn bool() -> Self {
        Gen::of()
    }

    /// `true` with the given probability, a percentage or a fraction.
    pub fn chance<P: Probability + 'static>(probability: P) -> Result<Self> {
        probability.check()?;
        Ok(Gen::new(move |rng| probability.sample(rng)))
    }
}

impl Gen<&'static str> {
    /// Words from the embedded word list.
    pub fn word() -> Self {
        Gen::new(|rng| crate::scalar::word(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RandoraError, SplitMix};
    use rand::SeedableRng;

    #[test]
    fn constant_set_has_one_element() {
        let mut rng = SplitMix::seed_from_u64(1);
        let set = Gen::constant(9u8).set_of(5).generate(&mut rng);
        assert_eq!(set, HashSet::from([9]));
    }

    #[test]
    fn map_and_bind_compose() {
        let mut rng = SplitMix::seed_from_u64(1);
        let gen = Gen::range(1usize, 5)
            .unwrap()
            .bind(|n| Gen::constant('z').vec_of(n))
            .map(|chars| chars.into_iter().collect::<String>());
        for _ in 0..20 {
            let text = gen.generate(&mut rng);
            assert!((1..5).contains(&text.len()));
            assert!(text.chars().all(|c| c == 'z'));
        }
    }

    #[test]
    fn empty_range_is_rejected_up_front() {
        assert!(matches!(
            Gen::range(3i32, 3),
            Err(RandoraError::OutOfRange { .. })
        ));
        assert!(Gen::chance(120).is_err());
    }

    #[test]
    fn unsamplable_float_range_is_rejected_up_front() {
        assert!(matches!(
            Gen::range(f64::MIN, f64::MAX),
            Err(RandoraError::OutOfRange { .. })
        ));
        assert!(Gen::range(0.0f32, f32::INFINITY).is_err());

        let mut rng = SplitMix::seed_from_u64(2);
        let unit = Gen::range(0.0f64, 1.0).unwrap();
        for _ in 0..100 {
            assert!((0.0..1.0).contains(&unit.generate(&mut rng)));
        }
    }

    #[test]
    fn chance_accepts_fractions() {
        let mut rng = SplitMix::seed_from_u64(3);
        assert!(Gen::chance(1.0).unwrap().generate(&mut rng));
        assert!(!Gen::chance(0.0).unwrap().generate(&mut rng));
        assert!(Gen::chance(1.5).is_err());
        assert!(Gen::chance(f64::NAN).is_err());
    }

    #[test]
    fn attempt_reports_exhaustion() {
        let mut rng = SplitMix::seed_from_u64(1);
        let gen = Gen::bool();
        assert!(gen.attempt(&mut rng, |_| false).is_err());
        assert!(gen.attempt(&mut rng, |b| *b).unwrap());
    }

    #[test]
    fn sorted_map_of_words() {
        let mut rng = SplitMix::seed_from_u64(1);
        let map = Gen::word()
            .sorted_map_of(Gen::<u32>::of(), 12)
            .generate(&mut rng);
        assert!(!map.is_empty() && map.len() <= 12);
        let keys: Vec<_> = map.keys().collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn clones_share_the_generator() {
        let mut left = SplitMix::seed_from_u64(5);
        let mut right = SplitMix::seed_from_u64(5);
        let gen = Gen::<u64>::of().optional();
        let copy = gen.clone();
        for _ in 0..10 {
            assert_eq!(gen.generate(&mut left), copy.generate(&mut right));
        }
    }
}
