//! Scalar value generators.
//!
//! Each function draws one value from the given source. Functions that
//! take bounds validate them before drawing and fail with `OutOfRange`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use num_bigint::{BigInt, Sign};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use uuid::Uuid;

use crate::corpus;
use crate::data::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use crate::error::{RandoraError, Result};

/// Upper bound (exclusive) for [`duration`]: 365 days.
pub const MAX_DURATION: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Upper bound (exclusive) for [`date_time`]: 2050-12-31T00:00:00Z.
pub const MAX_TIMESTAMP: i64 = 2_556_057_600;

/// Any value with a uniform `Standard` distribution.
pub fn value<T, R>(rng: &mut R) -> T
where
    R: Rng + ?Sized,
    Standard: Distribution<T>,
{
    rng.gen()
}

/// Types [`in_range`] can draw from.
pub trait RangeValue: SampleUniform + PartialOrd + std::fmt::Debug {
    /// Whether `[low, high)` can be sampled, given `low < high`.
    fn samplable(_low: &Self, _high: &Self) -> bool {
        true
    }
}

macro_rules! range_value {
    ($($ty:ty),*) => {
        $(impl RangeValue for $ty {})*
    };
}

range_value!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_range_value {
    ($($ty:ty),*) => {
        $(
            impl RangeValue for $ty {
                // Infinite bounds or spans overflow the uniform sampler.
                fn samplable(low: &Self, high: &Self) -> bool {
                    low.is_finite() && high.is_finite() && (high - low).is_finite()
                }
            }
        )*
    };
}

float_range_value!(f32, f64);

/// Check that `[low, high)` is a non-empty range the sampler accepts.
pub(crate) fn check_range<T: RangeValue>(low: &T, high: &T) -> Result<()> {
    if !(low < high) {
        return Err(RandoraError::out_of_range(
            "range",
            format!("low ({low:?}) must be less than high ({high:?})"),
        ));
    }
    if !T::samplable(low, high) {
        return Err(RandoraError::out_of_range(
            "range",
            format!("[{low:?}, {high:?}) must be finite"),
        ));
    }
    Ok(())
}

/// A value in the half-open range `[low, high)`.
pub fn in_range<T, R>(rng: &mut R, low: T, high: T) -> Result<T>
where
    R: Rng + ?Sized,
    T: RangeValue,
{
    check_range(&low, &high)?;
    Ok(rng.gen_range(low..high))
}

/// Signed integer types with sign-restricted generators.
pub trait SignedInteger: SampleUniform + Copy + PartialOrd {
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! signed_integer {
    ($($ty:ty),*) => {
        $(
            impl SignedInteger for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

signed_integer!(i8, i16, i32, i64, i128, isize);

/// A value in `1..=MAX`.
pub fn positive<T: SignedInteger, R: Rng + ?Sized>(rng: &mut R) -> T {
    rng.gen_range(T::ONE..=T::MAX)
}

/// A value in `MIN..0`.
pub fn negative<T: SignedInteger, R: Rng + ?Sized>(rng: &mut R) -> T {
    rng.gen_range(T::MIN..T::ZERO)
}

/// A value in `MIN..=0`.
pub fn non_positive<T: SignedInteger, R: Rng + ?Sized>(rng: &mut R) -> T {
    rng.gen_range(T::MIN..=T::ZERO)
}

/// A value in `0..=MAX`.
pub fn non_negative<T: SignedInteger, R: Rng + ?Sized>(rng: &mut R) -> T {
    rng.gen_range(T::ZERO..=T::MAX)
}

/// An arbitrary-precision integer built from 1 to 16 random bytes,
/// read as little-endian two's complement.
pub fn big_integer<R: Rng + ?Sized>(rng: &mut R) -> BigInt {
    let length = rng.gen_range(1..17);
    BigInt::from_signed_bytes_le(&bytes(rng, length))
}

/// A big integer greater than zero. A zero draw becomes one.
pub fn positive_big_integer<R: Rng + ?Sized>(rng: &mut R) -> BigInt {
    let magnitude = BigInt::from(big_integer(rng).magnitude().clone());
    if magnitude.sign() == Sign::NoSign {
        BigInt::from(1)
    } else {
        magnitude
    }
}

/// A big integer less than zero. A zero draw becomes minus one.
pub fn negative_big_integer<R: Rng + ?Sized>(rng: &mut R) -> BigInt {
    -positive_big_integer(rng)
}

/// A big integer at most zero.
pub fn non_positive_big_integer<R: Rng + ?Sized>(rng: &mut R) -> BigInt {
    -non_negative_big_integer(rng)
}

/// A big integer at least zero.
pub fn non_negative_big_integer<R: Rng + ?Sized>(rng: &mut R) -> BigInt {
    BigInt::from(big_integer(rng).magnitude().clone())
}

/// A length in the default range `1..10`.
pub fn length<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(DEFAULT_MIN_LENGTH..DEFAULT_MAX_LENGTH)
}

/// A length in `[min, max)`.
pub fn length_in<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> Result<usize> {
    in_range(rng, min, max)
}

/// `length` random bytes.
pub fn bytes<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<u8> {
    let mut buffer = vec![0u8; length];
    rng.fill_bytes(&mut buffer);
    buffer
}

/// Lowercase hex encoding of `length` random bytes (`2 * length` chars).
pub fn hex<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    ::hex::encode(bytes(rng, length))
}

/// One word from the embedded word list.
pub fn word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let words = corpus::words();
    words[rng.gen_range(0..words.len())]
}

/// One to nine words separated by single spaces.
pub fn words_string<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = length(rng);
    let mut out = String::new();
    for _ in 0..count {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word(rng));
    }
    out
}

/// A duration below [`MAX_DURATION`].
pub fn duration<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_nanos(rng.gen_range(0..MAX_DURATION.as_nanos() as u64))
}

/// A whole-millisecond duration in `[min_millis, max_millis)`.
pub fn duration_between_millis<R: Rng + ?Sized>(
    rng: &mut R,
    min_millis: u64,
    max_millis: u64,
) -> Result<Duration> {
    in_range(rng, min_millis, max_millis).map(Duration::from_millis)
}

/// A UTC timestamp between the Unix epoch and [`MAX_TIMESTAMP`], truncated
/// to whole seconds.
pub fn date_time<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    let seconds = rng.gen_range(0..MAX_TIMESTAMP);
    DateTime::from_timestamp(seconds, 0).unwrap_or_default()
}

/// A version 4 UUID.
pub fn uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut raw = [0u8; 16];
    rng.fill_bytes(&mut raw);
    uuid::Builder::from_random_bytes(raw).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplitMix;
    use rand::{RngCore, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn sign_restricted_integers() {
        let mut rng = SplitMix::seed_from_u64(31);
        for _ in 0..500 {
            assert!(positive::<i32, _>(&mut rng) > 0);
            assert!(negative::<i64, _>(&mut rng) < 0);
            assert!(non_positive::<i8, _>(&mut rng) <= 0);
            assert!(non_negative::<i16, _>(&mut rng) >= 0);
        }
    }

    #[test]
    fn in_range_rejects_empty_ranges() {
        let mut rng = SplitMix::seed_from_u64(31);
        assert!(matches!(
            in_range(&mut rng, 5, 5),
            Err(RandoraError::OutOfRange { .. })
        ));
        assert!(in_range(&mut rng, 1.0, 0.5).is_err());
        let value = in_range(&mut rng, -3i64, 3).unwrap();
        assert!((-3..3).contains(&value));
    }

    #[test]
    fn in_range_rejects_unsamplable_float_ranges() {
        let mut rng = SplitMix::seed_from_u64(31);
        let mut untouched = SplitMix::seed_from_u64(31);
        for (low, high) in [
            (f64::MIN, f64::MAX),
            (0.0, f64::INFINITY),
            (f64::NEG_INFINITY, 0.0),
            (f64::NAN, 1.0),
        ] {
            assert!(matches!(
                in_range(&mut rng, low, high),
                Err(RandoraError::OutOfRange { .. })
            ));
        }
        assert!(in_range(&mut rng, f32::MIN, f32::MAX).is_err());
        assert_eq!(rng.next_u64(), untouched.next_u64());

        let value = in_range(&mut rng, -1.5e300, 1.5e300).unwrap();
        assert!((-1.5e300..1.5e300).contains(&value));
    }

    #[test]
    fn big_integers_span_up_to_sixteen_bytes() {
        let mut rng = SplitMix::seed_from_u64(31);
        let mut signs = HashSet::new();
        for _ in 0..500 {
            let value = big_integer(&mut rng);
            assert!(value.bits() <= 128);
            signs.insert(value.sign());
        }
        assert!(signs.contains(&Sign::Plus) && signs.contains(&Sign::Minus));
    }

    #[test]
    fn sign_restricted_big_integers() {
        let mut rng = SplitMix::seed_from_u64(32);
        let zero = BigInt::from(0);
        for _ in 0..500 {
            assert!(positive_big_integer(&mut rng) > zero);
            assert!(negative_big_integer(&mut rng) < zero);
            assert!(non_positive_big_integer(&mut rng) <= zero);
            assert!(non_negative_big_integer(&mut rng) >= zero);
        }
    }

    #[test]
    fn big_integers_repeat_for_a_seed() {
        let draw = || {
            let mut rng = SplitMix::seed_from_u64(33);
            (0..10).map(|_| big_integer(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn default_length_range() {
        let mut rng = SplitMix::seed_from_u64(31);
        for _ in 0..500 {
            assert!((1..10).contains(&length(&mut rng)));
        }
        assert!(length_in(&mut rng, 4, 2).is_err());
    }

    #[test]
    fn hex_has_two_digits_per_byte() {
        let mut rng = SplitMix::seed_from_u64(31);
        let text = hex(&mut rng, 12);
        assert_eq!(text.len(), 24);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hex(&mut rng, 0), "");
    }

    #[test]
    fn words_string_is_space_separated_words() {
        let mut rng = SplitMix::seed_from_u64(31);
        for _ in 0..50 {
            let text = words_string(&mut rng);
            let parts: Vec<_> = text.split(' ').collect();
            assert!((1..10).contains(&parts.len()));
            assert!(parts
                .iter()
                .all(|part| corpus::words().iter().any(|word| word == part)));
        }
    }

    #[test]
    fn durations_respect_bounds() {
        let mut rng = SplitMix::seed_from_u64(31);
        for _ in 0..200 {
            assert!(duration(&mut rng) < MAX_DURATION);
            let bounded = duration_between_millis(&mut rng, 10, 20).unwrap();
            assert!(bounded >= Duration::from_millis(10) && bounded < Duration::from_millis(20));
        }
        assert!(duration_between_millis(&mut rng, 20, 10).is_err());
    }

    #[test]
    fn date_times_are_whole_seconds_in_range() {
        let mut rng = SplitMix::seed_from_u64(31);
        for _ in 0..200 {
            let stamp = date_time(&mut rng);
            assert_eq!(stamp.timestamp_subsec_nanos(), 0);
            assert!((0..MAX_TIMESTAMP).contains(&stamp.timestamp()));
        }
    }

    #[test]
    fn uuids_are_version_four() {
        let mut rng = SplitMix::seed_from_u64(31);
        let id = uuid(&mut rng);
        assert_eq!(id.get_version_num(), 4);
        assert_ne!(id, uuid(&mut rng));
    }
}
