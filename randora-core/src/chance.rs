//! Probability gate.

use rand::Rng;

use crate::error::{RandoraError, Result};

/// A probability accepted by [`chance`].
///
/// Implemented for `i32` (a percentage in `0..=100`) and `f64`
/// (a fraction in `0.0..=1.0`).
pub trait Probability: Copy {
    /// Check the value is inside its domain.
    fn check(self) -> Result<()>;

    /// Draw one sample and compare it against the threshold.
    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> bool;
}

impl Probability for i32 {
    fn check(self) -> Result<()> {
        if (0..=100).contains(&self) {
            Ok(())
        } else {
            Err(RandoraError::out_of_range(
                "probability",
                format!("percentage must be between 0 and 100, got {self}"),
            ))
        }
    }

    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        rng.gen_range(0..100) < self
    }
}

impl Probability for f64 {
    fn check(self) -> Result<()> {
        // NaN fails `contains`.
        if (0.0..=1.0).contains(&self) {
            Ok(())
        } else {
            Err(RandoraError::out_of_range(
                "probability",
                format!("fraction must be between 0 and 1, got {self}"),
            ))
        }
    }

    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        rng.gen::<f64>() < self
    }
}

/// Return `true` with the given probability.
///
/// The probability is validated before anything is drawn, so an
/// `OutOfRange` error leaves `rng` untouched. Otherwise exactly one
/// sample is consumed.
///
/// ```
/// use rand::SeedableRng;
/// use randora_core::{chance, SplitMix};
///
/// let mut rng = SplitMix::seed_from_u64(1);
/// assert!(chance(&mut rng, 100).unwrap());
/// assert!(!chance(&mut rng, 0.0).unwrap());
/// assert!(chance(&mut rng, 101).is_err());
/// ```
pub fn chance<R, P>(rng: &mut R, probability: P) -> Result<bool>
where
    R: Rng + ?Sized,
    P: Probability,
{
    probability.check()?;
    Ok(probability.sample(rng))
}
