//! Core data types: the deterministic random source and configuration.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore, SeedableRng};

use crate::error::{RandoraError, Result};

/// Inclusive lower bound of the default random length.
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Exclusive upper bound of the default random length.
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Environment variable holding the seed for the shared source.
pub const SEED_ENV: &str = "RANDORA_SEED";

/// Environment variable overriding the default minimum length.
pub const MIN_LENGTH_ENV: &str = "RANDORA_MIN_LENGTH";

/// Environment variable overriding the default maximum length.
pub const MAX_LENGTH_ENV: &str = "RANDORA_MAX_LENGTH";

/// Splittable SplitMix64 random source.
///
/// Given the same seed and the same sequence of calls, a `SplitMix`
/// produces the same values, which makes generated fixtures
/// reproducible. It is not suitable for cryptographic use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix {
    state: u64,
    gamma: u64,
}

impl SplitMix {
    /// Create a new source from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        SplitMix { state, gamma }
    }

    /// Create a source seeded from the thread-local entropy generator.
    pub fn from_entropy_seed() -> (Self, u64) {
        let seed: u64 = rand::thread_rng().gen();
        (Self::from_u64(seed), seed)
    }

    /// Split off an independent source, advancing this one.
    pub fn split(&mut self) -> Self {
        self.state = self.state.wrapping_add(self.gamma);
        let output = splitmix64_mix(self.state);
        SplitMix {
            state: output,
            gamma: mix_gamma(output),
        }
    }
}

impl RngCore for SplitMix {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(self.gamma);
        splitmix64_mix(self.state)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_u64(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_u64(state)
    }
}

impl fmt::Display for SplitMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SplitMix({}, {})", self.state, self.gamma)
    }
}

/// Configuration for the shared source and default lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for the shared source. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Inclusive lower bound for random lengths.
    pub min_length: usize,

    /// Exclusive upper bound for random lengths.
    pub max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Config {
    /// Read configuration from `RANDORA_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        if let Some(seed) = env_value::<u64>(SEED_ENV)? {
            config.seed = Some(seed);
        }
        if let Some(min_length) = env_value::<usize>(MIN_LENGTH_ENV)? {
            config.min_length = min_length;
        }
        if let Some(max_length) = env_value::<usize>(MAX_LENGTH_ENV)? {
            config.max_length = max_length;
        }
        config.validate()?;
        Ok(config)
    }

    /// Use the given seed for the shared source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use the given half-open range for random lengths.
    pub fn with_length(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Check that the length bounds describe a non-empty range.
    pub fn validate(&self) -> Result<()> {
        if self.min_length >= self.max_length {
            return Err(RandoraError::InvalidConfig {
                message: format!(
                    "min_length ({}) must be less than max_length ({})",
                    self.min_length, self.max_length
                ),
            });
        }
        Ok(())
    }

    /// Draw a length in `[min_length, max_length)`.
    pub fn length<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        crate::scalar::length_in(rng, self.min_length, self.max_length)
    }
}

fn env_value<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| RandoraError::InvalidConfig {
                message: format!("{name} has an unparsable value {raw:?}"),
            }),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(RandoraError::InvalidConfig {
            message: format!("{name} is not valid unicode"),
        }),
    }
}

/// SplitMix64 mixing function.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

fn mix_gamma(z: u64) -> u64 {
    // Odd gamma gives the full period.
    (splitmix64_mix(z) | 1).wrapping_mul(0x9e3779b97f4a7c15)
}
