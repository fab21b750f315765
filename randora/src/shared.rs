//! Thread-local default random source.
//!
//! Callers that do not want to pass a source around borrow this one through
//! [`with_shared`]. Each thread owns an independent [`SplitMix`], seeded from
//! `RANDORA_SEED` when set and from entropy otherwise. The seed in use is
//! logged and available from [`shared_seed`] so a failing fixture can be
//! reproduced.

use std::cell::RefCell;

use randora_core::{Config, Result, SplitMix, DEFAULT_MIN_LENGTH};

struct Shared {
    config: Config,
    seed: u64,
    rng: SplitMix,
}

impl Shared {
    fn from_env() -> Self {
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, "ignoring invalid environment, using default configuration");
                Config::default()
            }
        };
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Self {
        let (rng, seed) = match config.seed {
            Some(seed) => (SplitMix::from_u64(seed), seed),
            None => SplitMix::from_entropy_seed(),
        };
        tracing::debug!(seed, "seeded shared random source");
        Shared { config, seed, rng }
    }
}

thread_local! {
    static SHARED: RefCell<Shared> = RefCell::new(Shared::from_env());
}

/// Run `f` with this thread's shared random source.
///
/// # Panics
///
/// Calling `with_shared` again from inside `f` panics, since the source is
/// already borrowed. Pass the `rng` argument down instead.
pub fn with_shared<T, F>(f: F) -> T
where
    F: FnOnce(&mut SplitMix) -> T,
{
    SHARED.with(|shared| f(&mut shared.borrow_mut().rng))
}

/// Replace this thread's shared source with one seeded from `seed`.
pub fn reseed(seed: u64) {
    SHARED.with(|shared| {
        let mut shared = shared.borrow_mut();
        shared.seed = seed;
        shared.config.seed = Some(seed);
        shared.rng = SplitMix::from_u64(seed);
    });
    tracing::debug!(seed, "reseeded shared random source");
}

/// Replace this thread's shared configuration and reseed from it.
pub fn configure(config: Config) -> Result<()> {
    config.validate()?;
    let fresh = Shared::from_config(config);
    SHARED.with(|shared| *shared.borrow_mut() = fresh);
    Ok(())
}

/// The seed this thread's shared source started from.
pub fn shared_seed() -> u64 {
    SHARED.with(|shared| shared.borrow().seed)
}

/// Draw a length from the shared configuration's bounds.
pub fn shared_length() -> usize {
    SHARED.with(|shared| {
        let shared = &mut *shared.borrow_mut();
        // Bounds were validated on the way in.
        shared
            .config
            .length(&mut shared.rng)
            .unwrap_or(DEFAULT_MIN_LENGTH)
    })
}
