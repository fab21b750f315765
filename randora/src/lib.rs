//! Randora: randomized value and collection generators for test fixtures.
//!
//! This is the main entry point for the library. Everything in
//! `randora_core` is re-exported here, together with a thread-local
//! default random source for callers that do not want to thread one
//! through their code.
//!
//! ```
//! use randora::*;
//!
//! let mut rng = SplitMix::from_u64(42);
//! let ids = unique_sorted_set(&mut rng, |r| in_range(r, 0u32, 1_000).unwrap_or(0), 5);
//! assert!(ids.len() <= 5);
//!
//! let flags = with_shared(|rng| unique_set(rng, |r| value::<bool, _>(r), 10));
//! assert!(flags.len() <= 2);
//! ```

pub use randora_core::*;

// Re-export derive macros when available
#[cfg(feature = "derive")]
pub use randora_derive::*;

pub mod shared;

pub use shared::{configure, reseed, shared_length, shared_seed, with_shared};
