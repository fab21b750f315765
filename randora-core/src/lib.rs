//! Core functionality for Randora fixture generation.
//!
//! The centre of this crate is bounded rejection sampling ([`attempt`]) and
//! the uniqueness-constrained collection builders layered on it
//! ([`unique_set`], [`unique_map`] and their ordered variants). Scalar,
//! sequence and type-directed generators sit around that core.
//!
//! Every entry point borrows its random source explicitly; nothing in this
//! crate reaches for global state.

pub mod attempt;
pub mod chance;
pub mod compose;
pub mod corpus;
pub mod data;
pub mod error;
pub mod gen;
pub mod generate;
pub mod scalar;
pub mod sequence;
pub mod unique;

// Generated code and callers without a direct dependency reach `rand` here.
pub use rand;

// Big integer fixtures are `num_bigint::BigInt`.
pub use num_bigint;

// Re-export the main types
pub use attempt::*;
pub use chance::*;
pub use compose::*;
pub use data::*;
pub use error::*;
pub use gen::*;
pub use generate::*;
pub use scalar::*;
pub use sequence::*;
pub use unique::*;
