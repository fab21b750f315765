//! Error types for Randora generators.

use thiserror::Error;

/// Main error type for Randora generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandoraError {
    /// A caller-supplied numeric parameter is outside its documented domain.
    #[error("Argument out of range: {parameter}: {message}")]
    OutOfRange {
        parameter: &'static str,
        message: String,
    },

    /// The rejection sampler rejected the same candidate too many times.
    #[error("No value was found that matches the condition after {attempts} attempts.")]
    MaxAttemptsExceeded { attempts: usize },

    /// A value was requested from an empty sequence.
    #[error("Sequence contains no elements")]
    EmptySequence,

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl RandoraError {
    pub(crate) fn out_of_range(parameter: &'static str, message: impl Into<String>) -> Self {
        RandoraError::OutOfRange {
            parameter,
            message: message.into(),
        }
    }

    /// Whether this error means a generator's domain was exhausted.
    ///
    /// The unique collection builders treat this as "stop early" rather
    /// than as a failure.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, RandoraError::MaxAttemptsExceeded { .. })
    }
}

/// Result type for Randora operations.
pub type Result<T> = std::result::Result<T, RandoraError>;
