//! Error types for lucas_core crate.

use thiserror::Error;

/// Errors raised by term lookups.
///
/// Lookups never fail for arithmetic reasons: terms are unbounded integers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A term was requested at a negative position.
    #[error("invalid index {index}: term indices must be non-negative")]
    NegativeIndex { index: i64 },

    /// The checkpoint covering `index` cannot be addressed on this platform.
    #[error("index {index} is beyond the addressable checkpoint range for stride {stride}")]
    CheckpointOutOfRange { index: u64, stride: u64 },
}

/// Name that does not match any [`crate::NamedSequence`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sequence '{0}' (expected fibonacci, lucas or brady)")]
pub struct ParseSequenceNameError(pub String);
