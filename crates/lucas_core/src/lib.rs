//! # lucas_core
//!
//! Generator for additive two-term integer recurrences ("Lucas sequences"):
//! every term past the first two is the sum of the two before it.
//!
//! A [`LucasSequence`] answers "what is term k?" for any k with unbounded
//! integer precision. Instead of storing every term it keeps a sparse,
//! append-only table of checkpoint pairs, one every `stride` terms, and walks
//! forward from the nearest checkpoint.
//!
//! ```
//! use lucas_core::LucasSequence;
//!
//! let mut fib = LucasSequence::fibonacci(None);
//! assert_eq!(fib.nth(10).unwrap().to_string(), "55");
//! assert_eq!(fib.nth(100).unwrap().to_string(), "354224848179261915075");
//! ```

pub mod checkpoint;
pub mod error;
pub mod named;
pub mod pair;
pub mod sequence;

pub use checkpoint::{CheckpointCache, DEFAULT_STRIDE, MAX_CHECKPOINTS, MIN_STRIDE};
pub use error::{ParseSequenceNameError, SequenceError};
pub use named::NamedSequence;
pub use pair::{advance, TermPair};
pub use sequence::{LucasSequence, Recurrence, Terms};
