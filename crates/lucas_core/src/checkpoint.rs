//! Append-only table of checkpoint pairs.
//!
//! Entry `j` holds `(term[j * stride], term[j * stride + 1])`. Entry 0 is the
//! seed pair. Entries are only ever appended; nothing is overwritten or
//! evicted for the lifetime of the cache.
//!
//! Growth and reads are split: [`CheckpointCache::ensure_checkpoint`] is the
//! only method that mutates, everything else borrows immutably.

use crate::error::SequenceError;
use crate::pair::{advance, TermPair};

/// Stride used when the caller does not pick one.
pub const DEFAULT_STRIDE: u64 = 1000;

/// Smallest usable stride. Anything lower is clamped up to this.
pub const MIN_STRIDE: u64 = 2;

/// Most checkpoints a table can address before `Vec` capacity overflows.
pub const MAX_CHECKPOINTS: usize = isize::MAX as usize / std::mem::size_of::<TermPair>();

/// Clamp a requested stride to [`MIN_STRIDE`].
pub fn clamp_stride(stride: u64) -> u64 {
    stride.max(MIN_STRIDE)
}

#[derive(Debug, Clone)]
pub struct CheckpointCache {
    stride: u64,
    entries: Vec<TermPair>,
}

impl CheckpointCache {
    /// Create a cache holding only the seed pair. `stride` is clamped.
    pub fn new(seeds: TermPair, stride: u64) -> Self {
        Self {
            stride: clamp_stride(stride),
            entries: vec![seeds],
        }
    }

    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Number of materialized checkpoints (at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read a checkpoint that has already been materialized.
    pub fn checkpoint(&self, checkpoint: usize) -> Option<&TermPair> {
        self.entries.get(checkpoint)
    }

    /// Grow the table until `checkpoint` exists, then return it.
    ///
    /// Each appended entry costs `stride` steps from its predecessor. When the
    /// entry already exists nothing is computed. A table that cannot be grown
    /// that far yields `CheckpointOutOfRange` and is left as it was.
    pub fn ensure_checkpoint(&mut self, checkpoint: usize) -> Result<&TermPair, SequenceError> {
        let current = self.entries.len();
        if checkpoint >= current {
            let out_of_range = SequenceError::CheckpointOutOfRange {
                index: (checkpoint as u64).saturating_mul(self.stride),
                stride: self.stride,
            };
            if checkpoint >= MAX_CHECKPOINTS {
                return Err(out_of_range);
            }
            tracing::debug!(
                target: "lucas",
                from = current,
                to = checkpoint + 1,
                stride = self.stride,
                "extending checkpoint cache"
            );
            self.entries
                .try_reserve(checkpoint + 1 - current)
                .map_err(|_| out_of_range)?;
            for j in current..=checkpoint {
                let next = advance(&self.entries[j - 1], self.stride);
                self.entries.push(next);
            }
        }
        Ok(&self.entries[checkpoint])
    }
}
