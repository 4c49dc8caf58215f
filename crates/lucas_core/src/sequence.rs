//! The sequence handle: one recurrence plus its private checkpoint cache.

use num_bigint::BigInt;

use crate::checkpoint::{CheckpointCache, DEFAULT_STRIDE, MAX_CHECKPOINTS};
use crate::error::SequenceError;
use crate::named::NamedSequence;
use crate::pair::{advance, TermPair};

/// An additive two-term recurrence, identified by its seed pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recurrence {
    seeds: TermPair,
}

impl Recurrence {
    pub fn new(seeds: impl Into<TermPair>) -> Self {
        Self {
            seeds: seeds.into(),
        }
    }

    pub fn seeds(&self) -> &TermPair {
        &self.seeds
    }
}

/// A Lucas sequence: seeds `(a0, a1)` and `a[n] = a[n - 1] + a[n - 2]`.
///
/// Lookups take `&mut self` because they may append checkpoints. The cache
/// belongs to this handle alone and only ever grows; to study another
/// recurrence build a new handle.
#[derive(Debug, Clone)]
pub struct LucasSequence {
    recurrence: Recurrence,
    cache: CheckpointCache,
}

impl LucasSequence {
    /// Build a sequence from its seed pair. A `stride` below 2 is clamped to 2.
    pub fn new(seeds: impl Into<TermPair>, stride: u64) -> Self {
        let recurrence = Recurrence::new(seeds);
        let cache = CheckpointCache::new(recurrence.seeds().clone(), stride);
        Self { recurrence, cache }
    }

    /// Build a sequence with [`DEFAULT_STRIDE`].
    pub fn from_seeds(seeds: impl Into<TermPair>) -> Self {
        Self::new(seeds, DEFAULT_STRIDE)
    }

    pub fn named(name: NamedSequence, stride: Option<u64>) -> Self {
        Self::new(name.seeds(), stride.unwrap_or(DEFAULT_STRIDE))
    }

    /// Fibonacci numbers, seeds (0, 1).
    pub fn fibonacci(stride: Option<u64>) -> Self {
        Self::named(NamedSequence::Fibonacci, stride)
    }

    /// Lucas numbers, seeds (2, 1).
    pub fn lucas(stride: Option<u64>) -> Self {
        Self::named(NamedSequence::Lucas, stride)
    }

    /// Brady numbers, seeds (2308, 4261).
    pub fn brady(stride: Option<u64>) -> Self {
        Self::named(NamedSequence::Brady, stride)
    }

    pub fn recurrence(&self) -> &Recurrence {
        &self.recurrence
    }

    pub fn seeds(&self) -> &TermPair {
        self.recurrence.seeds()
    }

    pub fn stride(&self) -> u64 {
        self.cache.stride()
    }

    /// Number of checkpoints materialized so far.
    pub fn checkpoints(&self) -> usize {
        self.cache.len()
    }

    /// Term at a signed position. Negative positions are rejected before the
    /// cache is touched.
    pub fn term(&mut self, index: i64) -> Result<BigInt, SequenceError> {
        let index = u64::try_from(index).map_err(|_| SequenceError::NegativeIndex { index })?;
        self.nth(index)
    }

    /// Term at `index`, zero-based.
    ///
    /// Grows the checkpoint table up to `index / stride` if needed, then steps
    /// `index % stride` times from that checkpoint.
    pub fn nth(&mut self, index: u64) -> Result<BigInt, SequenceError> {
        let stride = self.cache.stride();
        let checkpoint = checkpoint_slot(index, stride)?;
        let offset = index % stride;
        tracing::trace!(target: "lucas", index, checkpoint, offset, "term lookup");

        let base = self
            .cache
            .ensure_checkpoint(checkpoint)
            .map_err(|_| SequenceError::CheckpointOutOfRange { index, stride })?;
        Ok(term_from_checkpoint(base, offset))
    }

    /// Successive terms starting at index 0.
    pub fn terms(&mut self) -> Terms<'_> {
        self.terms_from(0)
    }

    pub fn terms_from(&mut self, start: u64) -> Terms<'_> {
        Terms {
            sequence: self,
            next: Some(start),
        }
    }
}

/// Checkpoint index covering `index`, as a position in the cache table.
fn checkpoint_slot(index: u64, stride: u64) -> Result<usize, SequenceError> {
    usize::try_from(index / stride)
        .ok()
        .filter(|slot| *slot < MAX_CHECKPOINTS)
        .ok_or(SequenceError::CheckpointOutOfRange { index, stride })
}

/// Pure half of a lookup: the term `offset` places after `base.penultimate`.
fn term_from_checkpoint(base: &TermPair, offset: u64) -> BigInt {
    advance(base, offset).penultimate
}

/// Iterator over consecutive terms of a [`LucasSequence`].
///
/// Each step is a regular lookup, so checkpoints laid down while iterating
/// stay available to later calls on the same handle.
#[derive(Debug)]
pub struct Terms<'a> {
    sequence: &'a mut LucasSequence,
    next: Option<u64>,
}

impl Iterator for Terms<'_> {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        let index = self.next?;
        let term = self.sequence.nth(index).ok()?;
        self.next = index.checked_add(1);
        Some(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_come_back_unchanged() {
        let mut seq = LucasSequence::new((-7, 12), 5);
        assert_eq!(seq.term(0).unwrap(), BigInt::from(-7));
        assert_eq!(seq.term(1).unwrap(), BigInt::from(12));
        assert_eq!(seq.seeds(), &TermPair::new(-7, 12));
    }

    #[test]
    fn negative_index_is_rejected_without_growth() {
        let mut seq = LucasSequence::fibonacci(Some(10));
        assert_eq!(
            seq.term(-1),
            Err(SequenceError::NegativeIndex { index: -1 })
        );
        assert_eq!(
            seq.term(i64::MIN),
            Err(SequenceError::NegativeIndex { index: i64::MIN })
        );
        assert_eq!(seq.checkpoints(), 1);
    }

    #[test]
    fn stride_is_clamped_at_construction() {
        assert_eq!(LucasSequence::new((0, 1), 0).stride(), 2);
        assert_eq!(LucasSequence::new((0, 1), 1).stride(), 2);
        assert_eq!(LucasSequence::from_seeds((0, 1)).stride(), DEFAULT_STRIDE);
        assert_eq!(LucasSequence::lucas(Some(64)).stride(), 64);
    }

    #[test]
    fn lookup_grows_cache_to_covering_checkpoint() {
        let mut seq = LucasSequence::fibonacci(Some(10));
        seq.nth(5).unwrap();
        assert_eq!(seq.checkpoints(), 1);
        seq.nth(15).unwrap();
        assert_eq!(seq.checkpoints(), 2);
        seq.nth(45).unwrap();
        assert_eq!(seq.checkpoints(), 5);
        // going back never shrinks
        seq.nth(3).unwrap();
        assert_eq!(seq.checkpoints(), 5);
    }

    #[test]
    fn terms_iterator_walks_in_order() {
        let mut seq = LucasSequence::lucas(Some(3));
        let first: Vec<BigInt> = seq.terms().take(8).collect();
        let expected: Vec<BigInt> = [2, 1, 3, 4, 7, 11, 18, 29]
            .into_iter()
            .map(BigInt::from)
            .collect();
        assert_eq!(first, expected);
        assert_eq!(seq.checkpoints(), 3);

        let tail: Vec<BigInt> = seq.terms_from(30).take(2).collect();
        assert_eq!(tail, vec![BigInt::from(1860498), BigInt::from(3010349)]);
    }

    #[test]
    fn checkpoint_slot_fits_on_this_platform() {
        assert_eq!(checkpoint_slot(1999, 1000), Ok(1));
        assert_eq!(checkpoint_slot(0, 2), Ok(0));
        assert_eq!(
            checkpoint_slot(u64::MAX, 2),
            Err(SequenceError::CheckpointOutOfRange {
                index: u64::MAX,
                stride: 2
            })
        );
    }
}
