//! Consecutive-term pairs and the stepping primitive every lookup is built on.

use num_bigint::BigInt;

/// Two consecutive terms `(term[n], term[n + 1])` of a recurrence.
///
/// Used for the seed pair (n = 0) and for every checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermPair {
    pub penultimate: BigInt,
    pub ultimate: BigInt,
}

impl TermPair {
    pub fn new(penultimate: impl Into<BigInt>, ultimate: impl Into<BigInt>) -> Self {
        Self {
            penultimate: penultimate.into(),
            ultimate: ultimate.into(),
        }
    }

    pub fn into_tuple(self) -> (BigInt, BigInt) {
        (self.penultimate, self.ultimate)
    }
}

impl<A: Into<BigInt>, B: Into<BigInt>> From<(A, B)> for TermPair {
    fn from((penultimate, ultimate): (A, B)) -> Self {
        Self::new(penultimate, ultimate)
    }
}

/// Apply the step `next = ultimate + penultimate` to `base` `steps` times.
///
/// If `base` holds terms `(n, n + 1)` the result holds `(n + steps, n + steps + 1)`.
/// Pure; the input pair is left untouched. Stepping composes additively:
/// `advance(&advance(p, a), b) == advance(p, a + b)`.
pub fn advance(base: &TermPair, steps: u64) -> TermPair {
    let mut penultimate = base.penultimate.clone();
    let mut ultimate = base.ultimate.clone();
    for _ in 0..steps {
        // (p, u) -> (u, p + u) without allocating a third integer
        penultimate += &ultimate;
        std::mem::swap(&mut penultimate, &mut ultimate);
    }
    TermPair {
        penultimate,
        ultimate,
    }
}
