//! End-to-end lookups against published term tables.

use lucas_core::{advance, LucasSequence, SequenceError, TermPair};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

const FIBONACCI_NUMBERS: [i64; 39] = [
    0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181, 6765,
    10946, 17711, 28657, 46368, 75025, 121393, 196418, 317811, 514229, 832040, 1346269, 2178309,
    3524578, 5702887, 9227465, 14930352, 24157817, 39088169,
];

const LUCAS_NUMBERS: [i64; 37] = [
    2, 1, 3, 4, 7, 11, 18, 29, 47, 76, 123, 199, 322, 521, 843, 1364, 2207, 3571, 5778, 9349,
    15127, 24476, 39603, 64079, 103682, 167761, 271443, 439204, 710647, 1149851, 1860498,
    3010349, 4870847, 7881196, 12752043, 20633239, 33385282,
];

const BRADY_NUMBERS: [i64; 32] = [
    2308, 4261, 6569, 10830, 17399, 28229, 45628, 73857, 119485, 193342, 312827, 506169, 818996,
    1325165, 2144161, 3469326, 5613487, 9082813, 14696300, 23779113, 38475413, 62254526,
    100729939, 162984465, 263714404, 426698869, 690413273, 1117112142, 1807525415, 2924637557,
    4732162972, 7656800529,
];

fn assert_matches_table(seq: &mut LucasSequence, table: &[i64]) {
    for (i, expected) in table.iter().enumerate() {
        assert_eq!(
            seq.term(i as i64).unwrap(),
            BigInt::from(*expected),
            "term {i} with stride {}",
            seq.stride()
        );
    }
}

#[test]
fn test_fibonacci_numbers() {
    assert_matches_table(&mut LucasSequence::fibonacci(None), &FIBONACCI_NUMBERS);
}

#[test]
fn test_lucas_numbers() {
    assert_matches_table(&mut LucasSequence::lucas(None), &LUCAS_NUMBERS);
}

#[test]
fn test_brady_numbers() {
    assert_matches_table(&mut LucasSequence::brady(None), &BRADY_NUMBERS);
}

#[test]
fn test_tables_hold_for_small_strides() {
    // small strides force lookups to cross many checkpoints
    for stride in [2, 3, 7, 10] {
        assert_matches_table(&mut LucasSequence::fibonacci(Some(stride)), &FIBONACCI_NUMBERS);
        assert_matches_table(&mut LucasSequence::lucas(Some(stride)), &LUCAS_NUMBERS);
        assert_matches_table(&mut LucasSequence::brady(Some(stride)), &BRADY_NUMBERS);
    }
}

#[test]
fn test_advance_over_table_windows() {
    for table in [&FIBONACCI_NUMBERS[..], &LUCAS_NUMBERS[..], &BRADY_NUMBERS[..]] {
        for start in 0..table.len() - 2 {
            for end in start..table.len() - 1 {
                let base = TermPair::new(table[start], table[start + 1]);
                assert_eq!(
                    advance(&base, (end - start) as u64),
                    TermPair::new(table[end], table[end + 1])
                );
            }
        }
    }
}

#[test]
fn test_checkpoint_shortcut_matches_brute_force() {
    let mut seq = LucasSequence::new((0, 0), 10);
    let brute = advance(&TermPair::new(0, 0), 15).penultimate;
    assert_eq!(seq.nth(15).unwrap(), brute);
    assert_eq!(seq.checkpoints(), 2);

    let mut seq = LucasSequence::new((3, -8), 10);
    let brute = advance(&TermPair::new(3, -8), 15).penultimate;
    assert_eq!(seq.nth(15).unwrap(), brute);
}

#[test]
fn test_lookup_inside_first_interval_uses_seed_checkpoint() {
    let mut seq = LucasSequence::new((0, 0), 10);
    seq.nth(5).unwrap();
    assert_eq!(seq.checkpoints(), 1);
}

#[test]
fn test_negative_index_leaves_cache_alone() {
    let mut seq = LucasSequence::fibonacci(Some(10));
    seq.nth(25).unwrap();
    let before = seq.checkpoints();

    let err = seq.term(-1).unwrap_err();
    assert_eq!(err, SequenceError::NegativeIndex { index: -1 });
    assert!(err.to_string().contains("-1"));
    assert_eq!(seq.checkpoints(), before);
}

#[test]
fn test_unaddressable_index_is_an_error() {
    let mut seq = LucasSequence::fibonacci(Some(2));
    assert_eq!(
        seq.nth(u64::MAX),
        Err(SequenceError::CheckpointOutOfRange {
            index: u64::MAX,
            stride: 2
        })
    );
    assert_eq!(seq.checkpoints(), 1);
    assert_eq!(seq.nth(10).unwrap(), BigInt::from(55));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_index_too_large_to_cache_is_an_error() {
    // i64::MAX / 1000 checkpoints do not fit in any address space
    let mut seq = LucasSequence::brady(None);
    assert_eq!(
        seq.term(i64::MAX),
        Err(SequenceError::CheckpointOutOfRange {
            index: i64::MAX as u64,
            stride: 1000
        })
    );
    assert_eq!(seq.checkpoints(), 1);
}

#[test]
fn test_repeated_lookup_does_not_grow() {
    let mut seq = LucasSequence::brady(Some(16));
    let first = seq.nth(500).unwrap();
    let len = seq.checkpoints();
    let second = seq.nth(500).unwrap();
    assert_eq!(first, second);
    assert_eq!(seq.checkpoints(), len);
}

#[test]
fn test_large_index_beyond_machine_integers() {
    // F(300), well past u128
    let mut seq = LucasSequence::fibonacci(None);
    assert_eq!(
        seq.nth(300).unwrap().to_string(),
        "222232244629420445529739893461909967206666939096499764990979600"
    );
    // F(2500) via the second checkpoint agrees with a fresh handle using another stride
    let mut other = LucasSequence::fibonacci(Some(37));
    assert_eq!(seq.nth(2500).unwrap(), other.nth(2500).unwrap());
}

#[test]
fn test_ratio_converges_to_golden_ratio() {
    let phi = (1.0 + 5f64.sqrt()) / 2.0;
    let mut seq = LucasSequence::fibonacci(None);
    let mut last_gap = f64::INFINITY;
    let mut crossed_at = None;

    for i in 2..=60u64 {
        let previous = seq.nth(i - 1).unwrap().to_f64().unwrap();
        let current = seq.nth(i).unwrap().to_f64().unwrap();
        let gap = (current / previous - phi).abs();
        if gap > 1e-15 {
            assert!(gap < last_gap, "gap grew at i = {i}: {gap} >= {last_gap}");
        }
        last_gap = gap;
        if crossed_at.is_none() && gap < 1e-10 {
            crossed_at = Some(i);
        }
    }

    let crossed_at = crossed_at.expect("ratio never came within 1e-10 of phi");
    assert!(crossed_at <= 50, "converged too late: {crossed_at}");
}
