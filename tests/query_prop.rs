use proptest::prelude::*;
use xorseq::{compute_xor_sum, NATURAL_XOR, PREFIX_XOR};

fn brute_range(start: u64, end: u64) -> u64 {
    let mut f = 0u64;
    let mut acc = 0u64;
    for i in 0..=end {
        f ^= i;
        if i >= start {
            acc ^= f;
        }
    }
    acc
}

proptest! {
    #[test]
    fn range_matches_brute_force(start in 0u64..=20_000, width in 0u64..=2_000) {
        let end = start + width;
        prop_assert_eq!(compute_xor_sum(start, end), brute_range(start, end));
    }

    #[test]
    fn single_index_is_idempotent(i in 0u64..=1_000_000_000_000_000) {
        prop_assert_eq!(compute_xor_sum(i, i), NATURAL_XOR.evaluate_at(i));
    }

    #[test]
    fn prefix_lookup_splits_ranges(start in 0u64..=10_000, width in 0u64..=1_000) {
        // g(end) ^ g(start) ^ f(start) over [start, end] must agree with
        // chaining two adjacent ranges.
        let mid = start + width / 2;
        let end = start + width;
        let left = compute_xor_sum(start, mid);
        let right = if mid < end { compute_xor_sum(mid + 1, end) } else { 0 };
        prop_assert_eq!(compute_xor_sum(start, end), left ^ right);
    }

    #[test]
    fn prefix_xor_recurrence(i in 1u64..=1_000_000_000_000_000) {
        prop_assert_eq!(
            PREFIX_XOR.evaluate_at(i),
            PREFIX_XOR.evaluate_at(i - 1) ^ NATURAL_XOR.evaluate_at(i)
        );
    }
}
