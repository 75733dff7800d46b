//! Range XOR queries over the natural-number XOR-sum sequence.

use serde::Serialize;

use crate::pattern::{NATURAL_XOR, PREFIX_XOR};

/// A single inclusive range query over `f`.
///
/// Bounds are assumed ordered (`end >= start`); the evaluator does not
/// check this and the result for a reversed range is unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Query {
    /// First index of the range, inclusive.
    pub start: u64,
    /// Last index of the range, inclusive.
    pub end: u64,
}

impl Query {
    /// Evaluate this query. See [`compute_xor_sum`].
    pub fn evaluate(&self) -> u64 {
        compute_xor_sum(self.start, self.end)
    }
}

/// XOR of `f(k)` for `k` in `[start, end]`, in O(1).
///
/// `g(start) ^ g(end)` cancels the shared prefix `[0, start]`, leaving the
/// XOR over `(start, end]`; folding `f(start)` back in makes the range
/// inclusive of `start`.
pub fn compute_xor_sum(start: u64, end: u64) -> u64 {
    let first = NATURAL_XOR.evaluate_at(start);
    let prefix_start = PREFIX_XOR.evaluate_at(start);
    let prefix_end = PREFIX_XOR.evaluate_at(end);
    first ^ prefix_start ^ prefix_end
}
