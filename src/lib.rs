//! Constant-time range XOR queries over the running XOR of the natural
//! numbers.
//!
//! With `f(i) = 0 ^ 1 ^ 2 ^ ... ^ i`, a query asks for the XOR of `f(k)` for
//! all `k` in an inclusive range `[start, end]`. Both `f` and its own
//! running XOR `g` follow a period-16 relationship to their index, so each
//! query is three table lookups and two XORs regardless of range width.
//! Indices up to and beyond 10^15 are exact in `u64`.

pub mod error;
pub mod input;
pub mod io_utils;
pub mod pattern;
pub mod query;

pub use crate::error::XorSeqError;
pub use crate::input::{parse_queries, read_queries};
pub use crate::pattern::{PatternCode, PatternTable, NATURAL_XOR, PREFIX_XOR};
pub use crate::query::{compute_xor_sum, Query};
