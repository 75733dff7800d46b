//! Period-16 pattern tables for the XOR-sum sequences.
//!
//! Two derived sequences drive the whole evaluator:
//!
//! ```text
//! i:    0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 ...
//! f(i): 0  1  3  0  4  1  7  0  8  1 11  0 12  1 15  0 16 ...
//! g(i): 0  1  2  2  6  7  0  0  8  9  2  2 14 15  0  0 16 ...
//! ```
//!
//! `f` is the running XOR of the natural numbers, `g` the running XOR of `f`.
//! Both relate to their index through one of four rules selected by the low
//! four bits of the index, so a 16-entry code table gives O(1) lookup at any
//! index. The `g` rules are the `f` rules shifted by a constant 2 in the
//! `Successor` and `One` classes, stored here as a per-table offset of 1
//! applied in those two arms.

/// Rule for deriving a sequence value from its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCode {
    /// The value is always zero.
    Zero,
    /// The value equals the index.
    Index,
    /// The value is the index plus one (plus the table offset).
    Successor,
    /// The value is one (plus the table offset).
    One,
}

/// Lookup table mapping each 4-bit index remainder to its pattern code.
#[derive(Debug, Clone, Copy)]
pub struct PatternTable {
    codes: [PatternCode; 16],
    offset: u64,
}

// Remainders grouped in fours by pattern code: Zero, Index, Successor, One.
const NATURAL_XOR_REFERENCE: [usize; 16] = [3, 7, 11, 15, 0, 4, 8, 12, 2, 6, 10, 14, 1, 5, 9, 13];
const PREFIX_XOR_REFERENCE: [usize; 16] = [6, 7, 14, 15, 0, 1, 8, 9, 4, 5, 12, 13, 2, 3, 10, 11];

/// Table for `f`, the XOR-sum over the natural numbers.
pub const NATURAL_XOR: PatternTable = PatternTable::from_reference(&NATURAL_XOR_REFERENCE, 0);

/// Table for `g`, the XOR-sum over `f`.
pub const PREFIX_XOR: PatternTable = PatternTable::from_reference(&PREFIX_XOR_REFERENCE, 1);

const fn code_for_group(group: usize) -> PatternCode {
    match group {
        0 => PatternCode::Zero,
        1 => PatternCode::Index,
        2 => PatternCode::Successor,
        _ => PatternCode::One,
    }
}

impl PatternTable {
    /// Invert a grouped reference array into a code-per-remainder table.
    ///
    /// `reference` lists the 16 possible remainders in four groups of four;
    /// the group a remainder sits in is its pattern code. `offset` is the
    /// extra constant the `Successor` and `One` rules carry for the `g`
    /// table.
    const fn from_reference(reference: &[usize; 16], offset: u64) -> Self {
        let mut codes = [PatternCode::Zero; 16];
        let mut slot = 0;
        while slot < 16 {
            codes[reference[slot]] = code_for_group(slot / 4);
            slot += 1;
        }
        Self { codes, offset }
    }

    /// Evaluate the sequence this table encodes at `index`, in O(1).
    pub fn evaluate_at(&self, index: u64) -> u64 {
        match self.codes[(index & 0xF) as usize] {
            PatternCode::Zero => 0,
            PatternCode::Index => index,
            PatternCode::Successor => index + 1 + self.offset,
            PatternCode::One => 1 + self.offset,
        }
    }

    /// Pattern code assigned to a 4-bit remainder.
    pub fn code(&self, remainder: usize) -> PatternCode {
        self.codes[remainder & 0xF]
    }

    /// Constant added in the `Successor` and `One` rules (1 for the `g`
    /// table, 0 for `f`).
    pub fn offset(&self) -> u64 {
        self.offset
    }
}
