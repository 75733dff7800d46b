//! Text protocol for query batches.
//!
//! The input is a whitespace-separated token stream: a count `n` followed by
//! `n` pairs of `start end` indices. Parsing is strict; a bad token, a
//! missing pair, or trailing garbage is a [`XorSeqError::Parse`].

use std::io::Read;

use crate::error::XorSeqError;
use crate::query::Query;

fn parse_token(token: Option<&str>, what: &str) -> Result<u64, XorSeqError> {
    let tok = token.ok_or_else(|| XorSeqError::Parse(format!("unexpected EOF reading {what}")))?;
    tok.parse::<u64>()
        .map_err(|_| XorSeqError::Parse(format!("invalid {what} '{tok}'")))
}

/// Parse a query batch from a string.
pub fn parse_queries(input: &str) -> Result<Vec<Query>, XorSeqError> {
    let mut tokens = input.split_ascii_whitespace();
    let count = parse_token(tokens.next(), "query count")?;
    // Cap the pre-allocation; a hostile count fails on its first missing pair.
    let mut queries = Vec::with_capacity(count.min(1 << 20) as usize);
    for _ in 0..count {
        let start = parse_token(tokens.next(), "start index")?;
        let end = parse_token(tokens.next(), "end index")?;
        queries.push(Query { start, end });
    }
    if let Some(extra) = tokens.next() {
        return Err(XorSeqError::Parse(format!(
            "trailing token '{extra}' after last query"
        )));
    }
    Ok(queries)
}

/// Read a query batch from a stream (stdin or a file).
pub fn read_queries<R: Read>(mut reader: R) -> Result<Vec<Query>, XorSeqError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_queries(&buf)
}
