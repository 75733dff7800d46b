use thiserror::Error;

#[derive(Error, Debug)]
pub enum XorSeqError {
    /// Malformed query input (bad token, wrong count, premature EOF).
    #[error("parse error: {0}")]
    Parse(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
