use thiserror::Error;

use crate::bitcounttree::BITS;

/// このクレートで起こりうるエラー
#[derive(Debug, Error)]
pub enum Error {
    #[error("bit position {0} is out of range (must be below {max})", max = BITS)]
    BitOutOfRange(usize),
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
    #[error("invalid {what}: {token:?}")]
    InvalidToken { what: &'static str, token: String },
    #[error("unknown query type {0:?}")]
    UnknownQuery(String),
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
