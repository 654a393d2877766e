//! Error types for huffcode

use thiserror::Error;

/// Result type for huffcode operations
pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("empty alphabet: no symbol frequencies supplied")]
    EmptyAlphabet,

    #[error("frequency overflow: counts exceed u64::MAX")]
    FrequencyOverflow,

    #[error("symbol not found in tree: {0}")]
    SymbolNotFound(String),

    #[error("invalid bit {0:?}: expected '0' or '1'")]
    InvalidBit(char),

    #[error("bit sequence {0:?} matches no code")]
    UnknownCode(String),

    #[error("bit string ended mid-code after {consumed} bits")]
    TruncatedInput { consumed: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("input too large: limit {limit} symbols, got {actual}")]
    InputTooLarge { limit: usize, actual: usize },

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for HuffmanError {
    fn from(e: serde_json::Error) -> Self {
        HuffmanError::SerializationError(e.to_string())
    }
}
