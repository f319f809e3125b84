//! src/error.rs

use thiserror::Error;

/// Errors produced when converting a hex address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input is not a valid 20-byte hex address.
    #[error("invalid hex address format: {0}")]
    InvalidFormat(#[from] FormatError),
}

/// Why a hex address was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("odd number of hex digits")]
    OddLength,
    #[error("invalid hex character {c:?} at position {index}")]
    InvalidCharacter { c: char, index: usize },
    #[error("expected {expected} hex digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

impl FormatError {
    /// Maps a `hex` crate error for an input of `actual` hex digits decoded
    /// into a buffer of `expected / 2` bytes.
    pub(crate) fn from_hex(err: hex::FromHexError, expected: usize, actual: usize) -> Self {
        match err {
            hex::FromHexError::OddLength => FormatError::OddLength,
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                FormatError::InvalidCharacter { c, index }
            }
            hex::FromHexError::InvalidStringLength => {
                FormatError::WrongLength { expected, actual }
            }
        }
    }
}
