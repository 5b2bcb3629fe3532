//! Error type shared by every stage of the codec and its I/O collaborators.

use thiserror::Error;

/// Everything that can go wrong while encoding, decoding or verifying a pixel stream.
#[derive(Error, Debug)]
pub enum HuffError {
    /// The bitmap (or other input) could not be supplied.
    #[error("input unavailable: {path}: {reason}")]
    InputUnavailable { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Zero symbols were handed to the encoder.
    #[error("cannot encode an empty symbol sequence")]
    EmptyInput,

    /// A code table was requested from a tree without a root.
    #[error("cannot generate codes from an empty tree")]
    EmptyTree,

    /// The packer met a symbol the forward table does not cover.
    #[error("symbol {symbol} at index {index} has no code")]
    UnknownSymbol { symbol: u8, index: usize },

    /// The packed bit count does not fit the 32 bit header.
    #[error("packed stream of {bits} bits exceeds the 32 bit header")]
    StreamTooLong { bits: u64 },

    /// The stream ended before the declared number of bits was read.
    #[error("truncated stream: header declares {declared} bits, only {available} present")]
    TruncatedStream { declared: u64, available: u64 },

    /// The stream carries more bytes than its bit count accounts for.
    #[error("trailing bytes: header calls for {expected} payload bytes, found {actual}")]
    TrailingBytes { expected: usize, actual: usize },

    /// The bits do not spell a code of the inverse table.
    #[error("invalid code at bit {offset}: {pending} unmatched bits pending")]
    InvalidCode { offset: u64, pending: u8 },

    #[error("size mismatch: original has {original} symbols, reconstructed has {reconstructed}")]
    SizeMismatch { original: usize, reconstructed: usize },

    #[error("data mismatch at index {index}: original = {original}, reconstructed = {reconstructed}")]
    Mismatch {
        index: usize,
        original: u8,
        reconstructed: u8,
    },

    /// A round trip that should be lossless produced distortion.
    #[error("round trip is lossy: MSE = {mse}")]
    Lossy { mse: f64 },
}

pub type Result<T> = std::result::Result<T, HuffError>;
