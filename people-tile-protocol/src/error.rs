//! Error handling for tile operations
//!
//! Tile encoding and decoding delegate failures to the underlying
//! primitive operations: a truncated stream surfaces as an I/O error,
//! a corrupt string field as a UTF-8 error, a corrupt opaque handle as
//! a JSON error. The codec adds no recovery of its own; errors are
//! converted with `thiserror` and propagate unchanged to the caller.

use thiserror::Error;

/// Result type for tile operations
pub type Result<T> = std::result::Result<T, TileError>;

/// Errors that can occur while encoding or decoding a tile
#[derive(Error, Debug)]
pub enum TileError {
    /// I/O error, including unexpected end of stream
    ///
    /// Automatically converted from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An opaque handle failed to serialize or deserialize
    ///
    /// Automatically converted from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A string field did not contain valid UTF-8
    #[error("invalid UTF-8 in string field: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Malformed framing, e.g. a presence byte that is neither 0 nor 1
    #[error("invalid parcel: {0}")]
    InvalidParcel(String),
}
