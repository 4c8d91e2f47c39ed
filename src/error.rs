//! Error types for constructing readers and validating writer payloads.

use alloc::string::String;

use thiserror::Error;

use crate::options::Encoding;

/// A value handed to a constructor or a `write_*` method cannot be turned into bytes.
///
/// These errors are raised at the call site and nothing is consumed or written when they occur.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum InvalidArgument {
    /// The encoding tag is not one of the tags recognized by [`Encoding`]'s `FromStr` impl.
    #[error("unknown character encoding {0:?}")]
    UnknownEncoding(String),

    /// The text cannot be represented in the requested encoding.
    #[error("text is not valid {encoding}: {detail}")]
    InvalidText {
        /// Encoding that rejected the text.
        encoding: Encoding,
        /// Why the text was rejected.
        detail: hex::FromHexError,
    },

    /// An element of a value array does not fit in a single byte.
    #[error("value {value} at index {index} is not byte-like (expected -128..=255)")]
    NotByteLike {
        /// Position of the offending element.
        index: usize,
        /// The offending element.
        value: i64,
    },
}

/// Converts an array of byte-like values to bytes. Negative values are stored in two's
/// complement, so `-1` becomes `0xff`.
pub(crate) fn byte_like_values(values: &[i64]) -> Result<alloc::vec::Vec<u8>, InvalidArgument> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| match value {
            -128..=-1 => Ok(value as i8 as u8),
            0..=255 => Ok(value as u8),
            _ => Err(InvalidArgument::NotByteLike { index, value }),
        })
        .collect()
}
