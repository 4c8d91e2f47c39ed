use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::InvalidArgument;

/// The order in which the bytes of a multi-byte value are stored.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum ByteOrder {
    /// Most-significant byte first. This is the default.
    #[default]
    Big,
    /// Least-significant byte first.
    Little,
}

impl ByteOrder {
    /// The byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;

    /// The byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;

    /// Selects a byte order from a textual tag.
    ///
    /// Only the exact tag `"little"` selects [`ByteOrder::Little`]. Every other string, including
    /// `"LITTLE"`, `"le"` and the empty string, selects [`ByteOrder::Big`].
    pub fn from_tag(tag: &str) -> Self {
        if tag == "little" {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Returns `true` for [`ByteOrder::Little`].
    pub fn is_little(self) -> bool {
        self == Self::Little
    }
}

impl From<&str> for ByteOrder {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

/// Character encoding used when a text value has to be turned into bytes, or bytes into text.
///
/// The numeric `read_*` and `write_*` methods never consult the encoding.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum Encoding {
    /// 7-bit ASCII. Encoding keeps the low byte of each UTF-16 code unit; decoding clears the
    /// high bit of each byte. This is the default.
    #[default]
    Ascii,
    /// ISO-8859-1. Encoding keeps the low byte of each UTF-16 code unit; decoding maps each byte
    /// to the code point of the same value.
    Latin1,
    /// UTF-8. Decoding replaces malformed sequences with U+FFFD.
    Utf8,
    /// UTF-16, little-endian code units. Decoding drops a trailing odd byte.
    Utf16Le,
    /// Pairs of hexadecimal digits.
    Hex,
}

impl Encoding {
    /// The canonical tag for this encoding.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Latin1 => "latin1",
            Self::Utf8 => "utf8",
            Self::Utf16Le => "utf16le",
            Self::Hex => "hex",
        }
    }

    /// Converts `text` to bytes.
    ///
    /// Only [`Encoding::Hex`] can fail, when `text` has an odd length or contains a character
    /// that is not a hexadecimal digit.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, InvalidArgument> {
        Ok(match self {
            Self::Ascii | Self::Latin1 => low_bytes(text),
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::Hex => hex::decode(text).map_err(|detail| InvalidArgument::InvalidText {
                encoding: self,
                detail,
            })?,
        })
    }

    /// Converts `bytes` to text. This never fails; bytes that cannot be represented are
    /// replaced.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Ascii => bytes.iter().map(|&b| char::from(b & 0x7f)).collect(),
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Utf16Le => {
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect()
            }
            Self::Hex => hex::encode(bytes),
        }
    }
}

/// Keeps the low byte of each UTF-16 code unit of `text`.
///
/// Characters outside U+0000..U+00FF lose information; characters outside the BMP produce two
/// bytes, one per surrogate.
pub(crate) fn low_bytes(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|unit| unit as u8).collect()
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Encoding {
    type Err = InvalidArgument;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "ascii" => Ok(Self::Ascii),
            "latin1" | "binary" => Ok(Self::Latin1),
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Self::Utf16Le),
            "hex" => Ok(Self::Hex),
            _ => Err(InvalidArgument::UnknownEncoding(tag.into())),
        }
    }
}
