use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::error::{byte_like_values, InvalidArgument};
use crate::options::{ByteOrder, Encoding};
use crate::primitive::Primitive;
use crate::tracing_compat::debug;

pub type Result<T> = core::result::Result<T, ReaderError>;

/// Reads fixed-width values from a byte buffer, advancing a cursor past each value.
///
/// Multi-byte values are decoded using the [`ByteOrder`] chosen at construction (big-endian
/// unless told otherwise).
///
/// The `read_*` methods never fail. If fewer bytes remain after the cursor than the value
/// needs, they return the type's zero value (or an empty slice) and leave the cursor where it
/// was. Callers that need to tell "zero" apart from "not enough data" should use
/// [`try_read`](Self::try_read) and [`try_read_bytes`](Self::try_read_bytes), which report
/// `Err(ReaderError::NeedsMoreData)` instead.
///
/// The reader borrows its input, so slices returned by [`read_bytes`](Self::read_bytes) stay
/// valid while reading continues. Input built from text or a value array is owned by a
/// [`ReaderSource`], which hands out readers over it.
#[derive(Clone, Debug)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
    order: ByteOrder,
    encoding: Encoding,
}

impl<'a> BinaryReader<'a> {
    /// Creates a big-endian reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_byte_order(data, ByteOrder::Big)
    }

    /// Creates a reader over `data` that decodes multi-byte values in `order`.
    pub fn with_byte_order(data: &'a [u8], order: ByteOrder) -> Self {
        Self {
            data,
            position: 0,
            order,
            encoding: Encoding::default(),
        }
    }

    /// Sets the encoding used by [`read_string`](Self::read_string).
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// The byte order used for multi-byte values.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// The encoding used by [`read_string`](Self::read_string).
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total length of the input, including bytes that have already been read.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the input has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes after the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// The bytes after the cursor.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        let data = self.data;
        &data[self.position..]
    }

    /// The whole input.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Moves the cursor to `position`. Moving to the end of the input is allowed.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(ReaderError::OutOfBounds);
        }
        self.position = position;
        Ok(())
    }

    /// Advances the cursor by `count` bytes. Returns `false`, without moving the cursor, if fewer
    /// than `count` bytes remain.
    pub fn skip(&mut self, count: usize) -> bool {
        self.try_read_bytes(count).is_ok()
    }

    /// Decodes a `T` and advances the cursor by `T::WIDTH`. On failure the cursor is not moved.
    #[inline(always)]
    pub fn try_read<T: Primitive>(&mut self) -> Result<T> {
        let value =
            T::decode(self.remaining_bytes(), self.order).ok_or(ReaderError::NeedsMoreData)?;
        self.position += T::WIDTH;
        Ok(value)
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them. On failure the cursor is not moved.
    #[inline(always)]
    pub fn try_read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(ReaderError::NeedsMoreData);
        }
        let (data, start) = (self.data, self.position);
        self.position += len;
        Ok(&data[start..self.position])
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.try_read_bytes(N)?);
        Ok(out)
    }

    /// Decodes a `T`, or returns zero without moving the cursor if the input is too short.
    #[inline]
    pub fn read_value<T: Primitive>(&mut self) -> T {
        match self.try_read() {
            Ok(value) => value,
            Err(_) => {
                debug!(
                    width = T::WIDTH,
                    position = self.position,
                    remaining = self.remaining(),
                    "short read, returning zero"
                );
                T::default()
            }
        }
    }

    /// Reads a single `u8` value, or 0 at the end of the input.
    pub fn read_u8(&mut self) -> u8 {
        self.read_value()
    }

    /// Reads a `u16`, or 0 if fewer than 2 bytes remain.
    pub fn read_u16(&mut self) -> u16 {
        self.read_value()
    }

    /// Reads a `u32`, or 0 if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> u32 {
        self.read_value()
    }

    /// Reads a `u64`, or 0 if fewer than 8 bytes remain.
    pub fn read_u64(&mut self) -> u64 {
        self.read_value()
    }

    /// Reads a single `i8` value, or 0 at the end of the input.
    pub fn read_i8(&mut self) -> i8 {
        self.read_value()
    }

    /// Reads an `i16`, or 0 if fewer than 2 bytes remain.
    pub fn read_i16(&mut self) -> i16 {
        self.read_value()
    }

    /// Reads an `i32`, or 0 if fewer than 4 bytes remain.
    pub fn read_i32(&mut self) -> i32 {
        self.read_value()
    }

    /// Reads an `i64`, or 0 if fewer than 8 bytes remain.
    pub fn read_i64(&mut self) -> i64 {
        self.read_value()
    }

    /// Reads an IEEE 754 single-precision value, or 0.0 if fewer than 4 bytes remain.
    pub fn read_f32(&mut self) -> f32 {
        self.read_value()
    }

    /// Reads an IEEE 754 double-precision value, or 0.0 if fewer than 8 bytes remain.
    pub fn read_f64(&mut self) -> f64 {
        self.read_value()
    }

    /// Reads `count` bytes without copying them. Returns an empty slice, without moving the
    /// cursor, if fewer than `count` bytes remain.
    pub fn read_bytes(&mut self, count: usize) -> &'a [u8] {
        if self.remaining() < count {
            debug!(
                count,
                position = self.position,
                remaining = self.remaining(),
                "short byte read, returning empty slice"
            );
            return &[];
        }
        let (data, start) = (self.data, self.position);
        self.position += count;
        &data[start..self.position]
    }

    /// Reads `count` bytes and decodes them with the reader's [`Encoding`]. Returns an empty
    /// string, without moving the cursor, if fewer than `count` bytes remain.
    pub fn read_string(&mut self, count: usize) -> String {
        let encoding = self.encoding;
        encoding.decode(self.read_bytes(count))
    }

    /// Reads `count` bytes and returns them as a `bstr::BStr`, with the same short-read
    /// behavior as [`read_bytes`](Self::read_bytes).
    #[cfg(feature = "bstr")]
    pub fn read_bstr(&mut self, count: usize) -> &'a bstr::BStr {
        bstr::BStr::new(self.read_bytes(count))
    }
}

/// Bytes converted from text or from an array of byte-like values, kept together with the byte
/// order and encoding a [`BinaryReader`] over them should use.
///
/// ```
/// use hiperf_binary_io::{ByteOrder, Encoding, ReaderSource};
///
/// let source = ReaderSource::from_text("0102ff", ByteOrder::Big, Encoding::Hex)?;
/// let mut r = source.reader();
/// assert_eq!(r.read_u16(), 0x0102);
/// assert_eq!(r.read_u8(), 0xff);
/// # Ok::<(), hiperf_binary_io::InvalidArgument>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ReaderSource {
    bytes: Vec<u8>,
    order: ByteOrder,
    encoding: Encoding,
}

impl ReaderSource {
    /// Converts `text` to bytes with `encoding`.
    ///
    /// Fails if `encoding` cannot represent `text`, for example an odd number of digits for
    /// [`Encoding::Hex`].
    pub fn from_text(
        text: &str,
        order: ByteOrder,
        encoding: Encoding,
    ) -> core::result::Result<Self, InvalidArgument> {
        Ok(Self {
            bytes: encoding.encode(text)?,
            order,
            encoding,
        })
    }

    /// Converts an array of byte-like values to bytes. Each value must be in `-128..=255`;
    /// negative values are stored in two's complement.
    pub fn from_values(
        values: &[i64],
        order: ByteOrder,
        encoding: Encoding,
    ) -> core::result::Result<Self, InvalidArgument> {
        Ok(Self {
            bytes: byte_like_values(values)?,
            order,
            encoding,
        })
    }

    /// Creates a reader positioned at the start of the converted bytes.
    pub fn reader(&self) -> BinaryReader<'_> {
        BinaryReader::with_byte_order(&self.bytes, self.order).with_encoding(self.encoding)
    }

    /// The converted bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Extracts the converted bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

/// Error type for the checked methods of `BinaryReader`
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum ReaderError {
    /// A `try_read*` method reached the end of the input data, but requires more data to finish
    /// reading the value. The cursor has not been moved.
    #[error("not enough data remaining to read the value")]
    NeedsMoreData,

    /// A seek target lies past the end of the input.
    #[error("position is past the end of the input")]
    OutOfBounds,
}
