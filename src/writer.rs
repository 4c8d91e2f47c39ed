#[cfg(feature = "std")]
use std::io::Write;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{byte_like_values, InvalidArgument};
use crate::options::{low_bytes, ByteOrder, Encoding};
use crate::primitive::{Primitive, MAX_WIDTH};
use crate::tracing_compat::{debug, trace};

pub type Result<T> = core::result::Result<T, InvalidArgument>;

/// Encodes binary values into an owned buffer, in the [`ByteOrder`] chosen at construction.
///
/// A writer created with [`with_capacity`](Self::with_capacity) reserves its capacity hint up
/// front. Every write that still fits inside the hint is stored in that reserved space without
/// reallocating (see [`WritePath::InPlace`]). The first write that would cross the hint, and
/// every write after it, grows the buffer by exactly the number of bytes written
/// ([`WritePath::Grow`]). Both paths produce the same bytes.
///
/// There is no finalize step: [`as_bytes`](Self::as_bytes) is the encoded output at any point.
#[derive(Clone, Debug)]
pub struct BinaryWriter {
    out: Vec<u8>,
    capacity_hint: usize,
    order: ByteOrder,
    encoding: Encoding,
}

/// How a write of a given width is stored.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WritePath {
    /// The value fits within the capacity hint and is stored without reallocating.
    InPlace,
    /// The value does not fit within the capacity hint; the buffer grows to hold it.
    Grow,
}

/// A byte payload accepted by [`BinaryWriter::write_payload`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Payload<'a> {
    /// Raw bytes, written verbatim.
    Bytes(&'a [u8]),
    /// Text. Each UTF-16 code unit is truncated to its low byte, which is only lossless for
    /// text in U+0000..U+00FF.
    Text(&'a str),
    /// An array of byte-like values. Each element must be in `-128..=255`.
    Values(&'a [i64]),
}

impl<'a> From<&'a [u8]> for Payload<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Payload::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Payload<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Payload::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Payload<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(text: &'a str) -> Self {
        Payload::Text(text)
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(text: &'a String) -> Self {
        Payload::Text(text)
    }
}

impl<'a> From<&'a [i64]> for Payload<'a> {
    fn from(values: &'a [i64]) -> Self {
        Payload::Values(values)
    }
}

impl<'a, const N: usize> From<&'a [i64; N]> for Payload<'a> {
    fn from(values: &'a [i64; N]) -> Self {
        Payload::Values(values)
    }
}

impl<'a> From<&'a Vec<i64>> for Payload<'a> {
    fn from(values: &'a Vec<i64>) -> Self {
        Payload::Values(values)
    }
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryWriter {
    /// Creates a big-endian writer with no capacity hint. Every write grows the buffer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a big-endian writer that reserves `capacity_hint` bytes up front.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity_hint),
            capacity_hint,
            order: ByteOrder::Big,
            encoding: Encoding::default(),
        }
    }

    /// Sets the byte order used for multi-byte values.
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the encoding used by [`write_string`](Self::write_string).
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// The byte order used for multi-byte values.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// The encoding used by [`write_string`](Self::write_string).
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The capacity hint given at construction.
    pub fn capacity_hint(&self) -> usize {
        self.capacity_hint
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }

    /// Reports how a write of `width` bytes would be stored at the current length.
    pub fn path_for(&self, width: usize) -> WritePath {
        match self.out.len().checked_add(width) {
            Some(end) if end <= self.capacity_hint => WritePath::InPlace,
            _ => WritePath::Grow,
        }
    }

    fn put(&mut self, bytes: &[u8]) {
        if self.path_for(bytes.len()) == WritePath::Grow {
            trace!(
                len = self.out.len(),
                width = bytes.len(),
                capacity_hint = self.capacity_hint,
                "growing output buffer"
            );
            self.out.reserve_exact(bytes.len());
        }
        self.out.extend_from_slice(bytes);
    }

    /// Writes `bytes` to the output.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.put(bytes);
    }

    /// Writes any [`Primitive`] value in the writer's byte order.
    #[inline]
    pub fn write_value<T: Primitive>(&mut self, value: T) {
        let mut scratch = [0u8; MAX_WIDTH];
        let encoded = &mut scratch[..T::WIDTH];
        value.encode(self.order, encoded);
        self.put(encoded);
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) {
        self.write_value(value)
    }

    /// Writes a single `u16` value
    pub fn write_u16(&mut self, value: u16) {
        self.write_value(value)
    }

    /// Writes a single `u32` value
    pub fn write_u32(&mut self, value: u32) {
        self.write_value(value)
    }

    /// Writes a single `u64` value
    pub fn write_u64(&mut self, value: u64) {
        self.write_value(value)
    }

    /// Writes a single `i8` value
    pub fn write_i8(&mut self, value: i8) {
        self.write_value(value)
    }

    /// Writes a single `i16` value
    pub fn write_i16(&mut self, value: i16) {
        self.write_value(value)
    }

    /// Writes a single `i32` value
    pub fn write_i32(&mut self, value: i32) {
        self.write_value(value)
    }

    /// Writes a single `i64` value
    pub fn write_i64(&mut self, value: i64) {
        self.write_value(value)
    }

    /// Writes an `f32` value using its 4-byte IEEE 754 representation.
    pub fn write_f32(&mut self, value: f32) {
        self.write_value(value)
    }

    /// Writes an `f64` value using its 8-byte IEEE 754 representation.
    pub fn write_f64(&mut self, value: f64) {
        self.write_value(value)
    }

    /// Writes a byte, text or value-array payload.
    ///
    /// Text is converted by truncating each UTF-16 code unit to its low byte, so `"AB"` is
    /// written as `41 42` but non-Latin-1 text does not survive a round trip. Use
    /// [`write_string`](Self::write_string) to encode text properly.
    ///
    /// Fails if a value array contains an element outside `-128..=255`. Nothing is written in
    /// that case.
    pub fn write_payload<'p>(&mut self, payload: impl Into<Payload<'p>>) -> Result<()> {
        match payload.into() {
            Payload::Bytes(bytes) => self.put(bytes),
            Payload::Text(text) => self.put(&low_bytes(text)),
            Payload::Values(values) => match byte_like_values(values) {
                Ok(bytes) => self.put(&bytes),
                Err(err) => {
                    debug!(%err, "rejected byte payload");
                    return Err(err);
                }
            },
        }
        Ok(())
    }

    /// Encodes `text` with the writer's [`Encoding`] and writes the resulting bytes.
    ///
    /// There is no length prefix. Fails, writing nothing, if the encoding cannot represent
    /// `text`.
    pub fn write_string(&mut self, text: &str) -> Result<()> {
        let bytes = self.encoding.encode(text)?;
        self.put(&bytes);
        Ok(())
    }
}

#[cfg(feature = "std")]
impl Write for BinaryWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.put(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
