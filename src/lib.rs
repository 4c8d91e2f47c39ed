//! Sequential binary encoding and decoding over in-memory buffers.
//!
//! [`BinaryReader`] consumes fixed-width integers, floats and byte spans from a byte buffer,
//! advancing a cursor. [`BinaryWriter`] appends the same kinds of values to an owned buffer,
//! optionally pre-sized with a capacity hint. Both use a [`ByteOrder`] fixed at construction;
//! big-endian is the default.
//!
//! Reads never fail: a read that needs more bytes than remain returns zero (or an empty slice)
//! and leaves the cursor where it was. The `try_*` methods of the reader expose the same checks
//! as `Result`s.
//!
//! ```
//! use hiperf_binary_io::{BinaryReader, BinaryWriter, ByteOrder};
//!
//! let mut w = BinaryWriter::with_capacity(4).with_byte_order(ByteOrder::Little);
//! w.write_u16(0x1234);
//! w.write_u16(0x5678);
//! assert_eq!(w.as_bytes(), [0x34, 0x12, 0x78, 0x56]);
//!
//! let mut r = BinaryReader::with_byte_order(w.as_bytes(), ByteOrder::Little);
//! assert_eq!(r.read_u16(), 0x1234);
//! assert_eq!(r.read_u16(), 0x5678);
//! assert_eq!(r.read_u16(), 0);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod options;
mod primitive;
mod reader;
mod tracing_compat;
mod writer;


pub use error::InvalidArgument;
pub use options::{ByteOrder, Encoding};
pub use primitive::Primitive;
pub use reader::{BinaryReader, ReaderError, ReaderSource};
pub use writer::{BinaryWriter, Payload, WritePath};
