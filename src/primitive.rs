use zerocopy::byteorder::{BE, F32, F64, I16, I32, I64, LE, U16, U32, U64};
use zerocopy::{FromBytes, IntoBytes};

use crate::options::ByteOrder;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width value that [`BinaryReader`](crate::BinaryReader) and
/// [`BinaryWriter`](crate::BinaryWriter) know how to decode and encode.
///
/// This trait is sealed. It is implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`,
/// `i64`, `f32` and `f64`.
pub trait Primitive: Copy + Default + sealed::Sealed {
    /// Size of the encoded value, in bytes.
    const WIDTH: usize;

    /// Decodes a value from the first [`Self::WIDTH`] bytes of `bytes`. Returns `None` if `bytes`
    /// is shorter than that.
    fn decode(bytes: &[u8], order: ByteOrder) -> Option<Self>;

    /// Encodes the value into `out`, whose length must be exactly [`Self::WIDTH`].
    fn encode(self, order: ByteOrder, out: &mut [u8]);
}

/// Largest [`Primitive::WIDTH`] of any implementation.
pub(crate) const MAX_WIDTH: usize = 8;

impl sealed::Sealed for u8 {}

impl Primitive for u8 {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn decode(bytes: &[u8], _order: ByteOrder) -> Option<Self> {
        bytes.first().copied()
    }

    #[inline(always)]
    fn encode(self, _order: ByteOrder, out: &mut [u8]) {
        out[0] = self;
    }
}

impl sealed::Sealed for i8 {}

impl Primitive for i8 {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn decode(bytes: &[u8], _order: ByteOrder) -> Option<Self> {
        bytes.first().map(|&b| b as i8)
    }

    #[inline(always)]
    fn encode(self, _order: ByteOrder, out: &mut [u8]) {
        out[0] = self as u8;
    }
}

// Multi-byte values go through zerocopy's byte-order-aware wrappers, which are plain byte arrays
// and so can be read from any alignment.
macro_rules! ordered_primitive {
    ($($ty:ty => $wrapper:ident,)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                #[inline(always)]
                fn decode(bytes: &[u8], order: ByteOrder) -> Option<Self> {
                    match order {
                        ByteOrder::Big => $wrapper::<BE>::read_from_prefix(bytes)
                            .ok()
                            .map(|(value, _)| value.get()),
                        ByteOrder::Little => $wrapper::<LE>::read_from_prefix(bytes)
                            .ok()
                            .map(|(value, _)| value.get()),
                    }
                }

                #[inline(always)]
                fn encode(self, order: ByteOrder, out: &mut [u8]) {
                    match order {
                        ByteOrder::Big => out.copy_from_slice($wrapper::<BE>::new(self).as_bytes()),
                        ByteOrder::Little => {
                            out.copy_from_slice($wrapper::<LE>::new(self).as_bytes())
                        }
                    }
                }
            }
        )*
    };
}

ordered_primitive! {
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}
