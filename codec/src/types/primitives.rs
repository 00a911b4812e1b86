//! Codec implementations for the fixed-width unsigned integers used on the wire.
//!
//! All integers are written little-endian: a port of `0x1234` occupies the
//! bytes `[0x34, 0x12]`. The same order applies to every multi-byte field
//! built on top of these (for example, each group of an IPv6 address).

use crate::{util::at_least, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }
        }

        impl Read for $type {
            type Cfg = ();
            const FIXED_SIZE: Option<usize> = Some(Self::SIZE);

            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(u16, get_u16_le, put_u16_le);
