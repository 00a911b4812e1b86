//! Address family discriminant.

use crate::{util::at_least, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use std::fmt;
use tracing::debug;

/// Family of an IP address.
///
/// On the wire the family is a single version byte: `4` or `6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Family {
    V4 = 4,
    V6 = 6,
}

impl Family {
    /// Returns the version byte written for this family.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Family {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            4 => Ok(Self::V4),
            6 => Ok(Self::V6),
            _ => Err(Error::UnknownFamily(tag)),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => f.write_str("IPv4"),
            Self::V6 => f.write_str("IPv6"),
        }
    }
}

impl Write for Family {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.tag());
    }
}

impl Read for Family {
    type Cfg = ();
    const FIXED_SIZE: Option<usize> = Some(Self::SIZE);

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        at_least(buf, Self::SIZE)?;
        let tag = buf.get_u8();
        Self::try_from(tag).inspect_err(|_| debug!(tag, "rejected address family"))
    }
}

impl FixedSize for Family {
    const SIZE: usize = 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeExt, Encode};

    #[test]
    fn test_family() {
        assert_eq!(Family::V4.encode(), &[4][..]);
        assert_eq!(Family::V6.encode(), &[6][..]);
        assert_eq!(Family::decode(&[4u8][..]).unwrap(), Family::V4);
        assert_eq!(Family::decode(&[6u8][..]).unwrap(), Family::V6);
    }

    #[test]
    fn test_unknown_family() {
        for tag in [0u8, 1, 5, 7, 46, u8::MAX] {
            assert_eq!(
                Family::decode(&[tag][..]),
                Err(Error::UnknownFamily(tag))
            );
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(Family::decode(&[0u8; 0][..]), Err(Error::OutOfBounds));
    }

    #[test]
    fn test_display() {
        assert_eq!(Family::V4.to_string(), "IPv4");
        assert_eq!(Family::V6.to_string(), "IPv6");
    }
}
