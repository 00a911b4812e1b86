//! IPv4 addresses.
//!
//! Textual form is four decimal groups joined by `.`; binary form is exactly
//! four bytes, one per group, in textual order.

use super::{family::Family, Address};
use crate::{util::at_least, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use std::{fmt, net::Ipv4Addr, str::FromStr};

/// Number of dotted-decimal groups (and bytes) in an IPv4 address.
pub const OCTETS: usize = 4;

/// An IPv4 address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Ipv4Address([u8; OCTETS]);

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    pub const fn octets(&self) -> [u8; OCTETS] {
        self.0
    }
}

fn malformed(reason: &'static str) -> Error {
    Error::MalformedAddress(Family::V4, reason)
}

/// Parses dotted-decimal text into its four octets.
///
/// Rejects anything other than exactly four non-empty groups of decimal digits,
/// each no greater than 255. Leading zeros are accepted and read as decimal.
pub fn parse(text: &str) -> Result<[u8; OCTETS], Error> {
    let mut octets = [0u8; OCTETS];
    let mut count = 0;
    for group in text.split('.') {
        if count == OCTETS {
            return Err(malformed("too many groups"));
        }
        octets[count] = parse_octet(group)?;
        count += 1;
    }
    if count != OCTETS {
        return Err(malformed("too few groups"));
    }
    Ok(octets)
}

fn parse_octet(group: &str) -> Result<u8, Error> {
    if group.is_empty() {
        return Err(malformed("empty group"));
    }
    let mut n: u16 = 0;
    for c in group.chars() {
        let digit = c.to_digit(10).ok_or_else(|| malformed("invalid digit"))?;
        n = n * 10 + digit as u16;
        if n > u8::MAX as u16 {
            return Err(malformed("group out of range"));
        }
    }
    Ok(n as u8)
}

impl FromStr for Ipv4Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<[u8; OCTETS]> for Ipv4Address {
    fn from(octets: [u8; OCTETS]) -> Self {
        Self(octets)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl Write for Ipv4Address {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self.0);
    }
}

impl Read for Ipv4Address {
    type Cfg = ();
    const FIXED_SIZE: Option<usize> = Some(Self::SIZE);

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        at_least(buf, Self::SIZE)?;
        let mut octets = [0u8; OCTETS];
        buf.copy_to_slice(&mut octets);
        Ok(Self(octets))
    }
}

impl FixedSize for Ipv4Address {
    const SIZE: usize = OCTETS;
}

impl Address for Ipv4Address {
    const FAMILY: Family = Family::V4;
}
