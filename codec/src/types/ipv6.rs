//! IPv6 addresses.
//!
//! Textual form is up to eight groups of 1-4 hex digits joined by `:`, where a
//! single run of zero groups may be elided as `::`. Binary form is exactly 16
//! bytes: the eight groups in textual order, each written as a little-endian
//! `u16` (the same order as every other integer in this codec, so `::1` ends in
//! `[0x01, 0x00]`).
//!
//! Formatting never re-abbreviates: `::1` is displayed as `0:0:0:0:0:0:0:1`.
//! Parsing accepts either spelling, so text only round-trips once expanded.

use super::{family::Family, Address};
use crate::{util::at_least, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};
use std::{fmt, net::Ipv6Addr, str::FromStr};

/// Number of 16-bit groups in an IPv6 address.
pub const GROUPS: usize = 8;

/// Maximum number of hex digits in a single group.
const MAX_GROUP_DIGITS: usize = 4;

/// An IPv6 address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Ipv6Address([u16; GROUPS]);

impl Ipv6Address {
    /// The unspecified address (`::`).
    pub const UNSPECIFIED: Self = Self([0; GROUPS]);

    #[allow(clippy::too_many_arguments)]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        Self([a, b, c, d, e, f, g, h])
    }

    pub const fn groups(&self) -> [u16; GROUPS] {
        self.0
    }
}

fn malformed(reason: &'static str) -> Error {
    Error::MalformedAddress(Family::V6, reason)
}

/// Parses colon-hex text into its eight groups.
///
/// Groups are read left to right. When `::` is found, the number of groups
/// parsed so far is recorded as the elision point and parsing continues. Once
/// the text is exhausted, the groups after the elision point are shifted right
/// so the address is eight groups long, and the gap is filled with zeros.
///
/// Rejects: empty groups outside of a single `::`, more than one `::`, groups
/// longer than four digits or containing non-hex characters, and addresses that
/// do not come to exactly eight groups (an elision must stand for at least one).
pub fn parse(text: &str) -> Result<[u16; GROUPS], Error> {
    let mut groups = [0u16; GROUPS];
    let mut count = 0;
    let mut elision = None;

    let mut rest = text;
    if let Some(stripped) = rest.strip_prefix("::") {
        elision = Some(0);
        rest = stripped;
    }
    while !rest.is_empty() {
        let end = rest.find(':').unwrap_or(rest.len());
        let group = parse_group(&rest[..end])?;
        if count == GROUPS {
            return Err(malformed("too many groups"));
        }
        groups[count] = group;
        count += 1;

        rest = &rest[end..];
        if let Some(stripped) = rest.strip_prefix("::") {
            if elision.is_some() {
                return Err(malformed("multiple elisions"));
            }
            elision = Some(count);
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix(':') {
            if stripped.is_empty() {
                return Err(malformed("empty group"));
            }
            rest = stripped;
        }
    }

    match elision {
        None if count == GROUPS => {}
        None => return Err(malformed("too few groups")),
        Some(_) if count == GROUPS => return Err(malformed("too many groups")),
        Some(at) => {
            let pad = GROUPS - count;
            groups.copy_within(at..count, at + pad);
            groups[at..at + pad].fill(0);
        }
    }
    Ok(groups)
}

fn parse_group(group: &str) -> Result<u16, Error> {
    if group.is_empty() {
        return Err(malformed("empty group"));
    }
    let value = group.chars().try_fold(0u16, |n, c| {
        let digit = c.to_digit(16).ok_or_else(|| malformed("invalid digit"))?;
        Ok((n << 4) | digit as u16)
    })?;
    if group.len() > MAX_GROUP_DIGITS {
        return Err(malformed("group out of range"));
    }
    Ok(value)
}

impl FromStr for Ipv6Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, rest @ ..] = &self.0;
        write!(f, "{first:x}")?;
        for group in rest {
            write!(f, ":{group:x}")?;
        }
        Ok(())
    }
}

impl From<[u16; GROUPS]> for Ipv6Address {
    fn from(groups: [u16; GROUPS]) -> Self {
        Self(groups)
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr.segments())
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(addr: Ipv6Address) -> Self {
        Ipv6Addr::from(addr.0)
    }
}

impl Write for Ipv6Address {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        for group in &self.0 {
            group.write(buf);
        }
    }
}

impl Read for Ipv6Address {
    type Cfg = ();
    const FIXED_SIZE: Option<usize> = Some(Self::SIZE);

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        at_least(buf, Self::SIZE)?;
        let mut groups = [0u16; GROUPS];
        for group in groups.iter_mut() {
            *group = u16::read(buf)?;
        }
        Ok(Self(groups))
    }
}

impl FixedSize for Ipv6Address {
    const SIZE: usize = GROUPS * u16::SIZE;
}

impl Address for Ipv6Address {
    const FAMILY: Family = Family::V6;
}
