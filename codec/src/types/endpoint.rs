//! An address paired with a port.
//!
//! Encoded as the address bytes immediately followed by the 2-byte port, with
//! no framing: the width is implied by the address type.

use super::{family::Family, ipv4::Ipv4Address, ipv6::Ipv6Address, Address};
use crate::{util::at_least, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};
use std::{
    fmt,
    net::{SocketAddrV4, SocketAddrV6},
};

/// An address of type `A` and a transport port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Endpoint<A: Address> {
    pub address: A,
    pub port: u16,
}

/// An IPv4 address and port (6 bytes).
pub type Ipv4Endpoint = Endpoint<Ipv4Address>;

/// An IPv6 address and port (18 bytes).
pub type Ipv6Endpoint = Endpoint<Ipv6Address>;

impl<A: Address> Endpoint<A> {
    pub const fn new(address: A, port: u16) -> Self {
        Self { address, port }
    }

    /// Parses `address` as text of family `A::FAMILY`.
    pub fn parse(address: &str, port: u16) -> Result<Self, Error> {
        Ok(Self::new(address.parse()?, port))
    }

    /// Returns the family of the address.
    pub const fn family(&self) -> Family {
        A::FAMILY
    }
}

impl<A: Address> fmt::Display for Endpoint<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match A::FAMILY {
            Family::V4 => write!(f, "{}:{}", self.address, self.port),
            Family::V6 => write!(f, "[{}]:{}", self.address, self.port),
        }
    }
}

impl<A: Address> Write for Endpoint<A> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.address.write(buf);
        self.port.write(buf);
    }
}

impl<A: Address> Read for Endpoint<A> {
    type Cfg = ();
    const FIXED_SIZE: Option<usize> = Some(Self::SIZE);

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        at_least(buf, Self::SIZE)?;
        let address = A::read(buf)?;
        let port = u16::read(buf)?;
        Ok(Self { address, port })
    }
}

impl<A: Address> FixedSize for Endpoint<A> {
    const SIZE: usize = A::SIZE + u16::SIZE;
}

impl From<SocketAddrV4> for Ipv4Endpoint {
    fn from(addr: SocketAddrV4) -> Self {
        Self::new((*addr.ip()).into(), addr.port())
    }
}

impl From<Ipv4Endpoint> for SocketAddrV4 {
    fn from(endpoint: Ipv4Endpoint) -> Self {
        SocketAddrV4::new(endpoint.address.into(), endpoint.port)
    }
}

// Flow info and scope id have no place on the wire and are dropped.
impl From<SocketAddrV6> for Ipv6Endpoint {
    fn from(addr: SocketAddrV6) -> Self {
        Self::new((*addr.ip()).into(), addr.port())
    }
}

impl From<Ipv6Endpoint> for SocketAddrV6 {
    fn from(endpoint: Ipv6Endpoint) -> Self {
        SocketAddrV6::new(endpoint.address.into(), endpoint.port, 0, 0)
    }
}
