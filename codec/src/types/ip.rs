//! An endpoint of either family behind a single version byte.
//!
//! The encoding is the [Family] tag (`4` or `6`) followed by the matching
//! [Endpoint] encoding, for 7 or 19 bytes in total.

use super::{
    endpoint::{Ipv4Endpoint, Ipv6Endpoint},
    family::Family,
    ipv4::Ipv4Address,
    ipv6::Ipv6Address,
};
use crate::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};
use std::{fmt, net::SocketAddr};
use tracing::debug;

/// An IPv4 or IPv6 endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum IpEndpoint {
    V4(Ipv4Endpoint),
    V6(Ipv6Endpoint),
}

impl IpEndpoint {
    /// Parses `address` as text of the given `family`.
    ///
    /// The family is never inferred from the text: `"::1"` under [Family::V4]
    /// is rejected.
    pub fn new(family: Family, address: &str, port: u16) -> Result<Self, Error> {
        let endpoint = match family {
            Family::V4 => Ipv4Endpoint::parse(address, port).map(Self::V4),
            Family::V6 => Ipv6Endpoint::parse(address, port).map(Self::V6),
        };
        endpoint.inspect_err(|err| debug!(%family, address, ?err, "rejected endpoint"))
    }

    pub const fn family(&self) -> Family {
        match self {
            Self::V4(_) => Family::V4,
            Self::V6(_) => Family::V6,
        }
    }

    pub const fn port(&self) -> u16 {
        match self {
            Self::V4(endpoint) => endpoint.port,
            Self::V6(endpoint) => endpoint.port,
        }
    }

    /// Returns the address in text form (IPv6 fully expanded).
    pub fn address(&self) -> String {
        match self {
            Self::V4(endpoint) => endpoint.address.to_string(),
            Self::V6(endpoint) => endpoint.address.to_string(),
        }
    }
}

impl fmt::Display for IpEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(endpoint) => fmt::Display::fmt(endpoint, f),
            Self::V6(endpoint) => fmt::Display::fmt(endpoint, f),
        }
    }
}

impl From<Ipv4Endpoint> for IpEndpoint {
    fn from(endpoint: Ipv4Endpoint) -> Self {
        Self::V4(endpoint)
    }
}

impl From<Ipv6Endpoint> for IpEndpoint {
    fn from(endpoint: Ipv6Endpoint) -> Self {
        Self::V6(endpoint)
    }
}

impl From<SocketAddr> for IpEndpoint {
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(addr) => Self::V4(addr.into()),
            SocketAddr::V6(addr) => Self::V6(addr.into()),
        }
    }
}

impl From<IpEndpoint> for SocketAddr {
    fn from(endpoint: IpEndpoint) -> Self {
        match endpoint {
            IpEndpoint::V4(endpoint) => SocketAddr::V4(endpoint.into()),
            IpEndpoint::V6(endpoint) => SocketAddr::V6(endpoint.into()),
        }
    }
}

impl Write for IpEndpoint {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.family().write(buf);
        match self {
            Self::V4(endpoint) => endpoint.write(buf),
            Self::V6(endpoint) => endpoint.write(buf),
        }
    }
}

impl EncodeSize for IpEndpoint {
    #[inline]
    fn encode_size(&self) -> usize {
        Family::SIZE
            + match self {
                Self::V4(_) => Ipv4Endpoint::SIZE,
                Self::V6(_) => Ipv6Endpoint::SIZE,
            }
    }
}

impl Read for IpEndpoint {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        match Family::read(buf)? {
            Family::V4 => Ok(Self::V4(Ipv4Endpoint::read(buf)?)),
            Family::V6 => Ok(Self::V6(Ipv6Endpoint::read(buf)?)),
        }
    }
}

impl From<(Ipv4Address, u16)> for IpEndpoint {
    fn from((address, port): (Ipv4Address, u16)) -> Self {
        Self::V4(Ipv4Endpoint::new(address, port))
    }
}

impl From<(Ipv6Address, u16)> for IpEndpoint {
    fn from((address, port): (Ipv6Address, u16)) -> Self {
        Self::V6(Ipv6Endpoint::new(address, port))
    }
}
