//! Codec implementations for integers, address families, addresses, and endpoints.

use crate::{FixedSize, Read, Write};
use std::{fmt::Display, str::FromStr};

pub mod endpoint;
pub mod family;
pub mod ip;
pub mod ipv4;
pub mod ipv6;
pub mod primitives;

/// A fixed-width address of a single family.
///
/// Implemented by [ipv4::Ipv4Address] and [ipv6::Ipv6Address]; the composite
/// [endpoint::Endpoint] codec is generic over it.
pub trait Address:
    Write + Read<Cfg = ()> + FixedSize + Display + FromStr<Err = crate::Error> + Copy
{
    /// The family every value of this type belongs to.
    const FAMILY: family::Family;
}
