//! Encode network endpoints compactly.
//!
//! # Overview
//!
//! A binary codec for IPv4 and IPv6 addresses, transport ports, and address+port pairs,
//! designed to be embedded as a field encoder in a larger binary format. Every value is
//! handled in three phases:
//! - [EncodeSize] reports how many bytes a value needs, so a buffer can be sized up front
//! - [Write] writes exactly that many bytes
//! - [Read] reads them back, advancing the cursor by exactly the same amount
//!
//! # Wire Format
//!
//! | Value | Bytes | Encoding |
//! |---|---|---|
//! | Port (`u16`) | 2 | little-endian |
//! | [Ipv4Address] | 4 | one byte per dotted-decimal group |
//! | [Ipv6Address] | 16 | eight little-endian `u16` groups, in textual order |
//! | [Family] | 1 | the literal byte `4` or `6` |
//! | [Endpoint] | 6 or 18 | address, then port |
//! | [IpEndpoint] | 7 or 19 | family, then the matching [Endpoint] |
//!
//! # Text
//!
//! Addresses are parsed from their textual form with [str::parse] and rendered with
//! [std::fmt::Display]. IPv6 input may use a single `::` elision and either letter case;
//! output is always lowercase and fully expanded (`::1` renders as `0:0:0:0:0:0:0:1`).
//! Malformed text is rejected with [Error::MalformedAddress].
//!
//! # Example
//!
//! ```
//! use endpoint_codec::{DecodeExt, Encode, EncodeSize, Family, IpEndpoint};
//!
//! let endpoint = IpEndpoint::new(Family::V6, "1:2::7:8", 0x1234).unwrap();
//! assert_eq!(endpoint.encode_size(), 19);
//!
//! let encoded = endpoint.encode();
//! assert_eq!(encoded[0], 6);
//! assert_eq!(&encoded[17..], &[0x34, 0x12]);
//!
//! let decoded = IpEndpoint::decode(encoded).unwrap();
//! assert_eq!(decoded.address(), "1:2:0:0:0:0:7:8");
//! assert_eq!(decoded.port(), 0x1234);
//! ```

pub mod codec;
pub mod error;
pub mod types;
pub mod util;

// Re-export main types and traits
pub use codec::{
    Decode, DecodeExt, Encode, EncodeFixed, EncodeSize, FixedSize, Read, ReadExt, Write,
};
pub use error::Error;
pub use types::{
    endpoint::{Endpoint, Ipv4Endpoint, Ipv6Endpoint},
    family::Family,
    ip::IpEndpoint,
    ipv4::Ipv4Address,
    ipv6::Ipv6Address,
    Address,
};
