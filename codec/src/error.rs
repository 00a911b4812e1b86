//! Error types for codec operations

use crate::types::family::Family;
use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("out of bounds")]
    OutOfBounds,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("malformed {0} address: {1}")]
    MalformedAddress(Family, &'static str), // family, reason
    #[error("unknown address family: {0}")]
    UnknownFamily(u8),
}
