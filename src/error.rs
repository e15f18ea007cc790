//! Error types for address parsing and subnet arithmetic.

use thiserror::Error;

/// Errors raised by the codec, the mask engine and the subnet calculator.
///
/// Encoding fails loudly with one of these. Decoding a buffer of an
/// unsupported length does not: [`crate::codec::decode`] returns `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid ip address: {0}")]
    InvalidAddress(String),

    #[error("invalid CIDR subnet: {0}")]
    InvalidCidr(String),

    #[error("family must be ipv4 or ipv6, got: {0}")]
    InvalidFamily(String),

    #[error("subnet arithmetic needs an IPv4 address, got: {0}")]
    NotIpv4(String),

    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}
