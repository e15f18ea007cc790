//! IPv4 text to and from a 32-bit integer, used by subnet range math.

use crate::error::AddressError;
use std::net::Ipv4Addr;

/// Fold decimal dotted IPv4 text into a `u32`.
///
/// Decimal only, and the number of octets is not checked: this is meant
/// for text that already went through the codec.
pub fn to_long(text: &str) -> Result<u32, AddressError> {
    text.split('.').try_fold(0u32, |acc, octet| {
        let octet: u32 = octet
            .parse()
            .map_err(|_| AddressError::InvalidAddress(text.to_string()))?;
        Ok(acc.wrapping_shl(8).wrapping_add(octet))
    })
}

/// Dotted-decimal text of a `u32`, high byte first.
pub fn from_long(ipl: u32) -> String {
    Ipv4Addr::from(ipl).to_string()
}
