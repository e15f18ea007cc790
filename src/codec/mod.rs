//! Text to binary address conversion.
//!
//! - [`ipv4`] - dotted IPv4 grammar, including legacy shorthand and radix prefixes
//! - [`ipv6`] - colon-hex grammar with `::` zero runs and embedded IPv4
//! - [`long`] - IPv4 text to and from a `u32`

pub mod ipv4;
pub mod ipv6;
pub mod long;

use crate::error::AddressError;
use crate::models::BinaryAddress;

/// Encode address text into its binary form.
///
/// The family is decided by which grammar matches; IPv4 is tried first, so
/// `"1"` is `0.0.0.1` and never an IPv6 group.
///
/// # Examples
/// ```
/// use ip_subnet_codec::codec::encode;
/// use ip_subnet_codec::models::BinaryAddress;
/// assert_eq!(encode("127.1").unwrap(), BinaryAddress::V4([127, 0, 0, 1]));
/// ```
pub fn encode(text: &str) -> Result<BinaryAddress, AddressError> {
    match ipv4::parse(text) {
        Ok(bytes) => Ok(BinaryAddress::V4(bytes)),
        Err(_) => ipv6::parse(text).map(BinaryAddress::V6),
    }
}

/// Encode address text into `buf` starting at `offset`, returning the number of bytes written.
///
/// Only `buf[offset..offset + len]` is written. Fails with
/// [`AddressError::BufferTooSmall`] when the address does not fit.
pub fn encode_into(text: &str, buf: &mut [u8], offset: usize) -> Result<usize, AddressError> {
    let addr = encode(text)?;
    let needed = offset.saturating_add(addr.len());
    let available = buf.len();
    let target = buf
        .get_mut(offset..needed)
        .ok_or(AddressError::BufferTooSmall { needed, available })?;
    target.copy_from_slice(addr.as_bytes());
    Ok(addr.len())
}

/// Decode `length` bytes of `buf` starting at `offset` into address text.
///
/// `length` defaults to the rest of the buffer. Returns `None` unless the
/// region is exactly 4 or 16 bytes and lies inside `buf`.
pub fn decode(buf: &[u8], offset: usize, length: Option<usize>) -> Option<String> {
    let length = length.unwrap_or_else(|| buf.len().saturating_sub(offset));
    let region = buf.get(offset..offset.checked_add(length)?)?;
    let text = BinaryAddress::from_slice(region).map(|addr| addr.to_string());
    if text.is_none() {
        log::debug!("decode: unsupported address length {length}");
    }
    text
}

/// True when `text` matches the IPv4 grammar.
pub fn is_v4_format(text: &str) -> bool {
    ipv4::is_format(text)
}

/// True when `text` is a well formed IPv6 address.
pub fn is_v6_format(text: &str) -> bool {
    ipv6::is_format(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_family_dispatch() {
        assert_eq!(encode("127.1").unwrap(), BinaryAddress::V4([127, 0, 0, 1]));
        assert_eq!(encode("1").unwrap(), BinaryAddress::V4([0, 0, 0, 1]));
        let mut one = [0u8; 16];
        one[15] = 1;
        assert_eq!(encode("::1").unwrap(), BinaryAddress::V6(one));
    }

    #[test]
    fn test_encode_invalid() {
        assert_eq!(
            encode("not an ip"),
            Err(AddressError::InvalidAddress("not an ip".to_string()))
        );
        assert!(encode("1.2.3.4/24").is_err());
        assert!(encode("").is_err());
    }

    #[test]
    fn test_format_predicates() {
        assert!(is_v4_format("192.168.0.1"));
        assert!(is_v4_format("0x7f.1"));
        assert!(!is_v4_format("08.1.1.1"));
        assert!(encode("08.1.1.1").is_err());
        assert!(!is_v4_format("::1"));

        assert!(is_v6_format("::1"));
        assert!(is_v6_format("::ffff:10.0.0.1"));
        assert!(is_v6_format("2001:db8::ff00:42:8329"));
        assert!(!is_v6_format("2001:db8::1::"));
        assert!(!is_v6_format("10.0.0.1"));
    }

    #[test]
    fn test_encode_into_offset() {
        let mut buf = [0xaau8; 8];
        assert_eq!(encode_into("10.0.0.1", &mut buf, 2).unwrap(), 4);
        assert_eq!(buf, [0xaa, 0xaa, 10, 0, 0, 1, 0xaa, 0xaa]);
    }

    #[test]
    fn test_encode_into_too_small() {
        let mut buf = [0u8; 16];
        assert_eq!(
            encode_into("::1", &mut buf, 4),
            Err(AddressError::BufferTooSmall {
                needed: 20,
                available: 16
            })
        );
        assert_eq!(buf, [0u8; 16]);
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(&[127, 0, 0, 1], 0, None).unwrap(), "127.0.0.1");
        let mut one = [0u8; 16];
        one[15] = 1;
        assert_eq!(decode(&one, 0, Some(16)).unwrap(), "::1");
    }

    #[test]
    fn test_decode_region() {
        let buf = [0, 0, 192, 168, 1, 1, 9];
        assert_eq!(decode(&buf, 2, Some(4)).unwrap(), "192.168.1.1");
        assert_eq!(decode(&buf, 3, None).unwrap(), "168.1.1.9");
    }

    #[test]
    fn test_decode_bad_length_is_none() {
        assert_eq!(decode(&[1, 2, 3], 0, None), None);
        assert_eq!(decode(&[1, 2, 3, 4, 5], 0, None), None);
        assert_eq!(decode(&[1, 2, 3, 4], 2, Some(4)), None);
        assert_eq!(decode(&[1, 2, 3, 4], 9, None), None);
    }

    #[test]
    fn test_round_trip_samples() {
        for text in [
            "0.0.0.0",
            "255.255.255.255",
            "10.20.30.40",
            "::",
            "::1",
            "fe80::1",
            "2001:db8::ff00:42:8329",
            "::ffff:7f00:1",
            "1:2:3:4:5:6:7:8",
        ] {
            let addr = encode(text).unwrap();
            assert_eq!(decode(addr.as_bytes(), 0, None).unwrap(), text);
            assert_eq!(encode(&addr.to_string()).unwrap(), addr);
        }
    }
}
