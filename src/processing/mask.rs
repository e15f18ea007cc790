//! Prefix-length masks and bitwise address algebra.
//!
//! Every operation returns a new address; inputs are never modified.

use crate::codec;
use crate::error::AddressError;
use crate::models::{BinaryAddress, Family, V4_LEN, V6_LEN};

/// Prefix lengths above this can only describe an IPv6 mask.
pub const MAX_V4_PREFIX: u8 = 32;

/// Build a mask of `prefix_len` leading one bits.
///
/// `family` defaults to IPv4; a prefix longer than 32 always yields an IPv6 mask.
///
/// # Examples
/// ```
/// use ip_subnet_codec::processing::mask_from_prefix_len;
/// use ip_subnet_codec::models::{BinaryAddress, Family};
/// assert_eq!(
///     mask_from_prefix_len(20, Some(Family::V4)),
///     BinaryAddress::V4([255, 255, 240, 0])
/// );
/// ```
pub fn mask_from_prefix_len(prefix_len: u8, family: Option<Family>) -> BinaryAddress {
    let family = if prefix_len > MAX_V4_PREFIX {
        Family::V6
    } else {
        family.unwrap_or_default()
    };

    let mut mask = BinaryAddress::zeroed(family);
    let mut remaining = prefix_len;
    for byte in mask.as_bytes_mut() {
        let bits = remaining.min(8);
        remaining -= bits;
        *byte = (!(0xffu32 >> bits) & 0xff) as u8;
    }
    mask
}

/// Text form of [`mask_from_prefix_len`].
pub fn from_prefix_len(prefix_len: u8, family: Option<Family>) -> String {
    mask_from_prefix_len(prefix_len, family).to_string()
}

/// Bitwise AND of an address and a mask.
///
/// Mixed families:
/// - IPv6 address, IPv4 mask: only the low 4 bytes are masked, all higher bytes are zero.
/// - IPv4 address, IPv6 mask: the result is `::ffff:` followed by the address masked
///   with the low 4 mask bytes.
pub fn mask_binary(addr: &BinaryAddress, mask: &BinaryAddress) -> BinaryAddress {
    match (addr, mask) {
        (BinaryAddress::V4(a), BinaryAddress::V4(m)) => {
            BinaryAddress::V4(std::array::from_fn(|i| a[i] & m[i]))
        }
        (BinaryAddress::V6(a), BinaryAddress::V6(m)) => {
            BinaryAddress::V6(std::array::from_fn(|i| a[i] & m[i]))
        }
        (BinaryAddress::V6(a), BinaryAddress::V4(m)) => {
            let offset = V6_LEN - V4_LEN;
            let mut out = [0u8; V6_LEN];
            for i in 0..V4_LEN {
                out[offset + i] = a[offset + i] & m[i];
            }
            BinaryAddress::V6(out)
        }
        (BinaryAddress::V4(a), BinaryAddress::V6(m)) => {
            let offset = V6_LEN - V4_LEN;
            let mut out = [0u8; V6_LEN];
            out[10] = 0xff;
            out[11] = 0xff;
            for i in 0..V4_LEN {
                out[offset + i] = a[i] & m[offset + i];
            }
            BinaryAddress::V6(out)
        }
    }
}

/// Text form of [`mask_binary`]: network address of `addr` under `mask`.
pub fn mask(addr: &str, mask: &str) -> Result<String, AddressError> {
    let addr = codec::encode(addr)?;
    let mask = codec::encode(mask)?;
    Ok(mask_binary(&addr, &mask).to_string())
}

/// Bitwise NOT over the whole address.
pub fn not_binary(addr: &BinaryAddress) -> BinaryAddress {
    let mut out = *addr;
    for byte in out.as_bytes_mut() {
        *byte = !*byte;
    }
    out
}

/// Text form of [`not_binary`].
pub fn not(addr: &str) -> Result<String, AddressError> {
    Ok(not_binary(&codec::encode(addr)?).to_string())
}

/// Bitwise OR. With mixed families the shorter address is ORed into the low
/// bytes of the longer one and the longer one's high bytes pass through.
pub fn or_binary(a: &BinaryAddress, b: &BinaryAddress) -> BinaryAddress {
    let (long, short) = if b.len() > a.len() { (b, a) } else { (a, b) };

    let mut out = *long;
    let offset = long.len() - short.len();
    for (byte, other) in out.as_bytes_mut()[offset..]
        .iter_mut()
        .zip(short.as_bytes())
    {
        *byte |= other;
    }
    out
}

/// Text form of [`or_binary`].
pub fn or(a: &str, b: &str) -> Result<String, AddressError> {
    let a = codec::encode(a)?;
    let b = codec::encode(b)?;
    Ok(or_binary(&a, &b).to_string())
}
