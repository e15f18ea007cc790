//! IPv4 subnet range calculation and CIDR parsing.

use super::mask::{mask_binary, mask_from_prefix_len};
use crate::codec::long::{from_long, to_long};
use crate::codec::encode;
use crate::error::AddressError;
use crate::models::{BinaryAddress, Subnet};

/// Subnet width in bits for IPv4.
const V4_BITS: u32 = 32;

/// Prefix length of a mask: whole `0xff` bytes count 8, then the leading
/// one bits of the first other byte, and nothing after it.
///
/// Non-contiguous masks are measured by their leading run only.
pub fn mask_length(mask: &BinaryAddress) -> u8 {
    let mut length = 0u8;
    for &byte in mask.as_bytes() {
        if byte == 0xff {
            length += 8;
        } else {
            length += byte.leading_ones() as u8;
            break;
        }
    }
    length
}

/// Compute the IPv4 subnet of `addr` under `mask`.
///
/// /31 and /32 have no reserved network or broadcast address: the first and
/// last address span the whole block and every address counts as a host.
///
/// # Examples
/// ```
/// use ip_subnet_codec::processing::subnet;
/// let s = subnet("192.168.1.134", "255.255.255.192").unwrap();
/// assert_eq!(s.network_address, "192.168.1.128");
/// assert_eq!(s.num_hosts, 62);
/// ```
pub fn subnet(addr: &str, mask: &str) -> Result<Subnet, AddressError> {
    let mask_bin = encode(mask)?;
    let network = match mask_binary(&encode(addr)?, &mask_bin) {
        network @ BinaryAddress::V4(_) => to_long(&network.to_string())?,
        network @ BinaryAddress::V6(_) => return Err(AddressError::NotIpv4(network.to_string())),
    };

    let subnet_mask_length = mask_length(&mask_bin);
    let length: u64 = 1 << (V4_BITS - subnet_mask_length as u32);
    let network_addr = network as u64;
    let broadcast = network_addr + length - 1;

    let (first, last, num_hosts) = if length <= 2 {
        (network_addr, broadcast, length)
    } else {
        (network_addr + 1, broadcast - 1, length - 2)
    };

    log::debug!(
        "subnet({addr}, {mask}) = {}/{subnet_mask_length} hosts={num_hosts}",
        from_long(network)
    );

    Ok(Subnet {
        network_address: from_long(network),
        first_address: from_long(first as u32),
        last_address: from_long(last as u32),
        broadcast_address: from_long(broadcast as u32),
        subnet_mask: mask_bin.to_string(),
        subnet_mask_length,
        num_hosts,
        length,
        network,
        mask: mask_bin,
    })
}

/// Split `address/prefix` text.
fn split_cidr(cidr: &str) -> Result<(&str, u8), AddressError> {
    let parts: Vec<&str> = cidr.split('/').collect();
    if parts.len() != 2 {
        return Err(AddressError::InvalidCidr(cidr.to_string()));
    }
    let prefix_len: u8 = parts[1]
        .trim()
        .parse()
        .map_err(|_| AddressError::InvalidCidr(cidr.to_string()))?;
    Ok((parts[0], prefix_len))
}

/// Parse `a.b.c.d/len` into its [`Subnet`].
pub fn cidr_subnet(cidr: &str) -> Result<Subnet, AddressError> {
    let (addr, prefix_len) = split_cidr(cidr)?;
    let mask = mask_from_prefix_len(prefix_len, None);
    subnet(addr, &mask.to_string())
}

/// Network address of a CIDR string.
///
/// Prefixes up to 32 build an IPv4 mask, so an IPv6 address is masked in its
/// low 4 bytes only; longer prefixes build an IPv6 mask.
pub fn cidr(cidr: &str) -> Result<String, AddressError> {
    let (addr, prefix_len) = split_cidr(cidr)?;
    let mask = mask_from_prefix_len(prefix_len, None);
    Ok(mask_binary(&encode(addr)?, &mask).to_string())
}
