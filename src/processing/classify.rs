//! Loopback / private / public classification and cross-family equality.
//!
//! IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are classified by their IPv4 part.

use crate::codec::encode;
use crate::error::AddressError;
use crate::models::{BinaryAddress, Family};

impl BinaryAddress {
    /// `127.0.0.0/8`, or for native IPv6 `::`, `::1` and anything starting with `fe80`.
    ///
    /// The `fe80` test looks at the first two bytes only, so it is looser than `fe80::/10`.
    pub fn is_loopback(&self) -> bool {
        match self.ipv4_part() {
            Some(v4) => v4[0] == 127,
            None => {
                let b = self.as_bytes();
                (b[0] == 0xfe && b[1] == 0x80)
                    || (b[..15].iter().all(|&x| x == 0) && (b[15] == 0 || b[15] == 1))
            }
        }
    }

    /// Loopback, RFC 1918, `169.254.0.0/16`, or IPv6 unique-local (`fc00::/7`).
    pub fn is_private(&self) -> bool {
        if self.is_loopback() {
            return true;
        }
        match self.ipv4_part() {
            Some([a, b, _, _]) => {
                a == 10
                    || (a == 192 && b == 168)
                    || (a == 172 && (16..=31).contains(&b))
                    || (a == 169 && b == 254)
            }
            None => matches!(self.as_bytes()[0], 0xfc | 0xfd),
        }
    }

    pub fn is_public(&self) -> bool {
        !self.is_private()
    }

    /// Equality that treats `::a.b.c.d` and `::ffff:a.b.c.d` as equal to `a.b.c.d`.
    pub fn is_equal(&self, other: &BinaryAddress) -> bool {
        match (self, other) {
            (BinaryAddress::V4(a), BinaryAddress::V4(b)) => a == b,
            (BinaryAddress::V6(a), BinaryAddress::V6(b)) => a == b,
            (BinaryAddress::V4(v4), BinaryAddress::V6(v6))
            | (BinaryAddress::V6(v6), BinaryAddress::V4(v4)) => {
                let word = u16::from_be_bytes([v6[10], v6[11]]);
                v6[..10].iter().all(|&x| x == 0)
                    && (word == 0 || word == 0xffff)
                    && v6[12..] == v4[..]
            }
        }
    }
}

pub fn is_loopback(addr: &str) -> Result<bool, AddressError> {
    Ok(encode(addr)?.is_loopback())
}

pub fn is_private(addr: &str) -> Result<bool, AddressError> {
    Ok(encode(addr)?.is_private())
}

pub fn is_public(addr: &str) -> Result<bool, AddressError> {
    Ok(encode(addr)?.is_public())
}

pub fn is_equal(a: &str, b: &str) -> Result<bool, AddressError> {
    Ok(encode(a)?.is_equal(&encode(b)?))
}

/// Loopback literal for a family name, defaulting to IPv4.
pub fn loopback(family: Option<&str>) -> Result<&'static str, AddressError> {
    let family = match family {
        Some(name) => name.parse::<Family>()?,
        None => Family::default(),
    };
    Ok(family.loopback())
}
