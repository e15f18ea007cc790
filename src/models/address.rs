//! Binary address and address family types.
//!
//! [`BinaryAddress`] is the canonical network-byte-order form every piece of
//! arithmetic in this crate operates on. It can only hold 4 or 16 bytes.

use crate::codec;
use crate::error::AddressError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length in bytes of an IPv4 address.
pub const V4_LEN: usize = 4;
/// Length in bytes of an IPv6 address.
pub const V6_LEN: usize = 16;

/// Address family.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub enum Family {
    #[default]
    V4,
    V6,
}

impl Family {
    /// Parse a family name, falling back to [`Family::V4`] for anything unrecognised.
    pub fn parse_or_default(family: &str) -> Family {
        family.parse().unwrap_or_default()
    }

    /// Loopback literal used when no interface address matches.
    pub fn loopback(&self) -> &'static str {
        match self {
            Family::V4 => "127.0.0.1",
            Family::V6 => "fe80::1",
        }
    }
}

impl FromStr for Family {
    type Err = AddressError;

    /// Accepts `ipv4`, `ipv6`, `4` and `6`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ipv4" | "4" => Ok(Family::V4),
            "ipv6" | "6" => Ok(Family::V6),
            _ => Err(AddressError::InvalidFamily(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Family {
    type Error = AddressError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            4 => Ok(Family::V4),
            6 => Ok(Family::V6),
            _ => Err(AddressError::InvalidFamily(n.to_string())),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "ipv4"),
            Family::V6 => write!(f, "ipv6"),
        }
    }
}

impl Serialize for Family {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Family {
    fn deserialize<D>(deserializer: D) -> Result<Family, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Interface listings report the family either as "IPv4" or as 4.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawFamily {
            Number(u8),
            Text(String),
        }

        match RawFamily::deserialize(deserializer)? {
            RawFamily::Number(n) => Family::try_from(n).map_err(de::Error::custom),
            RawFamily::Text(s) => Family::from_str(&s).map_err(de::Error::custom),
        }
    }
}

/// An IPv4 (4 byte) or IPv6 (16 byte) address in network byte order.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum BinaryAddress {
    V4([u8; V4_LEN]),
    V6([u8; V6_LEN]),
}

impl BinaryAddress {
    /// Copy a 4 or 16 byte slice. Any other length yields `None`.
    pub fn from_slice(bytes: &[u8]) -> Option<BinaryAddress> {
        match bytes.len() {
            V4_LEN => {
                let mut b = [0u8; V4_LEN];
                b.copy_from_slice(bytes);
                Some(BinaryAddress::V4(b))
            }
            V6_LEN => {
                let mut b = [0u8; V6_LEN];
                b.copy_from_slice(bytes);
                Some(BinaryAddress::V6(b))
            }
            _ => None,
        }
    }

    /// All-zero address of the given family.
    pub fn zeroed(family: Family) -> BinaryAddress {
        match family {
            Family::V4 => BinaryAddress::V4([0; V4_LEN]),
            Family::V6 => BinaryAddress::V6([0; V6_LEN]),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            BinaryAddress::V4(b) => b,
            BinaryAddress::V6(b) => b,
        }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            BinaryAddress::V4(b) => b,
            BinaryAddress::V6(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Always false, an address is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn family(&self) -> Family {
        match self {
            BinaryAddress::V4(_) => Family::V4,
            BinaryAddress::V6(_) => Family::V6,
        }
    }

    /// True for the `::ffff:a.b.c.d` form.
    pub fn is_v4_mapped(&self) -> bool {
        match self {
            BinaryAddress::V4(_) => false,
            BinaryAddress::V6(b) => b[..10].iter().all(|&x| x == 0) && b[10] == 0xff && b[11] == 0xff,
        }
    }

    /// The IPv4 bytes of a native IPv4 or IPv4-mapped IPv6 address.
    pub fn ipv4_part(&self) -> Option<[u8; V4_LEN]> {
        match self {
            BinaryAddress::V4(b) => Some(*b),
            BinaryAddress::V6(b) if self.is_v4_mapped() => Some([b[12], b[13], b[14], b[15]]),
            BinaryAddress::V6(_) => None,
        }
    }
}

impl fmt::Display for BinaryAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryAddress::V4(b) => write!(f, "{}", codec::ipv4::format(b)),
            BinaryAddress::V6(b) => write!(f, "{}", codec::ipv6::format(b)),
        }
    }
}

impl FromStr for BinaryAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::encode(s)
    }
}

impl AsRef<[u8]> for BinaryAddress {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
