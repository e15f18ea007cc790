//! IPv4 subnet summary model.

use super::BinaryAddress;
use crate::codec::long::to_long;
use crate::error::AddressError;
use crate::processing::mask;
use serde::Serialize;

/// Immutable summary of an IPv4 subnet, computed once from an address and a mask.
///
/// Built by [`crate::processing::subnet`] and [`crate::processing::cidr_subnet`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// Address with all host bits cleared.
    pub network_address: String,
    /// First usable host (the network address itself for /31 and /32).
    pub first_address: String,
    /// Last usable host (the broadcast address itself for /31 and /32).
    pub last_address: String,
    /// Address with all host bits set.
    pub broadcast_address: String,
    /// Mask in dotted-decimal form.
    pub subnet_mask: String,
    /// Prefix length measured from the mask.
    pub subnet_mask_length: u8,
    /// Number of usable hosts.
    pub num_hosts: u64,
    /// Number of addresses in the block.
    pub length: u64,
    #[serde(skip)]
    pub(crate) network: u32,
    #[serde(skip)]
    pub(crate) mask: BinaryAddress,
}

impl Subnet {
    /// Membership test: `other` belongs to the subnet when masking it yields the network address.
    ///
    /// Addresses whose masked form is not IPv4 never belong.
    pub fn contains(&self, other: &str) -> Result<bool, AddressError> {
        let masked = mask::mask_binary(&crate::codec::encode(other)?, &self.mask);
        match masked {
            BinaryAddress::V4(_) => Ok(self.network == to_long(&masked.to_string())?),
            BinaryAddress::V6(_) => Ok(false),
        }
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network_address, self.subnet_mask_length)
    }
}
