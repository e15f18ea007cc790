//! Host interface address selection.
//!
//! Enumerating interfaces is left to an [`InterfaceProvider`]; this module only
//! picks an address out of what the provider reports.

mod static_list;

pub use static_list::StaticInterfaces;

use crate::models::Family;
use serde::{Deserialize, Serialize};

/// One address assigned to an interface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub address: String,
    pub family: Family,
}

/// A named interface and its addresses, in the order the host reports them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    pub addresses: Vec<InterfaceAddress>,
}

/// Read-only source of the host's interfaces.
pub trait InterfaceProvider {
    fn network_interfaces(&self) -> Vec<NetworkInterface>;
}

/// Which address [`address`] should pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// First address of the family on this interface.
    Named(&'a str),
    /// First non-loopback public address.
    Public,
    /// First non-loopback private address.
    Private,
    /// First non-loopback address.
    Any,
}

impl<'a> Selector<'a> {
    /// `"public"`, `"private"`, an interface name, or nothing.
    pub fn parse(name: Option<&'a str>) -> Selector<'a> {
        match name {
            None => Selector::Any,
            Some("public") => Selector::Public,
            Some("private") => Selector::Private,
            Some(name) => Selector::Named(name),
        }
    }
}

/// Select an interface address of `family` (IPv4 when `None`).
///
/// A named interface yields its first address of the family or `None`. The
/// other selectors scan every interface in order and fall back to the
/// family's loopback literal.
pub fn address<P: InterfaceProvider + ?Sized>(
    provider: &P,
    selector: Selector<'_>,
    family: Option<Family>,
) -> Option<String> {
    let family = family.unwrap_or_default();
    let interfaces = provider.network_interfaces();

    if let Selector::Named(name) = selector {
        return interfaces
            .iter()
            .find(|nic| nic.name == name)
            .and_then(|nic| nic.addresses.iter().find(|a| a.family == family))
            .map(|a| a.address.clone());
    }

    let found = interfaces.iter().find_map(|nic| {
        nic.addresses
            .iter()
            .find(|details| details.family == family && accepts(selector, &details.address))
            .map(|details| details.address.clone())
    });

    Some(found.unwrap_or_else(|| {
        log::debug!("No {family} address for {selector:?}, using loopback");
        family.loopback().to_string()
    }))
}

fn accepts(selector: Selector<'_>, address: &str) -> bool {
    let addr = match crate::codec::encode(address) {
        Ok(addr) => addr,
        Err(e) => {
            log::warn!("Skipping interface address: {e}");
            return false;
        }
    };
    if addr.is_loopback() {
        return false;
    }
    match selector {
        Selector::Public => addr.is_public(),
        Selector::Private => addr.is_private(),
        Selector::Any | Selector::Named(_) => true,
    }
}
