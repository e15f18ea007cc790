// cargo watch -x 'fmt' -x 'test'

//! IP address codec and subnet arithmetic.
//!
//! Text is converted to a [`models::BinaryAddress`] by [`codec`], combined
//! and measured by [`processing`], and turned back into text by [`codec::decode`]
//! or `Display`.

pub mod codec;
pub mod error;
pub mod interfaces;
pub mod models;
pub mod output;
pub mod processing;

pub use codec::{decode, encode, encode_into, is_v4_format, is_v6_format};
pub use error::AddressError;
pub use interfaces::{address, InterfaceProvider, Selector, StaticInterfaces};
pub use models::{BinaryAddress, Family, Subnet};
pub use processing::{
    cidr, cidr_subnet, from_prefix_len, is_equal, is_loopback, is_private, is_public, loopback,
    mask, not, or, subnet,
};

/// Parse every CIDR string, stopping at the first invalid one.
pub fn parse_subnets<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<Subnet>, AddressError> {
    cidrs
        .iter()
        .map(|c| processing::cidr_subnet(c.as_ref()))
        .collect()
}
