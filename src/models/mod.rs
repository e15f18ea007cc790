//! Domain models for address arithmetic.
//!
//! - [`BinaryAddress`] - canonical 4 or 16 byte address
//! - [`Family`] - IPv4 / IPv6 tag
//! - [`Subnet`] - derived IPv4 subnet summary

mod address;
mod subnet;

// Re-export public types
pub use address::{BinaryAddress, Family, V4_LEN, V6_LEN};
pub use subnet::Subnet;
