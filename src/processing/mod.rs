//! Address arithmetic.
//!
//! - [`mask`] - prefix-length masks and AND / NOT / OR
//! - [`subnet`] - IPv4 subnet ranges and CIDR parsing
//! - [`classify`] - loopback / private / public and cross-family equality

pub mod classify;
pub mod mask;
mod subnet;

// Re-export public functions
pub use classify::{is_equal, is_loopback, is_private, is_public, loopback};
pub use mask::{from_prefix_len, mask, mask_from_prefix_len, not, or};
pub use subnet::{cidr, cidr_subnet, mask_length, subnet};
