//! Terminal output utilities.

use crate::models::Subnet;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Multi-line summary of a subnet with highlighted labels.
pub fn format_subnet(s: &Subnet) -> String {
    let rows = [
        ("Network", s.network_address.clone()),
        ("Mask", format!("{} (/{})", s.subnet_mask, s.subnet_mask_length)),
        ("First", s.first_address.clone()),
        ("Last", s.last_address.clone()),
        ("Broadcast", s.broadcast_address.clone()),
        ("Hosts", format!("{} of {}", s.num_hosts, s.length)),
    ];

    let mut out = format!("{}\n", s.to_string().bold());
    for (label, value) in rows {
        out.push_str(&format!("  {:<10} {}\n", label.cyan(), value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::cidr_subnet;

    #[test]
    fn test_format_field_pads_address() {
        assert_eq!(format_field("10.0.0.1", 17), "       \"10.0.0.1\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("10.100.200.250", 5), "\"10.100.200.250\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(254u64, 6), " \"254\"");
    }

    #[test]
    fn test_format_subnet() {
        colored::control::set_override(false);
        let s = cidr_subnet("10.0.0.0/31").unwrap();
        let text = format_subnet(&s);
        assert!(text.starts_with("10.0.0.0/31\n"));
        assert!(text.contains("First      10.0.0.0\n"));
        assert!(text.contains("Last       10.0.0.1\n"));
        assert!(text.contains("Hosts      2 of 2\n"));
    }
}
