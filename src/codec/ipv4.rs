//! IPv4 dotted-decimal text handling.
//!
//! Components may be decimal, `0`-prefixed octal or `0x`-prefixed hex, and
//! shorthand forms with fewer than four components are accepted: the last
//! component always lands in the last byte (`"127.1"` is `127.0.0.1`).

use crate::error::AddressError;
use crate::models::V4_LEN;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref V4_RE: Regex =
        Regex::new(r"(?i)^((0x[0-9a-f]{1,2}|[0-9]{1,4})\.){0,3}(0x[0-9a-f]{1,2}|[0-9]{1,4})$")
            .expect("Invalid Regex?");
}

/// True when `text` is a well formed dotted IPv4 address.
pub fn is_format(text: &str) -> bool {
    parse(text).is_ok()
}

/// Parse dotted IPv4 text into 4 bytes.
pub fn parse(text: &str) -> Result<[u8; V4_LEN], AddressError> {
    if !V4_RE.is_match(text) {
        return Err(AddressError::InvalidAddress(text.to_string()));
    }

    let sections: Vec<&str> = text.split('.').collect();
    let last = sections.len() - 1;
    let mut bytes = [0u8; V4_LEN];

    for (i, section) in sections.iter().enumerate() {
        let index = if i == last { V4_LEN - 1 } else { i };
        bytes[index] = parse_component(section)
            .ok_or_else(|| AddressError::InvalidAddress(text.to_string()))?;
    }

    log::trace!("ipv4::parse({text}) = {bytes:?}");
    Ok(bytes)
}

/// Parse one component and keep its low 8 bits.
fn parse_component(section: &str) -> Option<u8> {
    let (digits, radix) = match section.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => match rest.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16),
            None => (rest, 8),
        },
        _ => (section, 10),
    };
    u32::from_str_radix(digits, radix)
        .ok()
        .map(|value| (value & 0xff) as u8)
}

/// Dotted-decimal text for 4 bytes.
pub fn format(bytes: &[u8; V4_LEN]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<String>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_format() {
        assert!(is_format("127.0.0.1"));
        assert!(is_format("127.1"));
        assert!(is_format("127"));
        assert!(is_format("0x7f.0.0.1"));
        assert!(is_format("0X7F.1"));
        assert!(!is_format("1.2.3.4.5"));
        assert!(!is_format("1.2.3."));
        assert!(!is_format("::1"));
        assert!(!is_format("12345"));
        assert!(!is_format(""));
        assert!(!is_format("08.1.1.1"));
        assert!(!is_format("1.1.1.019"));
        assert!(is_format("07.1.1.1"));
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(parse("127.1").unwrap(), [127, 0, 0, 1]);
        assert_eq!(parse("127").unwrap(), [0, 0, 0, 127]);
        assert_eq!(parse("10.1.2").unwrap(), [10, 1, 0, 2]);
        assert_eq!(parse("192.168.1.5").unwrap(), [192, 168, 1, 5]);
    }

    #[test]
    fn test_parse_radix() {
        assert_eq!(parse("0x7f.0.0.01").unwrap(), [127, 0, 0, 1]);
        assert_eq!(parse("010.0.0.1").unwrap(), [8, 0, 0, 1]);
        assert_eq!(parse("0xff.0377.0.0").unwrap(), [255, 255, 0, 0]);
        assert_eq!(parse("0.0.0.0").unwrap(), [0, 0, 0, 0]);
        assert_eq!(parse("00.0.0.0").unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_masks_large_values() {
        assert_eq!(parse("256.257.1.1").unwrap(), [0, 1, 1, 1]);
        assert_eq!(parse("1.9999").unwrap(), [1, 0, 0, 15]);
    }

    #[test]
    fn test_parse_rejects_bad_octal() {
        assert!(matches!(
            parse("09.1.1.1"),
            Err(AddressError::InvalidAddress(_))
        ));
        assert!(parse("1.1.1.08").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(format(&[127, 0, 0, 1]), "127.0.0.1");
        assert_eq!(format(&[255, 255, 255, 0]), "255.255.255.0");
    }
}
