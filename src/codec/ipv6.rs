//! IPv6 colon-hex text handling.
//!
//! Parsing accepts one `::` zero run and a trailing embedded dotted IPv4.
//! Formatting compresses the *first* run of two or more zero words, which is
//! not always the longest run (see `DESIGN.md`).

use super::ipv4;
use crate::error::AddressError;
use crate::models::V6_LEN;
use lazy_static::lazy_static;
use regex::Regex;

const V6_WORDS: usize = V6_LEN / 2;

lazy_static! {
    static ref GROUP_RE: Regex = Regex::new(r"(?i)^[0-9a-f]{1,4}$").expect("Invalid Regex?");
    static ref EMBEDDED_V4_RE: Regex =
        Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("Invalid Regex?");
    static ref ZERO_RUN_RE: Regex = Regex::new(r"(^|:)0(:0)*:0(:|$)").expect("Invalid Regex?");
    static ref COLON_RUN_RE: Regex = Regex::new(r":{3,4}").expect("Invalid Regex?");
}

/// True when `text` is a well formed IPv6 address.
pub fn is_format(text: &str) -> bool {
    parse(text).is_ok()
}

/// Parse colon-hex text into 16 bytes.
pub fn parse(text: &str) -> Result<[u8; V6_LEN], AddressError> {
    let invalid = || AddressError::InvalidAddress(text.to_string());
    if !text.contains(':') {
        return Err(invalid());
    }

    let mut halves = text.split("::");
    let head = halves.next().unwrap_or_default();
    let tail = halves.next();
    if halves.next().is_some() {
        // more than one "::"
        return Err(invalid());
    }

    let words = match tail {
        None => {
            let words = parse_groups(head, true).ok_or_else(invalid)?;
            if words.len() != V6_WORDS {
                return Err(invalid());
            }
            words
        }
        Some(tail) => {
            let mut words = parse_groups(head, false).ok_or_else(invalid)?;
            let tail_words = parse_groups(tail, true).ok_or_else(invalid)?;
            if words.len() + tail_words.len() >= V6_WORDS {
                return Err(invalid());
            }
            words.resize(V6_WORDS - tail_words.len(), 0);
            words.extend(tail_words);
            words
        }
    };

    let mut bytes = [0u8; V6_LEN];
    for (i, word) in words.iter().enumerate() {
        bytes[2 * i..2 * i + 2].copy_from_slice(&word.to_be_bytes());
    }

    log::trace!("ipv6::parse({text}) = {bytes:?}");
    Ok(bytes)
}

/// Parse the colon separated groups on one side of a `::`.
///
/// Only the final group of the address may be an embedded IPv4, which expands to two words.
fn parse_groups(part: &str, v4_allowed: bool) -> Option<Vec<u16>> {
    if part.is_empty() {
        return Some(Vec::new());
    }

    let groups: Vec<&str> = part.split(':').collect();
    let last = groups.len() - 1;
    let mut words = Vec::with_capacity(V6_WORDS);

    for (i, group) in groups.iter().enumerate() {
        if GROUP_RE.is_match(group) {
            words.push(u16::from_str_radix(group, 16).ok()?);
        } else if v4_allowed && i == last && EMBEDDED_V4_RE.is_match(group) {
            let v4 = ipv4::parse(group).ok()?;
            words.push(u16::from_be_bytes([v4[0], v4[1]]));
            words.push(u16::from_be_bytes([v4[2], v4[3]]));
        } else {
            return None;
        }
    }

    (words.len() <= V6_WORDS).then_some(words)
}

/// Colon-hex text for 16 bytes, lowercase, with the first zero run compressed.
pub fn format(bytes: &[u8; V6_LEN]) -> String {
    let joined = bytes
        .chunks(2)
        .map(|pair| format!("{:x}", u16::from_be_bytes([pair[0], pair[1]])))
        .collect::<Vec<String>>()
        .join(":");

    let collapsed = ZERO_RUN_RE.replace(&joined, "${1}::${3}");
    COLON_RUN_RE.replace(&collapsed, "::").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(w: [u16; 8]) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (i, word) in w.iter().enumerate() {
            out[2 * i..2 * i + 2].copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    #[test]
    fn test_parse_full() {
        assert_eq!(
            parse("2001:db8:0:0:0:0:2:1").unwrap(),
            words([0x2001, 0xdb8, 0, 0, 0, 0, 2, 1])
        );
        assert_eq!(
            parse("FFFF:ffff:0:0:0:0:0:ABCD").unwrap(),
            words([0xffff, 0xffff, 0, 0, 0, 0, 0, 0xabcd])
        );
    }

    #[test]
    fn test_parse_compressed() {
        assert_eq!(parse("::").unwrap(), [0u8; 16]);
        assert_eq!(parse("::1").unwrap(), words([0, 0, 0, 0, 0, 0, 0, 1]));
        assert_eq!(parse("fe80::").unwrap(), words([0xfe80, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(
            parse("2001:db8::2:1").unwrap(),
            words([0x2001, 0xdb8, 0, 0, 0, 0, 2, 1])
        );
        assert_eq!(
            parse("1:2:3:4::6:7:8").unwrap(),
            words([1, 2, 3, 4, 0, 6, 7, 8])
        );
    }

    #[test]
    fn test_parse_embedded_v4() {
        assert_eq!(
            parse("::ffff:127.0.0.1").unwrap(),
            words([0, 0, 0, 0, 0, 0xffff, 0x7f00, 1])
        );
        assert_eq!(
            parse("::1.2.3.4").unwrap(),
            words([0, 0, 0, 0, 0, 0, 0x0102, 0x0304])
        );
        assert_eq!(
            parse("0:0:0:0:0:ffff:10.0.0.1").unwrap(),
            words([0, 0, 0, 0, 0, 0xffff, 0x0a00, 1])
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "1::2::3",
            ":::",
            "1:::2",
            ":1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:",
            "1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:8:9",
            "1:2:3:4::5:6:7:8",
            "12345::",
            "g::1",
            "1.2.3.4::",
            "::1.2.3.4:1",
            "::ffff:1.2.3",
            "abcd",
            "",
        ] {
            assert!(parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_format_compression() {
        assert_eq!(format(&words([0, 0, 0, 0, 0, 0, 0, 1])), "::1");
        assert_eq!(format(&[0u8; 16]), "::");
        assert_eq!(format(&words([1, 0, 0, 0, 0, 0, 0, 0])), "1::");
        assert_eq!(
            format(&words([0xfe80, 0, 0, 0, 0x1234, 0, 0, 1])),
            "fe80::1234:0:0:1"
        );
        assert_eq!(
            format(&words([0x2001, 0xdb8, 0, 1, 0, 0, 0, 1])),
            "2001:db8:0:1::1"
        );
    }

    #[test]
    fn test_format_first_run_wins() {
        // the shorter leading run is compressed, not the longer one
        assert_eq!(format(&words([1, 0, 0, 2, 0, 0, 0, 3])), "1::2:0:0:0:3");
    }

    #[test]
    fn test_format_single_zero_word_kept() {
        assert_eq!(
            format(&words([1, 0, 2, 3, 4, 5, 6, 7])),
            "1:0:2:3:4:5:6:7"
        );
    }

    #[test]
    fn test_format_mapped() {
        assert_eq!(
            format(&words([0, 0, 0, 0, 0, 0xffff, 0x0102, 0x0304])),
            "::ffff:102:304"
        );
    }
}
