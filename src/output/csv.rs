//! CSV output formatting for subnet summaries.

use super::terminal::format_field;
use crate::models::Subnet;

/// Double any embedded quotes so the value survives being wrapped in quotes.
fn escape_csv_field(input: &str) -> String {
    input.replace('"', "\"\"")
}

/// Quoted, escaped, right-aligned CSV field.
fn csv_field<T: ToString>(value: T, width: usize) -> String {
    format_field(escape_csv_field(&value.to_string()), width)
}

/// CSV header matching [`subnet_csv_row`].
pub fn csv_header() -> String {
    [
        ("cidr", 20),
        ("network", 17),
        ("first", 17),
        ("last", 17),
        ("broadcast", 17),
        ("mask", 17),
        ("hosts", 12),
    ]
    .iter()
    .map(|(name, width)| csv_field(name, *width))
    .collect::<Vec<String>>()
    .join(",")
}

/// One subnet as a CSV row of quoted, right-aligned fields.
pub fn subnet_csv_row(s: &Subnet) -> String {
    format!(
        r#"{cidr},{network},{first},{last},{broadcast},{mask},{hosts}"#,
        cidr = csv_field(s, 20),
        network = csv_field(&s.network_address, 17),
        first = csv_field(&s.first_address, 17),
        last = csv_field(&s.last_address, 17),
        broadcast = csv_field(&s.broadcast_address, 17),
        mask = csv_field(&s.subnet_mask, 17),
        hosts = csv_field(s.num_hosts, 12),
    )
}

/// Print the header and one row per subnet to stdout.
pub fn subnets_print_csv(subnets: &[Subnet]) {
    log::info!("#Start subnets_print_csv() count={}", subnets.len());
    println!("{}", csv_header());
    for s in subnets {
        println!("{}", subnet_csv_row(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::cidr_subnet;

    #[test]
    fn test_subnet_csv_row() {
        let s = cidr_subnet("192.168.1.5/24").unwrap();
        let row = subnet_csv_row(&s);
        let fields: Vec<&str> = row.split(',').map(|f| f.trim()).collect();
        assert_eq!(
            fields,
            vec![
                "\"192.168.1.0/24\"",
                "\"192.168.1.0\"",
                "\"192.168.1.1\"",
                "\"192.168.1.254\"",
                "\"192.168.1.255\"",
                "\"255.255.255.0\"",
                "\"254\"",
            ]
        );
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("10.0.0.0/8"), "10.0.0.0/8");
        assert_eq!(escape_csv_field(r#"lab "a" net"#), r#"lab ""a"" net"#);
        assert_eq!(csv_field(r#"x"y"#, 8), r#"  "x""y""#);
    }

    #[test]
    fn test_csv_header_matches_row_width() {
        let s = cidr_subnet("10.0.0.0/8").unwrap();
        assert_eq!(csv_header().len(), subnet_csv_row(&s).len());
        assert_eq!(csv_header().split(',').count(), 7);
    }
}
