//! Output formatting for subnet summaries.
//!
//! - [`csv`] - CSV rows
//! - [`terminal`] - aligned, colored terminal output

mod csv;
mod terminal;

pub use csv::{csv_header, subnet_csv_row, subnets_print_csv};
pub use terminal::{format_field, format_subnet};
