//! Terminal output utilities.
//!
//! Prints the summary table to stdout with quoted, aligned fields.

use crate::models::SummaryRecord;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One aligned line per record, without the header.
pub fn format_summary_row(record: &SummaryRecord) -> String {
    format!(
        "{network},{cidr},{total},{usable}",
        network = format_field(record.network, 17),
        cidr = format_field(record.cidr(), 6),
        total = format_field(record.total_addresses, 17),
        usable = format_field(record.total_usable_hosts, 20),
    )
}

/// Print the summary table to stdout.
pub fn print_summary(records: &[SummaryRecord]) {
    println!(
        "{}",
        r#"        "Network", "CIDR",  "Total Addresses", "Total Usable Hosts""#.bold()
    );
    for record in records {
        println!("{}", format_summary_row(record));
    }
    println!(
        "#{}# {} distinct subnets",
        "NOTE".on_blue(),
        records.len()
    );
}
