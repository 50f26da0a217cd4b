//! Output writers for the subnet summary.
//!
//! This module handles everything written at the process boundary:
//! - [`summary`] - CSV/JSON summary table
//! - [`report`] - Markdown analysis report
//! - [`chart`] - SVG bar chart of usable hosts
//! - [`terminal`] - Aligned table on stdout

mod chart;
mod report;
mod summary;
mod terminal;

pub use chart::{draw_hosts_chart, plot_hosts};
pub use report::{render_report, write_report};
pub use summary::{read_summary, write_summary, SummaryFormat};
pub use terminal::{format_field, format_summary_row, print_summary};
