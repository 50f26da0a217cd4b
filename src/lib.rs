// cargo watch -x 'fmt' -x 'run -- analyze --input ip_data.xlsx'

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use models::{DuplicatePolicy, RecordOrder, Summary};
use output::SummaryFormat;
use std::error::Error;
use std::path::PathBuf;

/// What the `analyze` command reads and writes.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: SummaryFormat,
    pub write_summary: bool,
    /// Report path, None to skip the report.
    pub report: Option<PathBuf>,
    pub chart: Option<PathBuf>,
    pub policy: DuplicatePolicy,
    pub order: RecordOrder,
    pub print: bool,
}

/// Read the input sheet, summarize it and write every requested output.
///
/// Malformed rows are skipped with a warning. Unreadable input, failed
/// writes and a report over an empty summary are errors.
pub fn analyze(opts: &AnalyzeOptions) -> Result<Summary, Box<dyn Error>> {
    let rows = input::read_rows(&opts.input)?;

    let summary = processing::analyze_subnets(&rows, opts.policy, opts.order);

    if opts.print {
        output::print_summary(&summary.records);
    }

    if opts.write_summary {
        output::write_summary(&summary.records, &opts.output, opts.format)
            .map_err(|e| format!("failed to write summary: {e}"))?;
    }

    if let Some(chart) = &opts.chart {
        if opts.write_summary {
            output::plot_hosts(&opts.output, chart)?;
        } else {
            output::draw_hosts_chart(&summary.records, chart)?;
            log::info!("→ Saved chart to {}", chart.display());
        }
    }

    let overlaps = processing::find_overlaps(&summary.networks());
    processing::log_overlaps(&overlaps);

    if let Some(report) = &opts.report {
        output::write_report(&summary.records, &overlaps, report)?;
    }

    Ok(summary)
}
