//! Command line definition.

use crate::config::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_REPORT};
use crate::models::{DuplicatePolicy, RecordOrder};
use crate::output::plot_hosts;
use crate::output::SummaryFormat;
use crate::{analyze, AnalyzeOptions};
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "subnet-analyzer")]
#[command(about = "Analyze IP/subnet data & auto-generate report")]
pub struct CommandLine {
    /// Log debug details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize subnets, write the summary and the Markdown report
    #[command(alias = "a")]
    Analyze(AnalyzeArgs),
    /// Plot usable hosts per subnet from a written summary
    #[command(alias = "p")]
    Plot(PlotArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Excel, ODS or CSV file with 'IP Address' & 'Subnet Mask' columns
    #[arg(long, env = "SUBNET_ANALYZER_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Filename for CSV or JSON summary
    #[arg(long, env = "SUBNET_ANALYZER_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Emit JSON instead of CSV for the summary
    #[arg(long)]
    pub json: bool,

    /// Do not write the summary file
    #[arg(long)]
    pub skip_summary: bool,

    /// Do not generate the Markdown report
    #[arg(long)]
    pub skip_report: bool,

    /// Filename for the Markdown report
    #[arg(long, env = "SUBNET_ANALYZER_REPORT", default_value = DEFAULT_REPORT)]
    pub report: PathBuf,

    /// Also render an SVG bar chart of usable hosts to this file
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Add up usable hosts of duplicate rows instead of counting the network once
    #[arg(long)]
    pub sum_duplicate_hosts: bool,

    /// Sort records by address value instead of by column text
    #[arg(long)]
    pub numeric_order: bool,

    /// Print the summary table to stdout
    #[arg(long)]
    pub print: bool,
}

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Path to the summary (CSV or JSON)
    #[arg(long)]
    pub input: PathBuf,

    /// Path to write the SVG chart
    #[arg(long)]
    pub output: PathBuf,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Run one subcommand to completion.
pub fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Analyze(args) => analyze(&AnalyzeOptions::from(args)).map(|_| ()),
        Commands::Plot(args) => plot_hosts(&args.input, &args.output),
    }
}

impl From<AnalyzeArgs> for AnalyzeOptions {
    fn from(args: AnalyzeArgs) -> Self {
        AnalyzeOptions {
            input: args.input,
            output: args.output,
            format: if args.json {
                SummaryFormat::Json
            } else {
                SummaryFormat::Csv
            },
            write_summary: !args.skip_summary,
            report: (!args.skip_report).then_some(args.report),
            chart: args.chart,
            policy: if args.sum_duplicate_hosts {
                DuplicatePolicy::Sum
            } else {
                DuplicatePolicy::Collapse
            },
            order: if args.numeric_order {
                RecordOrder::Numeric
            } else {
                RecordOrder::Text
            },
            print: args.print,
        }
    }
}
