//! Default paths and column names.

pub const DEFAULT_INPUT: &str = "ip_data.xlsx";
pub const DEFAULT_OUTPUT: &str = "subnet_report.csv";
pub const DEFAULT_REPORT: &str = "report.md";

/// log4rs config read from the working directory when present.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

pub const IP_COLUMN: &str = "IP Address";
pub const MASK_COLUMN: &str = "Subnet Mask";
