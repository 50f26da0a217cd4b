//! Domain models for the subnet analyzer.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Network`] - IPv4 network with host bits zeroed
//! - [`InputRow`] - raw IP/mask pair from the input sheet
//! - [`SummaryRecord`] and [`Summary`] - per-network statistics

mod network;
mod summary;

// Re-export public types
pub use network::{
    broadcast_addr, cut_addr, get_cidr_mask, num_addresses, num_usable_hosts, parse_mask,
    Network, MAX_LENGTH,
};
pub use summary::{
    DuplicatePolicy, InputRow, RecordOrder, SkippedRow, Summary, SummaryRecord, SUMMARY_COLUMNS,
};
