//! Subnet data processing logic.
//!
//! This module contains the computational core:
//! - [`summarize`] - Parsing, de-duplication and per-network statistics
//! - [`overlap`] - Pairwise overlap detection

mod overlap;
mod summarize;

// Re-export public functions
pub use overlap::{find_overlaps, log_overlaps, OverlapPair};
pub use summarize::analyze_subnets;
