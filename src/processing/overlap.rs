//! Overlapping subnet detection.
//!
//! Compares every pair of distinct networks and reports those whose address
//! ranges intersect, including one network containing the other.

use crate::models::Network;
use std::fmt;

/// Two networks sharing at least one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapPair {
    pub first: Network,
    pub second: Network,
}

impl fmt::Display for OverlapPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} overlaps with {}", self.first, self.second)
    }
}

/// Find every overlapping pair.
///
/// Pairs are returned in (i, j), i < j, order over the input slice, so for a
/// sorted summary the first network of each pair is never after the second.
pub fn find_overlaps(nets: &[Network]) -> Vec<OverlapPair> {
    let mut overlaps = Vec::new();
    for (i, first) in nets.iter().enumerate() {
        for second in &nets[i + 1..] {
            if first.overlaps(second) {
                overlaps.push(OverlapPair {
                    first: *first,
                    second: *second,
                });
            }
        }
    }
    overlaps
}

/// Log overlapping subnets as warnings.
pub fn log_overlaps(overlaps: &[OverlapPair]) {
    if overlaps.is_empty() {
        log::info!("No overlapping subnets found.");
        return;
    }

    log::warn!("Found {} overlapping subnet pair(s):", overlaps.len());
    for pair in overlaps {
        log::warn!("  {pair}");
    }
}
