//! Subnet summarization.
//!
//! Turns raw IP/mask rows into one [`SummaryRecord`] per distinct network.

use crate::models::{
    DuplicatePolicy, InputRow, Network, RecordOrder, SkippedRow, Summary, SummaryRecord,
};
use colored::Colorize;
use itertools::Itertools;

/// Parse every row, drop the malformed ones and summarize the rest.
///
/// Malformed rows are logged as warnings and returned in
/// [`Summary::skipped`]; they never abort the run.
///
/// # Arguments
/// * `rows` - Input rows in sheet order
/// * `policy` - How usable hosts of duplicate rows are aggregated
/// * `order` - Sort order of the returned records
///
/// # Returns
/// One record per distinct network, sorted by `order`
pub fn analyze_subnets(
    rows: &[InputRow],
    policy: DuplicatePolicy,
    order: RecordOrder,
) -> Summary {
    log::info!("#Start analyze_subnets() rows={}", rows.len());

    let mut networks: Vec<Network> = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        match Network::from_ip_mask(&row.ip, &row.mask) {
            Ok(net) => networks.push(net),
            Err(error) => {
                let skip = SkippedRow {
                    index: idx,
                    ip: row.ip.clone(),
                    mask: row.mask.clone(),
                    error,
                };
                log::warn!("{} skipping {skip}", "Warning:".yellow());
                skipped.push(skip);
            }
        }
    }

    // Dedup - must be sorted first
    match order {
        RecordOrder::Text => networks.sort_by_cached_key(|n| (n.addr.to_string(), n.cidr())),
        RecordOrder::Numeric => networks.sort(),
    }
    let records: Vec<SummaryRecord> = networks
        .into_iter()
        .dedup_with_count()
        .map(|(count, net)| {
            if count > 1 {
                log::debug!("{net} appears {count} times");
            }
            SummaryRecord::from_network(net, count, policy)
        })
        .collect();

    log::info!(
        "Summarized {} distinct networks, skipped {} rows",
        records.len(),
        skipped.len()
    );

    Summary { records, skipped }
}
