//! Markdown analysis report.
//!
//! Answers four fixed questions about the summary:
//! 1. which subnet has the most usable hosts,
//! 2. which subnets overlap,
//! 3. the smallest and largest subnet by address space,
//! 4. a static subnetting recommendation.

use crate::models::SummaryRecord;
use crate::processing::OverlapPair;
use std::error::Error;
use std::fmt::Write as _;
use std::path::Path;

const STRATEGY: [&str; 3] = [
    "- Adopt **VLSM** (Variable-Length Subnet Masking) to size each block precisely.  ",
    "- **Aggregate** contiguous subnets for route summarization.  ",
    "- **Right-size** any large `/22` into smaller `/23` or `/24` to reclaim unused space.  ",
];

/// First record holding the maximum of `key`.
fn first_max_by<F>(records: &[SummaryRecord], key: F) -> Option<&SummaryRecord>
where
    F: Fn(&SummaryRecord) -> u64,
{
    records
        .iter()
        .reduce(|best, r| if key(r) > key(best) { r } else { best })
}

/// First record holding the minimum of `key`.
fn first_min_by<F>(records: &[SummaryRecord], key: F) -> Option<&SummaryRecord>
where
    F: Fn(&SummaryRecord) -> u64,
{
    records
        .iter()
        .reduce(|best, r| if key(r) < key(best) { r } else { best })
}

/// Render the report as a Markdown string.
///
/// # Returns
/// * `Err` - If `records` is empty, there is no subnet to report on
pub fn render_report(
    records: &[SummaryRecord],
    overlaps: &[OverlapPair],
) -> Result<String, Box<dyn Error>> {
    let most_hosts = first_max_by(records, |r| r.total_usable_hosts)
        .ok_or("cannot write report: summary has no subnets")?;
    let smallest = first_min_by(records, |r| r.total_addresses)
        .ok_or("cannot write report: summary has no subnets")?;
    let largest = first_max_by(records, |r| r.total_addresses)
        .ok_or("cannot write report: summary has no subnets")?;

    let mut md = String::new();
    writeln!(md, "# Analysis Questions\n")?;

    writeln!(md, "1. **Which subnet has the most hosts?**  ")?;
    writeln!(
        md,
        "- `{}` with {} usable hosts  \n",
        most_hosts.label(),
        most_hosts.total_usable_hosts
    )?;

    writeln!(md, "2. **Are there any overlapping subnets?**  ")?;
    if overlaps.is_empty() {
        writeln!(md, "- No overlapping subnets found.  ")?;
    } else {
        for pair in overlaps {
            writeln!(md, "- `{}` overlaps with `{}`  ", pair.first, pair.second)?;
        }
    }
    writeln!(md)?;

    writeln!(
        md,
        "3. **What is the smallest and largest subnet in terms of address space?**  "
    )?;
    writeln!(
        md,
        "- Smallest: `{}` ({} total addresses)  ",
        smallest.label(),
        smallest.total_addresses
    )?;
    writeln!(
        md,
        "- Largest: `{}` ({} total addresses)  \n",
        largest.label(),
        largest.total_addresses
    )?;

    writeln!(
        md,
        "4. **Suggest a subnetting strategy to reduce wasted IPs in this network.**  "
    )?;
    for line in STRATEGY {
        writeln!(md, "{line}")?;
    }

    Ok(md)
}

/// Render the report and write it to `path`.
pub fn write_report(
    records: &[SummaryRecord],
    overlaps: &[OverlapPair],
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let md = render_report(records, overlaps)?;
    std::fs::write(path, md)
        .map_err(|e| format!("failed to write report '{}': {e}", path.display()))?;
    log::info!("→ Generated {}", path.display());
    Ok(())
}
