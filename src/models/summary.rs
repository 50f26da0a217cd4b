//! Row and summary records.

use super::{Network, MAX_LENGTH};
use crate::error::NetworkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Column names of the summary table, in output order.
pub const SUMMARY_COLUMNS: [&str; 4] = [
    "Network",
    "CIDR",
    "Total Addresses",
    "Total Usable Hosts",
];

/// One raw input row: an IP address cell and a subnet mask cell.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    #[serde(rename = "IP Address", default)]
    pub ip: String,
    #[serde(rename = "Subnet Mask", default)]
    pub mask: String,
}

impl InputRow {
    pub fn new(ip: &str, mask: &str) -> InputRow {
        InputRow {
            ip: ip.to_string(),
            mask: mask.to_string(),
        }
    }
}

/// Summary line for one distinct network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    /// Network (base) address, dotted decimal.
    #[serde(rename = "Network")]
    pub network: Ipv4Addr,
    /// Prefix length, serialized as "/N".
    #[serde(rename = "CIDR", with = "cidr_suffix")]
    pub prefix: u8,
    #[serde(rename = "Total Addresses")]
    pub total_addresses: u64,
    #[serde(rename = "Total Usable Hosts")]
    pub total_usable_hosts: u64,
}

impl SummaryRecord {
    /// Record for `net` seen `occurrences` times in the input.
    pub fn from_network(
        net: Network,
        occurrences: usize,
        policy: DuplicatePolicy,
    ) -> SummaryRecord {
        let usable = match policy {
            DuplicatePolicy::Collapse => net.num_usable_hosts(),
            DuplicatePolicy::Sum => net.num_usable_hosts() * occurrences as u64,
        };
        SummaryRecord {
            network: net.addr,
            prefix: net.prefix,
            total_addresses: net.num_addresses(),
            total_usable_hosts: usable,
        }
    }

    pub fn network(&self) -> Network {
        Network::from_addr(self.network, self.prefix)
    }

    /// "/N" as shown in the CIDR column.
    pub fn cidr(&self) -> String {
        format!("/{}", self.prefix)
    }

    /// Network and CIDR joined, e.g. "10.0.0.0/8".
    pub fn label(&self) -> String {
        format!("{}{}", self.network, self.cidr())
    }
}

/// How usable hosts are aggregated when several rows land in one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Duplicates are dropped first; the record holds one network's count.
    #[default]
    Collapse,
    /// Usable hosts of every duplicate row are added up.
    Sum,
}

/// Order of the summary records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordOrder {
    /// By the "Network" and "CIDR" column text, so `192.168.1.0` sorts
    /// before `20.0.0.0` and `/24` before `/8`.
    #[default]
    Text,
    /// By address as a number, then prefix length.
    Numeric,
}

/// An input row that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 0-based data row index (header excluded).
    pub index: usize,
    pub ip: String,
    pub mask: String,
    pub error: NetworkError,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} ({}/{}): {}",
            self.index, self.ip, self.mask, self.error
        )
    }
}

/// Output of the summarizer.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// One record per distinct network, in [`RecordOrder`].
    pub records: Vec<SummaryRecord>,
    pub skipped: Vec<SkippedRow>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn networks(&self) -> Vec<Network> {
        self.records.iter().map(|r| r.network()).collect()
    }
}

mod cidr_suffix {
    use super::*;
    use serde::de;

    pub fn serialize<S>(prefix: &u8, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("/{prefix}"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let digits = s.trim().trim_start_matches('/');
        let prefix: u8 = digits
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid CIDR suffix: {s}")))?;
        if prefix > MAX_LENGTH {
            return Err(de::Error::custom(format!("CIDR suffix too long: {s}")));
        }
        Ok(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_network() {
        let net = Network::new("192.168.1.0/24").unwrap();
        let rec = SummaryRecord::from_network(net, 1, DuplicatePolicy::Collapse);
        assert_eq!(rec.total_addresses, 256);
        assert_eq!(rec.total_usable_hosts, 254);
        assert_eq!(rec.label(), "192.168.1.0/24");
        assert_eq!(rec.cidr(), "/24");
        assert_eq!(rec.network(), net);
    }

    #[test]
    fn test_record_duplicate_policy() {
        let net = Network::new("192.168.1.0/24").unwrap();
        let collapsed = SummaryRecord::from_network(net, 3, DuplicatePolicy::Collapse);
        let summed = SummaryRecord::from_network(net, 3, DuplicatePolicy::Sum);
        assert_eq!(collapsed.total_usable_hosts, 254);
        assert_eq!(summed.total_usable_hosts, 762);
        assert_eq!(summed.total_addresses, 256);
    }

    #[test]
    fn test_record_json_shape() {
        let rec = SummaryRecord::from_network(
            Network::new("10.0.0.0/8").unwrap(),
            1,
            DuplicatePolicy::Collapse,
        );
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["Network"], "10.0.0.0");
        assert_eq!(value["CIDR"], "/8");
        assert_eq!(value["Total Addresses"], 16_777_216);
        assert_eq!(value["Total Usable Hosts"], 16_777_214);
    }

    #[test]
    fn test_record_rejects_bad_cidr() {
        let json = r#"{"Network":"10.0.0.0","CIDR":"/40","Total Addresses":1,"Total Usable Hosts":1}"#;
        assert!(serde_json::from_str::<SummaryRecord>(json).is_err());
    }

    #[test]
    fn test_skipped_row_display() {
        let skipped = SkippedRow {
            index: 4,
            ip: "10.0.0.300".to_string(),
            mask: "24".to_string(),
            error: NetworkError::InvalidAddress("10.0.0.300".to_string()),
        };
        assert_eq!(
            skipped.to_string(),
            "row 4 (10.0.0.300/24): '10.0.0.300' does not appear to be an IPv4 address"
        );
    }
}
