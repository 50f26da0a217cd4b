//! IPv4 network arithmetic.
//!
//! Provides [`Network`] for representing a CIDR block with its host bits
//! zeroed, plus the address/prefix helpers it is built on. Addresses are
//! handled as `u32` so range tests are plain integer comparisons.

use crate::error::NetworkError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Prefixes up to this length reserve the network and broadcast addresses.
const LAST_RESERVING_PREFIX: u8 = 30;

/// Regex for masks given as a prefix length, e.g. `24` or `/24`.
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^/?(\d{1,3})$").expect("Invalid Regex"))
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_analyzer::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let len = len.min(MAX_LENGTH);
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}

/// Number of addresses in a block of the given prefix length.
pub fn num_addresses(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Number of usable host addresses for the given prefix length.
///
/// /31 and /32 have no network or broadcast address, every other prefix
/// loses exactly two.
pub fn num_usable_hosts(len: u8) -> u64 {
    let total = num_addresses(len);
    if len <= LAST_RESERVING_PREFIX {
        total - 2
    } else {
        total
    }
}

/// Parse a mask cell into a prefix length.
///
/// Accepts a prefix length (`24`, `/24`), a netmask (`255.255.255.0`) or a
/// hostmask (`0.0.0.255`).
pub fn parse_mask(mask: &str) -> Result<u8, NetworkError> {
    let mask = mask.trim();
    if mask.is_empty() {
        return Err(NetworkError::Empty("subnet mask"));
    }

    if let Some(caps) = get_prefix_regex().captures(mask) {
        let len: u32 = caps[1]
            .parse()
            .map_err(|_| NetworkError::InvalidMask(mask.to_string()))?;
        if len > MAX_LENGTH as u32 {
            return Err(NetworkError::PrefixTooLong(len));
        }
        return Ok(len as u8);
    }

    let bits = Ipv4Addr::from_str(mask)
        .map(u32::from)
        .map_err(|_| NetworkError::InvalidMask(mask.to_string()))?;

    if let Some(len) = netmask_prefix(bits) {
        Ok(len)
    } else if let Some(len) = netmask_prefix(!bits) {
        // hostmask
        Ok(len)
    } else {
        Err(NetworkError::InvalidMask(mask.to_string()))
    }
}

/// Prefix length of a netmask, or None if its one-bits are not contiguous
/// from the top.
fn netmask_prefix(bits: u32) -> Option<u8> {
    if bits.leading_ones() + bits.trailing_zeros() >= MAX_LENGTH as u32 {
        Some(bits.leading_ones() as u8)
    } else {
        None
    }
}

/// IPv4 network in CIDR notation with host bits zeroed.
///
/// Ordering is by address first, then prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    /// The network (base) address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::new(&s).map_err(de::Error::custom)
    }
}

impl Network {
    /// Create a new [`Network`] from a CIDR string (e.g., "10.0.0.5/24").
    ///
    /// Host bits are zeroed rather than rejected.
    pub fn new(addr_cidr: &str) -> Result<Network, NetworkError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| NetworkError::MalformedCidr(addr_cidr.to_string()))?;
        Network::from_ip_mask(addr, mask)
    }

    /// Build a network from separate address and mask cells, zeroing any
    /// host bits in `ip`.
    pub fn from_ip_mask(ip: &str, mask: &str) -> Result<Network, NetworkError> {
        let ip = ip.trim();
        if ip.is_empty() {
            return Err(NetworkError::Empty("IP address"));
        }
        let addr =
            Ipv4Addr::from_str(ip).map_err(|_| NetworkError::InvalidAddress(ip.to_string()))?;
        let prefix = parse_mask(mask)?;
        Ok(Network::from_addr(addr, prefix))
    }

    /// Build a network from an address and prefix length, zeroing host bits.
    /// Prefixes longer than 32 are clamped.
    pub fn from_addr(addr: Ipv4Addr, prefix: u8) -> Network {
        let prefix = prefix.min(MAX_LENGTH);
        Network {
            addr: cut_addr(addr, prefix),
            prefix,
        }
    }

    /// First address of the range.
    pub fn lo(&self) -> u32 {
        u32::from(self.addr)
    }

    /// Last (broadcast) address of the range.
    pub fn hi(&self) -> u32 {
        u32::from(broadcast_addr(self.addr, self.prefix))
    }

    /// Total number of addresses in the block.
    pub fn num_addresses(&self) -> u64 {
        num_addresses(self.prefix)
    }

    /// Number of usable host addresses in the block.
    pub fn num_usable_hosts(&self) -> u64 {
        num_usable_hosts(self.prefix)
    }

    /// True when the two ranges share at least one address.
    pub fn overlaps(&self, other: &Network) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }

    /// CIDR suffix, e.g. "/24".
    pub fn cidr(&self) -> String {
        format!("/{}", self.prefix)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::new(s)
    }
}
