//! Typed errors for network parsing.

use thiserror::Error;

/// Why an IP/mask pair could not be turned into a [`crate::models::Network`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("empty {0} cell")]
    Empty(&'static str),

    #[error("'{0}' does not appear to be an IPv4 address")]
    InvalidAddress(String),

    #[error("'{0}' is not a valid netmask")]
    InvalidMask(String),

    #[error("prefix length {0} is longer than 32 bits")]
    PrefixTooLong(u32),

    #[error("malformed CIDR '{0}', expected <address>/<mask>")]
    MalformedCidr(String),
}
