use thiserror::Error;

use crate::config::ZonePolicy;

/// Why a piece of text is not an RFC 4291 address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("empty input")]
    EmptyInput,
    #[error("too many groups for a 128-bit address")]
    TooManyGroups,
    #[error("too few groups for a 128-bit address")]
    TooFewGroups,
    #[error("'::' may appear at most once")]
    InvalidDoubleColon,
    /// Empty, longer than 4 digits, or not hexadecimal.
    #[error("invalid hex group '{0}'")]
    InvalidHexGroup(String),
    #[error("invalid IPv4 tail '{0}'")]
    InvalidIPv4Tail(String),
}

/// Why a piece of text is not an `address%zone` pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopedParseError {
    #[error("zone separator '%' is not followed by a zone")]
    EmptyZone,
    #[error("zone '{zone}' rejected by {policy} policy")]
    InvalidZone { zone: String, policy: ZonePolicy },
    #[error("invalid address")]
    InvalidAddress(#[from] AddressParseError),
}
