//! # Scoped Address
//!
//! RFC 4007 addresses qualified by a zone, written `address%zone`
//! (e.g. `fe80::1%eth0`).

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::address::Address;
use crate::config::Config;
use crate::error::ScopedParseError;

const ZONE_SEPARATOR: char = '%';

/// An [`Address`] plus an optional zone identifier.
///
/// Construction never checks scoping; [`ScopedAddress::is_properly_scoped`]
/// reports on it instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopedAddress {
    address: Address,
    zone: Option<String>,
}

impl ScopedAddress {
    /// Takes `zone` as given. A zone that is empty or contains `%` still
    /// formats, but the text does not parse back to the same value.
    pub fn new(address: Address, zone: Option<String>) -> Self {
        Self { address, zone }
    }

    /// Same caveat as [`ScopedAddress::new`]: use [`ScopedAddress::parse_with`]
    /// when the zone must survive a format/parse round trip.
    pub fn with_zone(address: Address, zone: impl Into<String>) -> Self {
        Self::new(address, Some(zone.into()))
    }

    pub fn unscoped(address: Address) -> Self {
        Self::new(address, None)
    }

    /// Parses `address` or `address%zone`, accepting any non-empty zone.
    pub fn parse(text: &str) -> Result<Self, ScopedParseError> {
        Self::parse_with(text, &Config::default())
    }

    /// Parses `address` or `address%zone`, checking the zone against
    /// `config.zone_policy`.
    ///
    /// The text is split on the last `%`.
    pub fn parse_with(text: &str, config: &Config) -> Result<Self, ScopedParseError> {
        let (address_text, zone) = match text.rsplit_once(ZONE_SEPARATOR) {
            Some((address_text, zone)) => (address_text, Some(zone)),
            None => (text, None),
        };

        let address: Address = address_text.parse()?;

        let zone = match zone {
            Some(zone) => {
                if let Err(err) = config.zone_policy.check(zone) {
                    trace!(input = text, %err, "rejected zone");
                    return Err(err);
                }
                Some(zone.to_string())
            }
            None => None,
        };

        Ok(Self { address, zone })
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Whether the address is only meaningful relative to an interface.
    ///
    /// Only link-local unicast qualifies; multicast scope is exposed through
    /// [`Address::multicast_scope`] instead.
    pub fn requires_zone(&self) -> bool {
        self.address.is_link_local()
    }

    /// A zone is present exactly when one is required.
    pub fn is_properly_scoped(&self) -> bool {
        self.requires_zone() == self.zone.is_some()
    }

    pub fn into_parts(self) -> (Address, Option<String>) {
        (self.address, self.zone)
    }
}

impl From<Address> for ScopedAddress {
    fn from(address: Address) -> Self {
        Self::unscoped(address)
    }
}

impl FromStr for ScopedAddress {
    type Err = ScopedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ScopedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)?;
        if let Some(zone) = &self.zone {
            write!(f, "{ZONE_SEPARATOR}{zone}")?;
        }
        Ok(())
    }
}
