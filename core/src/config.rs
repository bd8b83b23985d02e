use std::fmt;

use crate::error::ScopedParseError;

/// Linux `IFNAMSIZ` minus the terminating NUL.
pub const MAX_INTERFACE_NAME_LEN: usize = 15;

/// Parsing behaviour shared by everything that reads scoped addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Which zone identifiers `ScopedAddress::parse_with` accepts.
    pub zone_policy: ZonePolicy,
}

/// The rule a zone identifier must satisfy.
///
/// Zones are opaque to RFC 4007; anything stricter is a local choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ZonePolicy {
    /// Any non-empty text.
    #[default]
    Opaque,
    /// ASCII alphanumerics plus `-`, `_` and `.`, at most 15 bytes.
    InterfaceName,
    /// A decimal interface index fitting in 32 bits.
    Numeric,
}

impl ZonePolicy {
    pub fn check(&self, zone: &str) -> Result<(), ScopedParseError> {
        if zone.is_empty() {
            return Err(ScopedParseError::EmptyZone);
        }

        let accepted = match self {
            ZonePolicy::Opaque => true,
            ZonePolicy::InterfaceName => {
                zone.len() <= MAX_INTERFACE_NAME_LEN
                    && zone
                        .bytes()
                        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
            }
            ZonePolicy::Numeric => {
                zone.bytes().all(|b| b.is_ascii_digit()) && zone.parse::<u32>().is_ok()
            }
        };

        if accepted {
            Ok(())
        } else {
            Err(ScopedParseError::InvalidZone {
                zone: zone.to_string(),
                policy: *self,
            })
        }
    }
}

impl fmt::Display for ZonePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZonePolicy::Opaque => f.write_str("opaque"),
            ZonePolicy::InterfaceName => f.write_str("interface-name"),
            ZonePolicy::Numeric => f.write_str("numeric"),
        }
    }
}
