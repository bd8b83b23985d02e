//! # v6addr core
//!
//! IPv6 address engine covering three RFCs under one namespace:
//!
//! * **RFC 4291**: the 128-bit [`Address`], its text grammar and classification.
//! * **RFC 5952**: the unique canonical text form (lowercase, `::` compression).
//! * **RFC 4007**: [`ScopedAddress`], an address qualified by a `%zone` suffix.
//!
//! ```
//! use v6addr_core::{Address, ScopedAddress};
//!
//! let link_local = Address::new(0xfe80, 0, 0, 0, 0, 0, 0, 1);
//! assert_eq!(link_local.to_string(), "fe80::1");
//!
//! let scoped: ScopedAddress = "fe80::1%eth0".parse().unwrap();
//! assert!(scoped.requires_zone());
//! assert!(scoped.is_properly_scoped());
//! assert_eq!(scoped.to_string(), "fe80::1%eth0");
//! ```

pub mod address;
pub mod config;
pub mod error;
pub mod format;
pub mod parse;
pub mod scoped;

#[cfg(feature = "serde")]
mod serde_impl;

pub use address::{Address, Classification, Scope};
pub use config::{Config, ZonePolicy};
pub use error::{AddressParseError, ScopedParseError};
pub use format::format;
pub use parse::parse;
pub use scoped::ScopedAddress;
