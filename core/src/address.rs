//! # Address Core
//!
//! The 128-bit IPv6 address value and everything derived purely from its
//! bit pattern: classification by well-known prefix and RFC 4007 scope.

use std::net::{Ipv4Addr, Ipv6Addr};

/// An IPv6 address as 8 sixteen-bit segments, segment 0 most significant.
///
/// The derived ordering compares segments lexicographically, which is the
/// unsigned numeric ordering of the 128-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address {
    segments: [u16; 8],
}

/// The mutually exclusive address classes an [`Address`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// `::`
    Unspecified,
    /// `::1`
    Loopback,
    /// `fe80::/10`
    LinkLocal,
    /// `ff00::/8`
    Multicast,
    /// `fc00::/7`
    UniqueLocal,
    /// `2000::/3`
    GlobalUnicast,
    /// Anything outside the ranges above (IPv4-mapped, reserved space, ...).
    Other,
}

/// Topological reach of an address, per RFC 4007 and the multicast scop
/// field of RFC 4291 / RFC 7346.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    InterfaceLocal,
    LinkLocal,
    RealmLocal,
    AdminLocal,
    SiteLocal,
    OrganizationLocal,
    Global,
    /// scop values 0x0 and 0xf.
    Reserved(u8),
    /// scop values with no assignment yet.
    Unassigned(u8),
}

impl Address {
    /// `::1`
    pub const LOOPBACK: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 1);

    /// `::`
    pub const UNSPECIFIED: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 0);

    #[allow(clippy::too_many_arguments)]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        Self {
            segments: [a, b, c, d, e, f, g, h],
        }
    }

    pub const fn from_segments(segments: [u16; 8]) -> Self {
        Self { segments }
    }

    /// The 8 segments in positional order.
    pub const fn segments(&self) -> [u16; 8] {
        self.segments
    }

    /// The address in network byte order.
    pub const fn octets(&self) -> [u8; 16] {
        self.to_bits().to_be_bytes()
    }

    pub const fn from_octets(octets: [u8; 16]) -> Self {
        Self::from_bits(u128::from_be_bytes(octets))
    }

    pub const fn to_bits(&self) -> u128 {
        let mut bits: u128 = 0;
        let mut i = 0;
        while i < 8 {
            bits = (bits << 16) | self.segments[i] as u128;
            i += 1;
        }
        bits
    }

    pub const fn from_bits(bits: u128) -> Self {
        let mut segments = [0u16; 8];
        let mut i = 0;
        while i < 8 {
            segments[i] = (bits >> (112 - 16 * i)) as u16;
            i += 1;
        }
        Self { segments }
    }

    /// Compares the leading bits of the address against `prefix`/`len`.
    const fn has_prefix(&self, prefix: u128, len: u32) -> bool {
        let mask: u128 = if len == 0 { 0 } else { u128::MAX << (128 - len) };
        self.to_bits() & mask == prefix & mask
    }

    pub const fn is_unspecified(&self) -> bool {
        self.to_bits() == 0
    }

    pub const fn is_loopback(&self) -> bool {
        self.to_bits() == 1
    }

    /// `fe80::/10`
    pub const fn is_link_local(&self) -> bool {
        self.has_prefix(0xfe80_u128 << 112, 10)
    }

    /// `ff00::/8`
    pub const fn is_multicast(&self) -> bool {
        self.has_prefix(0xff00_u128 << 112, 8)
    }

    /// `fc00::/7`
    pub const fn is_unique_local(&self) -> bool {
        self.has_prefix(0xfc00_u128 << 112, 7)
    }

    /// `2000::/3`, the range IANA allocates global unicast space from.
    pub const fn is_global_unicast(&self) -> bool {
        self.has_prefix(0x2000_u128 << 112, 3)
    }

    /// `::ffff:0:0/96`
    pub const fn is_ipv4_mapped(&self) -> bool {
        self.has_prefix(0xffff_u128 << 32, 96)
    }

    pub fn classification(&self) -> Classification {
        match true {
            _ if self.is_unspecified() => Classification::Unspecified,
            _ if self.is_loopback() => Classification::Loopback,
            _ if self.is_link_local() => Classification::LinkLocal,
            _ if self.is_multicast() => Classification::Multicast,
            _ if self.is_unique_local() => Classification::UniqueLocal,
            _ if self.is_global_unicast() => Classification::GlobalUnicast,
            _ => Classification::Other,
        }
    }

    /// The scope encoded in the scop field, for multicast addresses only.
    pub fn multicast_scope(&self) -> Option<Scope> {
        if !self.is_multicast() {
            return None;
        }

        let scop: u8 = (self.segments[0] & 0x000f) as u8;
        let scope = match scop {
            0x1 => Scope::InterfaceLocal,
            0x2 => Scope::LinkLocal,
            0x3 => Scope::RealmLocal,
            0x4 => Scope::AdminLocal,
            0x5 => Scope::SiteLocal,
            0x8 => Scope::OrganizationLocal,
            0xe => Scope::Global,
            0x0 | 0xf => Scope::Reserved(scop),
            _ => Scope::Unassigned(scop),
        };
        Some(scope)
    }

    /// The scope of the address.
    ///
    /// Unique-local addresses have global scope (RFC 4193), as does every
    /// unicast address that is neither loopback nor link-local.
    pub fn scope(&self) -> Scope {
        if let Some(scope) = self.multicast_scope() {
            return scope;
        }

        match self.classification() {
            Classification::Loopback => Scope::InterfaceLocal,
            Classification::LinkLocal => Scope::LinkLocal,
            _ => Scope::Global,
        }
    }

    /// The embedded IPv4 address of an IPv4-mapped address.
    pub fn to_ipv4_mapped(&self) -> Option<Ipv4Addr> {
        if !self.is_ipv4_mapped() {
            return None;
        }
        let [.., hi, lo] = self.segments;
        Some(Ipv4Addr::from((u32::from(hi) << 16) | u32::from(lo)))
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Classification::Unspecified => "unspecified",
            Classification::Loopback => "loopback",
            Classification::LinkLocal => "link-local",
            Classification::Multicast => "multicast",
            Classification::UniqueLocal => "unique-local",
            Classification::GlobalUnicast => "global unicast",
            Classification::Other => "other",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::InterfaceLocal => f.write_str("interface-local"),
            Scope::LinkLocal => f.write_str("link-local"),
            Scope::RealmLocal => f.write_str("realm-local"),
            Scope::AdminLocal => f.write_str("admin-local"),
            Scope::SiteLocal => f.write_str("site-local"),
            Scope::OrganizationLocal => f.write_str("organization-local"),
            Scope::Global => f.write_str("global"),
            Scope::Reserved(scop) => write!(f, "reserved ({scop:#x})"),
            Scope::Unassigned(scop) => write!(f, "unassigned ({scop:#x})"),
        }
    }
}

impl From<[u16; 8]> for Address {
    fn from(segments: [u16; 8]) -> Self {
        Self::from_segments(segments)
    }
}

impl From<Address> for [u16; 8] {
    fn from(address: Address) -> Self {
        address.segments
    }
}

impl From<[u8; 16]> for Address {
    fn from(octets: [u8; 16]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<u128> for Address {
    fn from(bits: u128) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Address> for u128 {
    fn from(address: Address) -> Self {
        address.to_bits()
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self::from_segments(addr.segments())
    }
}

impl From<Address> for Ipv6Addr {
    fn from(address: Address) -> Self {
        let [a, b, c, d, e, f, g, h] = address.segments;
        Ipv6Addr::new(a, b, c, d, e, f, g, h)
    }
}
