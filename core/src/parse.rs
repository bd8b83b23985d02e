//! # Text Parser
//!
//! Reads every textual form RFC 4291 section 2.2 allows:
//! * Full form, 8 groups of 1 to 4 hex digits (`2001:db8:0:0:0:0:0:1`).
//! * Compressed form with a single `::` standing for one or more zero groups (`2001:db8::1`).
//! * Mixed form whose last 32 bits are a dotted IPv4 literal (`::ffff:192.0.2.1`).
//!
//! Parsing works on fixed-size buffers and either returns a complete
//! [`Address`] or an [`AddressParseError`].

use std::str::FromStr;

use tracing::trace;

use crate::address::Address;
use crate::error::AddressParseError;

const SEGMENT_COUNT: usize = 8;
const MAX_HEX_DIGITS: usize = 4;

/// Parses RFC 4291 text into an [`Address`].
pub fn parse(text: &str) -> Result<Address, AddressParseError> {
    let result = parse_address(text);
    if let Err(err) = &result {
        trace!(input = text, %err, "rejected address text");
    }
    result
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Groups read from one side of an optional `::`.
#[derive(Default)]
struct Groups {
    buf: [u16; SEGMENT_COUNT],
    len: usize,
}

impl Groups {
    fn push(&mut self, value: u16) -> Result<(), AddressParseError> {
        if self.len == SEGMENT_COUNT {
            return Err(AddressParseError::TooManyGroups);
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    fn as_slice(&self) -> &[u16] {
        &self.buf[..self.len]
    }
}

fn parse_address(text: &str) -> Result<Address, AddressParseError> {
    if text.is_empty() {
        return Err(AddressParseError::EmptyInput);
    }

    let Some((head, tail)) = text.split_once("::") else {
        let groups = parse_groups(text, true)?;
        if groups.len < SEGMENT_COUNT {
            return Err(AddressParseError::TooFewGroups);
        }
        return Ok(Address::from_segments(groups.buf));
    };

    if tail.contains("::") {
        return Err(AddressParseError::InvalidDoubleColon);
    }

    let head = parse_groups(head, false)?;
    let tail = parse_groups(tail, true)?;

    // `::` has to stand for at least one group
    if head.len + tail.len >= SEGMENT_COUNT {
        return Err(AddressParseError::TooManyGroups);
    }

    let mut segments = [0u16; SEGMENT_COUNT];
    segments[..head.len].copy_from_slice(head.as_slice());
    segments[SEGMENT_COUNT - tail.len..].copy_from_slice(tail.as_slice());

    Ok(Address::from_segments(segments))
}

/// Parses `:`-separated groups. An empty side yields zero groups.
///
/// A dotted IPv4 literal is only accepted as the very last group when
/// `allow_ipv4_tail` is set, and counts as two groups.
fn parse_groups(side: &str, allow_ipv4_tail: bool) -> Result<Groups, AddressParseError> {
    let mut groups = Groups::default();
    if side.is_empty() {
        return Ok(groups);
    }

    let mut parts = side.split(':').peekable();
    while let Some(part) = parts.next() {
        if part.contains('.') {
            if !allow_ipv4_tail || parts.peek().is_some() {
                return Err(AddressParseError::InvalidIPv4Tail(part.to_string()));
            }
            let [high, low] = parse_ipv4_tail(part)?;
            groups.push(high)?;
            groups.push(low)?;
        } else {
            groups.push(parse_hex_group(part)?)?;
        }
    }

    Ok(groups)
}

fn parse_hex_group(group: &str) -> Result<u16, AddressParseError> {
    let invalid = || AddressParseError::InvalidHexGroup(group.to_string());

    if group.is_empty() || group.len() > MAX_HEX_DIGITS {
        return Err(invalid());
    }
    // from_str_radix would also take a leading '+'
    if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    u16::from_str_radix(group, 16).map_err(|_| invalid())
}

/// Converts `a.b.c.d` into the two segments it replaces.
fn parse_ipv4_tail(tail: &str) -> Result<[u16; 2], AddressParseError> {
    let invalid = || AddressParseError::InvalidIPv4Tail(tail.to_string());

    let mut octets = [0u8; 4];
    let mut count = 0;
    for part in tail.split('.') {
        if count == octets.len() {
            return Err(invalid());
        }
        octets[count] = parse_octet(part).ok_or_else(invalid)?;
        count += 1;
    }

    if count != octets.len() {
        return Err(invalid());
    }

    let [a, b, c, d] = octets;
    Ok([u16::from_be_bytes([a, b]), u16::from_be_bytes([c, d])])
}

/// A decimal octet: 1 to 3 digits, no leading zero, at most 255.
fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse::<u8>().ok()
}
