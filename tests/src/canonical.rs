#![cfg(test)]
use v6addr_core::{Address, AddressParseError, format, parse};

/// Parses `input` and renders it back.
fn canonical(input: &str) -> String {
    let address: Address = parse(input).unwrap_or_else(|e| panic!("'{input}' rejected: {e}"));
    format(&address)
}

#[test]
fn composed_rfc4291_and_rfc5952() {
    let address = Address::new(0x2001, 0x0db8, 0, 0, 0, 0, 0, 1);
    assert_eq!(address.segments()[0], 0x2001);
    assert_eq!(address.segments()[1], 0x0db8);
    assert_eq!(address.to_string(), "2001:db8::1");
}

#[test]
fn equivalent_inputs_share_one_canonical_form() {
    let inputs = [
        "2001:0DB8::0001",
        "2001:db8::1",
        "2001:db8:0:0:0:0:0:1",
        "2001:0db8:0000:0000:0000:0000:0000:0001",
        "2001:DB8:0::0:1",
        "2001:db8::0.0.0.1",
    ];

    let first = parse(inputs[0]).unwrap();
    for input in inputs {
        assert_eq!(parse(input).unwrap(), first, "{input}");
        assert_eq!(canonical(input), "2001:db8::1", "{input}");
    }
}

#[test]
fn canonical_strings_round_trip() {
    let canonical_forms = [
        "::",
        "::1",
        "1::",
        "2001:db8::1",
        "2001:0:0:1::1",
        "2001:db8::1:0:0:1",
        "2001:db8:0:1:1:1:1:1",
        "fe80::200:5eff:fe00:1",
        "ff02::1:ff00:1",
        "::ffff:c000:201",
        "1:2:3:4:5:6:7:8",
        "0:1::1:0:0",
    ];

    for text in canonical_forms {
        assert_eq!(canonical(text), text);
    }
}

#[test]
fn compression_prefers_the_longer_run() {
    let address = Address::from_segments([0x2001, 0, 0, 1, 0, 0, 0, 1]);
    assert_eq!(format(&address), "2001:0:0:1::1");
}

#[test]
fn mixed_notation_is_rendered_as_hex() {
    assert_eq!(canonical("::ffff:192.0.2.1"), "::ffff:c000:201");
    assert_eq!(canonical("64:ff9b::198.51.100.7"), "64:ff9b::c633:6407");
}

#[test]
fn boundaries() {
    let unspecified = parse("::").unwrap();
    assert_eq!(unspecified.segments(), [0; 8]);
    assert_eq!(unspecified, Address::UNSPECIFIED);
    assert_eq!(parse("::1").unwrap(), Address::LOOPBACK);
    assert_eq!(Address::LOOPBACK.to_string(), "::1");
    assert_eq!(Address::UNSPECIFIED.to_string(), "::");
}

#[test]
fn malformed_input_is_rejected_with_its_kind() {
    assert_eq!(parse("1:2:3:4:5:6:7:8:9"), Err(AddressParseError::TooManyGroups));
    assert_eq!(parse("1::2::3"), Err(AddressParseError::InvalidDoubleColon));
    assert!(matches!(parse("12345::"), Err(AddressParseError::InvalidHexGroup(_))));
    assert_eq!(parse(""), Err(AddressParseError::EmptyInput));
    assert_eq!(parse("1:2:3"), Err(AddressParseError::TooFewGroups));
    assert!(matches!(parse("::300.1.1.1"), Err(AddressParseError::InvalidIPv4Tail(_))));
}
