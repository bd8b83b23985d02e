#![cfg(test)]
use std::net::Ipv6Addr;

use proptest::prelude::*;
use v6addr_core::{Address, ScopedAddress, format, parse};

/// Segments biased towards zero so that `::` compression is exercised.
fn segment() -> impl Strategy<Value = u16> {
    prop_oneof![
        3 => Just(0u16),
        1 => Just(1u16),
        2 => any::<u16>(),
    ]
}

fn address() -> impl Strategy<Value = Address> {
    proptest::array::uniform8(segment()).prop_map(Address::from_segments)
}

proptest! {
    #[test]
    fn parse_of_format_is_identity(addr in address()) {
        prop_assert_eq!(parse(&format(&addr)), Ok(addr));
    }

    #[test]
    fn canonical_text_is_a_fixed_point(addr in address()) {
        let text = format(&addr);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(format(&reparsed), text);
    }

    #[test]
    fn uppercase_and_exploded_inputs_agree(addr in address()) {
        prop_assert_eq!(parse(&addr.exploded()), Ok(addr));
        prop_assert_eq!(parse(&format(&addr).to_uppercase()), Ok(addr));
    }

    #[test]
    fn agrees_with_std(addr in address()) {
        let text = format(&addr);
        let std_addr: Ipv6Addr = text.parse().unwrap();
        prop_assert_eq!(std_addr, Ipv6Addr::from(addr));
    }

    #[test]
    fn canonical_text_has_no_triple_colon(addr in address()) {
        let text = format(&addr);
        prop_assert!(!text.contains(":::"));
        prop_assert!(text.matches("::").count() <= 1);
        prop_assert_eq!(text.to_lowercase(), text);
    }

    #[test]
    fn ordering_matches_u128(a in address(), b in address()) {
        prop_assert_eq!(a.cmp(&b), u128::from(a).cmp(&u128::from(b)));
    }

    #[test]
    fn scoped_round_trip(addr in address(), zone in "[a-z][a-z0-9]{0,14}") {
        let scoped = ScopedAddress::with_zone(addr, zone.clone());
        let parsed: ScopedAddress = scoped.to_string().parse().unwrap();
        prop_assert_eq!(parsed.zone(), Some(zone.as_str()));
        prop_assert_eq!(parsed, scoped);
    }

    #[test]
    fn parser_never_panics(text in "[0-9a-fA-F:.%]{0,48}") {
        let _ = parse(&text);
        let _ = text.parse::<ScopedAddress>();
    }
}
