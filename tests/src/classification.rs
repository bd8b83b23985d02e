#![cfg(test)]
use v6addr_core::{Address, Classification, Scope};

/// `[loopback, unspecified, link_local, multicast, unique_local, global_unicast]`
fn flags(text: &str) -> [bool; 6] {
    let a: Address = text.parse().unwrap();
    [
        a.is_loopback(),
        a.is_unspecified(),
        a.is_link_local(),
        a.is_multicast(),
        a.is_unique_local(),
        a.is_global_unicast(),
    ]
}

#[test]
fn exactly_one_predicate_holds() {
    assert_eq!(flags("::1"), [true, false, false, false, false, false]);
    assert_eq!(flags("::"), [false, true, false, false, false, false]);
    assert_eq!(flags("fe80::1"), [false, false, true, false, false, false]);
    assert_eq!(flags("ff02::1"), [false, false, false, true, false, false]);
    assert_eq!(flags("fd00:1234::1"), [false, false, false, false, true, false]);
    assert_eq!(flags("2001:db8::1"), [false, false, false, false, false, true]);
}

#[test]
fn well_known_addresses() {
    let cases = [
        ("::1", Classification::Loopback),
        ("::", Classification::Unspecified),
        ("fe80::200:5eff:fe00:1", Classification::LinkLocal),
        ("ff02::1", Classification::Multicast),
        ("fc00::1", Classification::UniqueLocal),
        ("2a02:908:8c1:b880::b054", Classification::GlobalUnicast),
        ("::ffff:192.0.2.1", Classification::Other),
    ];

    for (text, expected) in cases {
        let address: Address = text.parse().unwrap();
        assert_eq!(address.classification(), expected, "{text}");
    }
}

#[test]
fn multicast_scope_field() {
    let scope = |s: &str| s.parse::<Address>().unwrap().scope();
    assert_eq!(scope("ff02::1"), Scope::LinkLocal);
    assert_eq!(scope("ff05::2"), Scope::SiteLocal);
    assert_eq!(scope("ff0e::1"), Scope::Global);
    assert_eq!(scope("ff01::1"), Scope::InterfaceLocal);
}

#[test]
fn ordering_follows_numeric_value() {
    let mut addresses: Vec<Address> = ["2001:db8::2", "::1", "fe80::1", "2001:db8::10", "::"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    addresses.sort();

    let sorted: Vec<String> = addresses.iter().map(Address::to_string).collect();
    assert_eq!(sorted, ["::", "::1", "2001:db8::2", "2001:db8::10", "fe80::1"]);
}
