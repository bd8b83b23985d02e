#![cfg(test)]
use v6addr_core::{
    Address, AddressParseError, Config, ScopedAddress, ScopedParseError, ZonePolicy,
};

#[test]
fn link_local_workflow() {
    let address = Address::new(0xfe80, 0, 0, 0, 0x0200, 0x5eff, 0xfe00, 0x0001);
    assert!(address.is_link_local());
    assert_eq!(address.to_string(), "fe80::200:5eff:fe00:1");

    let scoped = ScopedAddress::with_zone(address, "eth0");
    assert!(scoped.requires_zone());
    assert!(scoped.is_properly_scoped());
    assert_eq!(scoped.to_string(), "fe80::200:5eff:fe00:1%eth0");
}

#[test]
fn scoping_scenarios() {
    let link_local: Address = "fe80::1".parse().unwrap();
    let global: Address = "2001:db8::1".parse().unwrap();

    let zoned = ScopedAddress::new(link_local, Some("eth0".to_string()));
    assert!(zoned.requires_zone());
    assert!(zoned.is_properly_scoped());
    assert_eq!(zoned.to_string(), "fe80::1%eth0");

    let plain = ScopedAddress::new(global, None);
    assert!(!plain.requires_zone());
    assert!(plain.is_properly_scoped());

    let missing = ScopedAddress::new(link_local, None);
    assert!(!missing.is_properly_scoped());
}

#[test]
fn parse_and_format_agree() {
    for text in ["fe80::1%eth0", "2001:db8::1", "fe80::1%12", "ff02::1%wlan0"] {
        let scoped: ScopedAddress = text.parse().unwrap();
        assert_eq!(scoped.to_string(), text);
    }
    let scoped: ScopedAddress = "FE80:0:0:0:0:0:0:1%eth0".parse().unwrap();
    assert_eq!(scoped.to_string(), "fe80::1%eth0");
}

#[test]
fn parse_errors() {
    assert_eq!("fe80::1%".parse::<ScopedAddress>(), Err(ScopedParseError::EmptyZone));
    assert_eq!(
        "fe80::1::2%eth0".parse::<ScopedAddress>(),
        Err(ScopedParseError::InvalidAddress(AddressParseError::InvalidDoubleColon))
    );
    assert_eq!(
        "".parse::<ScopedAddress>(),
        Err(ScopedParseError::InvalidAddress(AddressParseError::EmptyInput))
    );
}

#[test]
fn zone_policies() {
    let interface_names = Config {
        zone_policy: ZonePolicy::InterfaceName,
    };
    assert!(ScopedAddress::parse_with("fe80::1%enp9s0", &interface_names).is_ok());
    assert!(matches!(
        ScopedAddress::parse_with("fe80::1%averyveryverylongname", &interface_names),
        Err(ScopedParseError::InvalidZone { .. })
    ));

    let numeric = Config {
        zone_policy: ZonePolicy::Numeric,
    };
    assert!(ScopedAddress::parse_with("fe80::1%3", &numeric).is_ok());
    assert!(ScopedAddress::parse_with("fe80::1%eth0", &numeric).is_err());

    // without a zone there is nothing to check
    assert!(ScopedAddress::parse_with("fe80::1", &numeric).is_ok());
}
