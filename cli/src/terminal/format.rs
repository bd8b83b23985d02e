use crate::terminal::colors;
use colored::*;
use v6addr_core::{Address, Classification, ScopedAddress};

type Detail = (String, ColoredString);

/// Short tag for an address class, as shown in interface listings.
pub fn class_tag(address: &Address) -> &'static str {
    match address.classification() {
        Classification::GlobalUnicast => "GUA",
        Classification::UniqueLocal => "ULA",
        Classification::LinkLocal => "LLA",
        Classification::Multicast => "MCAST",
        Classification::Loopback => "LO",
        Classification::Unspecified => "ANY",
        Classification::Other => "IPv6",
    }
}

/// `address%zone` with each part in its own color.
pub fn scoped_colored(scoped: &ScopedAddress) -> ColoredString {
    let address: ColoredString = scoped.address().to_string().color(colors::IPV6_ADDR);
    match scoped.zone() {
        Some(zone) => {
            let zone: ColoredString = zone.color(colors::ZONE);
            format!("{}{}{}", address, "%".color(colors::SEPARATOR), zone).normal()
        }
        None => address,
    }
}

pub fn network_to_detail(scoped: &ScopedAddress, prefix: u8) -> Detail {
    let prefix: ColoredString = prefix.to_string().color(colors::IPV6_PREFIX);
    let slash: ColoredString = "/".color(colors::SEPARATOR);
    let value: ColoredString = format!("{}{}{}", scoped_colored(scoped), slash, prefix).normal();
    (class_tag(scoped.address()).to_string(), value)
}

pub fn yes_no(value: bool) -> ColoredString {
    if value {
        "yes".color(colors::GOOD)
    } else {
        "no".color(colors::BAD)
    }
}
