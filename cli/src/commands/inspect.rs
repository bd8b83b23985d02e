use anyhow::Context;
use colored::*;
use tracing::warn;

use crate::config::Config;
use crate::terminal::{colors, format, print};
use v6addr_core::ScopedAddress;

pub fn inspect(text: &str, cfg: &Config) -> anyhow::Result<()> {
    let scoped: ScopedAddress = ScopedAddress::parse_with(text.trim(), &cfg.parse)
        .with_context(|| format!("'{text}' is not an IPv6 address"))?;

    if cfg.quiet > 1 {
        print::print(&scoped.to_string());
        return Ok(());
    }

    print_details(&scoped);

    if !scoped.is_properly_scoped() {
        match scoped.zone() {
            None => warn!(
                "{} is {} and needs a zone, e.g. {}%eth0",
                scoped.address(),
                scoped.address().classification(),
                scoped.address()
            ),
            Some(zone) => warn!(
                "zone '{zone}' has no meaning for {} address {}",
                scoped.address().classification(),
                scoped.address()
            ),
        }
    }

    Ok(())
}

fn print_details(scoped: &ScopedAddress) {
    let address = scoped.address();

    let segments: String = address
        .segments()
        .iter()
        .map(|segment| format!("{segment:#06x}"))
        .collect::<Vec<String>>()
        .join(" ");

    print::aligned_line("Canonical", format::scoped_colored(scoped));
    print::aligned_line("Exploded", address.exploded());
    print::aligned_line("Segments", segments);
    print::aligned_line("Class", address.classification().to_string());
    print::aligned_line("Scope", address.scope().to_string());

    if let Some(ipv4) = address.to_ipv4_mapped() {
        print::aligned_line("IPv4", ipv4.to_string().color(colors::ACCENT));
    }

    let zone: ColoredString = match scoped.zone() {
        Some(zone) => zone.color(colors::ZONE),
        None => "none".color(colors::SEPARATOR),
    };
    print::aligned_line("Zone", zone);
    print::aligned_line("Requires zone", format::yes_no(scoped.requires_zone()));
    print::aligned_line("Properly scoped", format::yes_no(scoped.is_properly_scoped()));
}
