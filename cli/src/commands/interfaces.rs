use colored::*;
use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;
use tracing::warn;

use crate::config::Config;
use crate::terminal::format;
use crate::terminal::print;
use v6addr_core::{Address, ScopedAddress};

/// Lists every interface carrying IPv6, link-local addresses zoned by interface name.
pub fn interfaces(cfg: &Config) -> anyhow::Result<()> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    let with_ipv6: Vec<(String, Vec<(ScopedAddress, u8)>)> = interfaces
        .iter()
        .map(|interface| (interface.name.clone(), ipv6_networks(interface)))
        .filter(|(_, networks)| !networks.is_empty())
        .collect();

    if with_ipv6.is_empty() {
        warn!("No interface with an IPv6 address found");
        return Ok(());
    }

    for (idx, (name, networks)) in with_ipv6.iter().enumerate() {
        if cfg.quiet > 1 {
            for (scoped, prefix) in networks {
                print::print(&format!("{scoped}/{prefix}"));
            }
            continue;
        }

        let details: Vec<(String, ColoredString)> = networks
            .iter()
            .map(|(scoped, prefix)| format::network_to_detail(scoped, *prefix))
            .collect();
        print::tree(idx, name, &details);
    }

    Ok(())
}

/// The IPv6 networks of `interface`, zoned wherever the address requires it.
fn ipv6_networks(interface: &NetworkInterface) -> Vec<(ScopedAddress, u8)> {
    interface
        .ips
        .iter()
        .filter_map(|network| match network {
            IpNetwork::V6(v6) => Some((Address::from(v6.ip()), v6.prefix())),
            IpNetwork::V4(_) => None,
        })
        .map(|(address, prefix)| (zoned(address, &interface.name), prefix))
        .collect()
}

fn zoned(address: Address, interface_name: &str) -> ScopedAddress {
    let unscoped = ScopedAddress::unscoped(address);
    if unscoped.requires_zone() {
        ScopedAddress::with_zone(address, interface_name)
    } else {
        unscoped
    }
}
