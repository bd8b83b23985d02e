pub mod canon;
pub mod inspect;
pub mod interfaces;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use v6addr_core::ZonePolicy;

#[derive(Parser)]
#[command(name = "v6addr")]
#[command(about = "Parse, canonicalize and inspect IPv6 addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; repeat to print results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Which zone identifiers are accepted after '%'
    #[arg(long, value_enum, default_value_t = ZonePolicyArg::Opaque, global = true)]
    pub zone_policy: ZonePolicyArg,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the canonical form of each address (reads stdin when none are given)
    #[command(alias = "c")]
    Canon { addresses: Vec<String> },
    /// Show classification, scope and zone details of one address
    #[command(alias = "i")]
    Inspect { address: String },
    /// List the IPv6 addresses of the local network interfaces
    #[command(alias = "if")]
    Interfaces,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ZonePolicyArg {
    Opaque,
    InterfaceName,
    Numeric,
}

impl From<ZonePolicyArg> for ZonePolicy {
    fn from(arg: ZonePolicyArg) -> Self {
        match arg {
            ZonePolicyArg::Opaque => ZonePolicy::Opaque,
            ZonePolicyArg::InterfaceName => ZonePolicy::InterfaceName,
            ZonePolicyArg::Numeric => ZonePolicy::Numeric,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
