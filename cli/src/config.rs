use crate::commands::CommandLine;

pub struct Config {
    /// 0 prints everything, 1 drops decoration, 2 prints bare results.
    pub quiet: u8,
    pub no_banner: bool,
    /// Handed to the parser for every scoped address.
    pub parse: v6addr_core::Config,
}

impl From<&CommandLine> for Config {
    fn from(commands: &CommandLine) -> Self {
        Self {
            quiet: commands.quiet,
            no_banner: commands.no_banner,
            parse: v6addr_core::Config {
                zone_policy: commands.zone_policy.into(),
            },
        }
    }
}
