mod commands;
mod config;
mod terminal;

use commands::{CommandLine, Commands, canon, inspect, interfaces};
use config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config::from(&commands);
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Canon { addresses } => {
            print::header("canonical forms", cfg.quiet);
            canon::canon(addresses, &cfg)
        }
        Commands::Inspect { address } => {
            print::header("address details", cfg.quiet);
            inspect::inspect(&address, &cfg)
        }
        Commands::Interfaces => {
            print::header("local ipv6 addresses", cfg.quiet);
            interfaces::interfaces(&cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
