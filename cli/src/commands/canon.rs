use std::io::{self, BufRead};

use anyhow::Context;
use colored::*;
use rayon::prelude::*;
use crate::config::Config;
use crate::terminal::{colors, print};
use v6addr_core::{ScopedAddress, ScopedParseError};

/// Prints the canonical form of every input, in input order.
///
/// Fails after reporting every invalid input.
pub fn canon(addresses: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    let inputs: Vec<String> = if addresses.is_empty() {
        read_stdin()?
    } else {
        addresses
    };

    let results = canonicalize_all(&inputs, &cfg.parse);
    let mut failures: usize = 0;

    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(canonical) if cfg.quiet > 1 => print::print(&canonical),
            Ok(canonical) => print::print_status(format!(
                "{} {} {}",
                input.color(colors::TEXT_DEFAULT),
                "→".color(colors::SEPARATOR),
                canonical.color(colors::IPV6_ADDR)
            )),
            Err(err) => {
                failures += 1;
                print::failure(format!("{input}: {:#}", anyhow::Error::new(err)));
            }
        }
    }

    if cfg.quiet == 0 {
        let parsed: ColoredString = format!("{}", inputs.len() - failures).bold().green();
        let total: ColoredString = format!("{}", inputs.len()).bold();
        print::centerln(&format!("{parsed} of {total} addresses canonicalized"));
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} inputs are not valid IPv6 addresses", inputs.len());
    }
    Ok(())
}

/// Parses and re-renders each input in parallel; the output lines up with the input.
pub fn canonicalize_all(
    inputs: &[String],
    config: &v6addr_core::Config,
) -> Vec<Result<String, ScopedParseError>> {
    inputs
        .par_iter()
        .map(|input| {
            ScopedAddress::parse_with(input.trim(), config).map(|scoped| scoped.to_string())
        })
        .collect()
}

fn read_stdin() -> anyhow::Result<Vec<String>> {
    let lines: Vec<String> = io::stdin()
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .context("Failed to read addresses from stdin")?;

    Ok(lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect())
}
