//! User-facing output. Everything goes out as an event on [`PRINT_TARGET`],
//! which the subscriber writes verbatim and never filters away.

use std::fmt::Display;

use crate::terminal::{colors, logging::PRINT_TARGET};
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Key column width of `aligned_line`, wide enough for "Properly scoped".
pub const KEY_WIDTH: usize = 15;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// A full-width rule with `title` centered in it.
fn rule(title: &str, fill: &str) -> String {
    let title_width: usize = console::measure_text_width(title);
    let dashes: usize = TOTAL_WIDTH.saturating_sub(title_width);
    let left: String = fill.repeat(dashes / 2);
    let right: String = fill.repeat(dashes - dashes / 2);
    format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        title,
        right.color(colors::SEPARATOR)
    )
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    let title: String = format!("⟦ V6ADDR v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&rule(&title.bright_green().bold().to_string(), "═"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&rule(&title.color(colors::PRIMARY).to_string(), "─"));
}

pub fn end_of_program(q_level: u8) {
    if q_level == 0 {
        print(&rule("", "═"));
    }
}

/// `> key.....: value`
pub fn aligned_line(key: &str, value: impl Display) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg.as_ref()));
}

/// Reports a failed item. Unlike `tracing::error!`, it survives any `RUST_LOG`.
pub fn failure<T: AsRef<str>>(msg: T) {
    print(&format!("{} {}", "[-]".red().bold(), msg.as_ref()));
}

/// `[idx] name` followed by one branch per detail.
pub fn tree(idx: usize, name: &str, details: &[(String, ColoredString)]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));

    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}
