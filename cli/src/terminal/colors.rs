use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV6_ADDR: Color = Color::BrightCyan;
pub const IPV6_PREFIX: Color = Color::Cyan;
pub const ZONE: Color = Color::Magenta;
pub const GOOD: Color = Color::Green;
pub const BAD: Color = Color::Red;
