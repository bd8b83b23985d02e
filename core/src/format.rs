//! # Canonical Formatter
//!
//! RFC 5952 text for an [`Address`]: lowercase hex without leading zeros,
//! the longest run of two or more zero segments (leftmost on ties) replaced
//! by `::`. The output is unique per address.

use std::fmt::{self, Write};

use crate::address::Address;

/// The canonical text of `address`.
pub fn format(address: &Address) -> String {
    address.to_string()
}

/// The `(start, len)` of the zero run to compress, if any qualifies.
fn longest_zero_run(segments: &[u16; 8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start = 0;
    let mut run_len = 0;

    for (idx, &segment) in segments.iter().enumerate() {
        if segment != 0 {
            run_len = 0;
            continue;
        }
        if run_len == 0 {
            run_start = idx;
        }
        run_len += 1;

        // strictly longer keeps the leftmost run on ties
        if run_len >= 2 && best.is_none_or(|(_, len)| run_len > len) {
            best = Some((run_start, run_len));
        }
    }

    best
}

fn write_groups(f: &mut fmt::Formatter<'_>, groups: &[u16]) -> fmt::Result {
    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            f.write_char(':')?;
        }
        write!(f, "{group:x}")?;
    }
    Ok(())
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = self.segments();

        match longest_zero_run(&segments) {
            Some((start, len)) => {
                write_groups(f, &segments[..start])?;
                f.write_str("::")?;
                write_groups(f, &segments[start + len..])
            }
            None => write_groups(f, &segments),
        }
    }
}

impl Address {
    /// All 8 groups as 4 lowercase hex digits, without compression.
    pub fn exploded(&self) -> String {
        let mut out = String::with_capacity(39);
        for (idx, segment) in self.segments().iter().enumerate() {
            if idx > 0 {
                out.push(':');
            }
            // writing into a String cannot fail
            let _ = write!(out, "{segment:04x}");
        }
        out
    }
}
