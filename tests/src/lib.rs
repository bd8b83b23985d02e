//! Black-box tests for `v6addr-core`, exercising it only through its public API.

mod canonical;
mod classification;
mod properties;
mod scoped;
