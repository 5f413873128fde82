//! embedgen CLI library.
//!
//! Command implementations behind the `embedgen` binary.

pub mod commands;
