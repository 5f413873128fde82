//! CLI command implementations

pub mod check;
pub mod convert;

mod json_output;
mod reporting;
