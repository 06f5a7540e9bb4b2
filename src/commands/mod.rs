//! Subcommand handlers for the `lcc` binary.

pub mod query;
pub mod sequence;
