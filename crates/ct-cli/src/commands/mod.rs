//! CLI subcommand implementations.

pub mod sample;
pub mod schedule;
