//! Command-line interface for the `besttrack` binary

pub mod args;
pub mod commands;
