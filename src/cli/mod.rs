//! Command line handling

pub mod commands;
