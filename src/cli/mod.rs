//! CLI module for docdesk - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
