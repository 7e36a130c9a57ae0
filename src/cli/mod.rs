//! CLI module for qa-labels - command-line interface and subcommands.
//!
//! Provides the `run` entry point used by the workflow step and an offline
//! `classify` command for trying comment texts.

pub mod commands;

pub use commands::{Cli, ClassifyArgs, Commands, RunArgs};
