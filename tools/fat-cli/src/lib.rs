//! # fat-cli
//!
//! One-shot command-line driver for the FAT chain storage engine. Each
//! invocation opens the configured backend, runs a single command and exits.
//!
//! - `cli` - clap argument definitions
//! - `config` - defaults, then environment, then flags
//! - `commands` - command execution and output formatting

pub mod cli;
pub mod commands;
pub mod config;
