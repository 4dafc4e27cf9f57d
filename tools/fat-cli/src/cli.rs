//! Argument definitions.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// FAT chain storage: files split into chained 20-character blocks
#[derive(Parser, Debug)]
#[command(name = "fat-cli")]
#[command(about = "Create, read and manage files in a FAT chain store")]
pub struct Args {
    /// Directory holding records.kv and blocks.kv (overrides FAT_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Use a throwaway in-memory store
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new file
    Create {
        name: String,
        #[command(flatten)]
        content: ContentArgs,
    },
    /// List files, or the trash with --trash
    List {
        #[arg(long)]
        trash: bool,
    },
    /// Print a file's content
    Open { name: String },
    /// Show a file's metadata, trashed or not
    Stat { name: String },
    /// Replace a file's content
    Modify {
        name: String,
        #[command(flatten)]
        content: ContentArgs,
        /// Commit the change; without it the change is only previewed
        #[arg(long)]
        yes: bool,
    },
    /// Move a file to the trash
    Delete { name: String },
    /// Restore a file from the trash
    Recover { name: String },
    /// Scan for broken chains and orphaned blocks
    Check,
}

/// Where new content comes from.
#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct ContentArgs {
    /// Content as an argument
    #[arg(conflicts_with = "stdin")]
    pub content: Option<String>,

    /// Read content verbatim from standard input
    #[arg(long)]
    pub stdin: bool,
}
