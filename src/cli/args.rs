//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outline engine: structural edits, tree rendering, and text normalization
#[derive(Parser, Debug)]
#[command(name = "treeline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Re-emit a normalized outline
    Fmt {
        /// Outline file
        file: PathBuf,
        /// Rewrite the file instead of printing
        #[arg(short, long)]
        in_place: bool,
    },

    /// Render the forest as a tree diagram
    Tree {
        /// Outline file
        file: PathBuf,
    },

    /// Nest a node under its preceding sibling
    Indent {
        /// Outline file
        file: PathBuf,
        /// 1-based position in display order
        line: usize,
        /// Rewrite the file instead of printing
        #[arg(short, long)]
        in_place: bool,
    },

    /// Raise a node to its grandparent's level
    Outdent {
        /// Outline file
        file: PathBuf,
        /// 1-based position in display order
        line: usize,
        /// Rewrite the file instead of printing
        #[arg(short, long)]
        in_place: bool,
    },

    /// Remove a node; its children are promoted
    Delete {
        /// Outline file
        file: PathBuf,
        /// 1-based position in display order
        line: usize,
        /// Rewrite the file instead of printing
        #[arg(short, long)]
        in_place: bool,
    },

    /// Reposition a node relative to another
    Move {
        /// Outline file
        file: PathBuf,
        /// 1-based position of the node to move
        line: usize,
        /// Append as last child of this line
        #[arg(long, conflicts_with_all = ["before", "after"])]
        under: Option<usize>,
        /// Place immediately before this line
        #[arg(long, conflicts_with = "after")]
        before: Option<usize>,
        /// Place immediately after this line
        #[arg(long)]
        after: Option<usize>,
        /// Rewrite the file instead of printing
        #[arg(short, long)]
        in_place: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
