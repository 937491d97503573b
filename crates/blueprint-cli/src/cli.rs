//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Segment and format AI-generated text
#[derive(Parser, Debug)]
#[command(name = "blueprint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands. Text commands read `FILE`, or stdin when it is
/// omitted or `-`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the sections of a text as JSON
    Parse {
        /// Input file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
        /// Clean the text before parsing
        #[arg(long)]
        clean: bool,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Normalize whitespace and print the result
    Clean {
        /// Input file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Parse, then print canonical markdown
    Format {
        /// Input file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
        /// Clean the text before parsing
        #[arg(long)]
        clean: bool,
    },
    /// Print the header outline, indented by level
    Outline {
        /// Input file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Print a short plain-text preview
    Excerpt {
        /// Input file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
        /// Maximum characters before truncation
        #[arg(long, default_value_t = 160)]
        max_chars: usize,
    },
    /// Manage the configuration file
    Config {
        /// Config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Get a value by dotted key (e.g. `clean.trim`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Where to write it (defaults to the standard location)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
