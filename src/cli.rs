use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::{ColorMode, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "bracket-guard")]
#[command(author, version, about = "Bracket nesting checker for C-family source files")]
#[command(long_about = "Scans source files for bracket-nesting errors and formatting \
    policy violations.\n\n\
    Exit codes:\n  \
    0 - No violations found\n  \
    1 - Violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files for bracket and policy violations
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Source files to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum total line count (overrides config)
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Maximum line length in characters (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Disallowed directive token (overrides config)
    #[arg(long)]
    pub directive: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report violations but exit with code 0
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".bracket-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
