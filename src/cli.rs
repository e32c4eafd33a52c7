use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "quality-guard")]
#[command(author, version, about = "Heuristic code quality guard - post-edit hook and checker")]
#[command(long_about = "Flags oversized functions, deep nesting, oversized files and stale\n\
    commented-out code using language-agnostic lexical heuristics.\n\n\
    Exit codes:\n  \
    0 - No violations (or event skipped in hook mode)\n  \
    1 - Violations found (check mode) or malformed hook input\n  \
    2 - Advisory violation report (hook mode)\n  \
    3 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan files or directories for quality violations
    Check(CheckArgs),

    /// Run as a post-edit hook: read a tool-use event from stdin
    Hook(HookArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum lines per function (overrides config)
    #[arg(long)]
    pub max_function_lines: Option<usize>,

    /// Maximum nesting depth (overrides config)
    #[arg(long)]
    pub max_nesting_depth: Option<usize>,

    /// Maximum lines per file (overrides config)
    #[arg(long)]
    pub max_file_lines: Option<usize>,

    /// Minimum stale comment run length (overrides config)
    #[arg(long)]
    pub min_stale_comment_run: Option<usize>,

    /// File extensions to check (comma-separated, e.g., rs,go,py)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Also scan test files
    #[arg(long)]
    pub include_tests: bool,

    /// Do not respect .gitignore rules
    #[arg(long)]
    pub no_gitignore: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only report, don't fail on violations
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct HookArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".quality-guard.toml")]
    pub output: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
