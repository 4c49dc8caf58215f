//! Command line definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "bradify",
    version,
    about = "Watch the ratios of numbers in a Lucas series approach the golden ratio (φ)."
)]
pub struct Cli {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Maximum number of iterations [default: 1000]
    #[arg(short, long)]
    pub iterations: Option<u64>,

    /// Digits of precision to calculate [default: 100]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub precision: Option<u32>,

    /// Terms between cached checkpoints [default: 1000, minimum: 2]
    #[arg(long)]
    pub stride: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Read settings from this TOML file instead of ./bradify.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level. RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Which recurrence to study. Exactly one is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SequenceArgs {
    /// The Fibonacci numbers
    #[arg(short = 'f', long)]
    pub fibonacci: bool,

    /// The Lucas numbers
    #[arg(short = 'l', long)]
    pub lucas: bool,

    /// The Brady numbers
    #[arg(short = 'b', long)]
    pub brady: bool,

    /// A generic sequence given by its first two terms, e.g. -a 3,-7
    #[arg(short = 'a', value_name = "A,B", allow_hyphen_values = true)]
    pub custom: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
