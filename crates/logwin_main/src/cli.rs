//! NOTE: Always use singular names for commands and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logwin_config::OutputFormat;
use logwin_domain::{FilterMode, PairingPolicy};

#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Find begin/end windows in log files and filter lines by text"
)]
pub struct Cli {
    /// Path to a TOML config file layered over the defaults.
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output.
    #[arg(long, default_value_t = false, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: TopLevelCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TopLevelCommand {
    /// Pair begin and end markers into windows.
    Search(SearchArgs),

    /// Remove lines by whether they contain a text.
    Filter(FilterArgs),

    /// Print a line range of a file as a standalone document.
    Extract(ExtractArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Log file to search. Content is read from stdin when omitted.
    pub file: Option<PathBuf>,

    /// Text marking the start of a window.
    #[arg(long, short = 'b', allow_hyphen_values = true)]
    pub begin: String,

    /// Text marking the end of a window.
    #[arg(long, short = 'e', allow_hyphen_values = true)]
    pub end: String,

    /// Pairing policy: FIFO or LIFO. Defaults to the configured policy.
    #[arg(long, short = 'p')]
    pub policy: Option<PairingPolicy>,

    /// Output format: text or json. Defaults to the configured format.
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Disable colored output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Print the lines of pair N (1-based) instead of listing results.
    #[arg(long, value_name = "N")]
    pub extract: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Log file to filter. Content is read from stdin when omitted.
    pub file: Option<PathBuf>,

    /// Text to look for in each line.
    #[arg(long, short = 't', allow_hyphen_values = true)]
    pub text: String,

    /// remove-matching or remove-non-matching. Defaults to the configured mode.
    #[arg(long, short = 'm')]
    pub mode: Option<FilterMode>,

    /// Rewrite the file instead of printing the kept lines.
    #[arg(long, short = 'i', default_value_t = false)]
    pub in_place: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Log file to read.
    pub file: PathBuf,

    /// First line to print (1-based).
    #[arg(long)]
    pub from: usize,

    /// Last line to print (1-based, inclusive).
    #[arg(long)]
    pub to: usize,
}
