use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "git-patches",
    version,
    about = "Export every commit of a git repository as a timestamped patch file"
)]
pub struct Cli {
    /// Numeric log level (10 debug, 20 info, 30 warning, 40 error, 50 critical).
    #[arg(short, long, default_value_t = 20)]
    pub log_level: u8,

    /// Hash of the commit after which to start making patches.
    /// If omitted or not found, patches are made for the whole history.
    #[arg(short, long)]
    pub base: Option<String>,

    /// Working copy to read history from (default: current directory).
    #[arg(short, long)]
    pub src: Option<PathBuf>,

    /// Output directory for patch files (default: <src>/patches).
    #[arg(short, long)]
    pub dest: Option<PathBuf>,
}

/// Parse CLI arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
