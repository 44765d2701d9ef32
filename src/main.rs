use anyhow::{Context, Result};

use git_patches::cli;
use git_patches::config::ExportConfig;
use git_patches::export::Exporter;
use git_patches::git::GitCli;
use git_patches::logging::setup_logger;

fn main() -> Result<()> {
    let args = cli::parse_args();
    setup_logger(args.log_level);

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = ExportConfig::resolve(args.src, args.dest, args.base, &cwd)
        .context("Invalid configuration")?;

    let provider = GitCli::new(&config.src);
    let exporter = Exporter::new(provider, config);

    let summary = exporter.run().context("Patch export failed")?;
    tracing::debug!(
        considered = summary.considered,
        written = summary.written,
        skipped = summary.skipped,
        "export finished"
    );

    Ok(())
}
