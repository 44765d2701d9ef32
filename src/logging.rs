use std::io::IsTerminal;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable that overrides `--log-level` with filter directives.
pub const LOG_ENV_VAR: &str = "GIT_PATCHES_LOG";

/// Map a numeric log level (10 debug .. 50 critical) to a tracing filter.
pub fn level_filter(level: u8) -> LevelFilter {
    match level {
        0..=9 => LevelFilter::TRACE,
        10..=19 => LevelFilter::DEBUG,
        20..=29 => LevelFilter::INFO,
        30..=39 => LevelFilter::WARN,
        40..=59 => LevelFilter::ERROR,
        _ => LevelFilter::OFF,
    }
}

pub fn setup_logger(level: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter(level).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let fmt = fmt::layer()
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter)
        .init();
}
