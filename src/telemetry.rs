//! Tracing initialization logic.

use crate::cli::LogFormat;
use crate::config::{Config, Mode, DEFAULT_LOG_FILTER};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Builds the stderr filter, falling back to the default on a bad directive.
fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter '{directive}': {e}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Initialize the tracing subscriber (fmt layer on stderr, text or JSON).
///
/// Stdout carries converted values only, so logs never go there.
pub fn init_tracing(cfg: &Config) {
    let fmt_layer = match cfg.log_format {
        LogFormat::Text => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(cfg.verbose)
            .with_level(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter(&cfg.log_filter))
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        // option_env! so builds outside a git checkout still compile
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_ts = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        "clock-interval starting"
    );

    match cfg.mode {
        Mode::Format { units } => debug!(
            mode = "format",
            units = %units,
            inputs = cfg.values.len(),
            stdin = cfg.reads_stdin(),
            json = cfg.json,
            log_filter = %cfg.log_filter,
            "Configuration loaded"
        ),
        Mode::Parse { strategy, humanize } => debug!(
            mode = "parse",
            bounds = ?strategy.bounds,
            humanize,
            inputs = cfg.values.len(),
            stdin = cfg.reads_stdin(),
            json = cfg.json,
            log_filter = %cfg.log_filter,
            "Configuration loaded"
        ),
    }
}
