use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

use monthgrid::config::{data_dir, AppConfig};

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the JSON on stdout. The returned guard flushes the file writer on drop.
pub fn init(cfg: &AppConfig) -> Result<Option<WorkerGuard>> {
    let (level, level_err) = match parse_level(cfg.log_level()) {
        Ok(level) => (level, None),
        Err(e)    => (LevelFilter::WARN, Some(e)),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter(level));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    if !cfg.log_to_file() {
        registry.init();
        report(level_err);
        return Ok(None);
    }

    let log_dir = data_dir();
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "mgrid.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(filter(level));

    registry.with(file_layer).init();
    report(level_err);
    Ok(Some(guard))
}

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse()
        .map_err(|_| anyhow!("unknown log level {level:?}, expected off/error/warn/info/debug/trace"))
}

fn report(level_err: Option<anyhow::Error>) {
    if let Some(e) = level_err {
        tracing::warn!("{e}; logging at warn");
    }
}

fn filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}
