//! Logging initialization: human-readable lines (local timestamp, level, target, fields) teed to
//! stdout and a log file.

use std::fs::File;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

const DEFAULT_DIRECTIVE: &str = "info";

/// Local time in `YYYY-MM-DD HH:MM:SS`, the same shape as registry timestamps.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// `RUST_LOG` if set and valid, `info` otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber writing to stdout and `log_file`
/// (see [`BotConfig::open_log_file`](crate::config::BotConfig::open_log_file)).
///
/// Line shape: `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value ...`, no ANSI codes.
/// Load `.env` before calling so `RUST_LOG` is visible.
pub fn init_tracing(log_file: File) -> anyhow::Result<()> {
    let writer = io::stdout.and(Arc::new(log_file));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Global tracing subscriber already set: {}", e))
}
