//! File-based logging for qtify-tui
//!
//! The TUI owns the terminal, so tracing output goes to a daily rolling file
//! under the configured directory instead of stdout.

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingSettings;

const LOG_FILE_PREFIX: &str = "qtify-tui";

/// Used when neither `RUST_LOG` nor the configured filter parses
const FALLBACK_FILTER: &str = "warn";

/// Install the global subscriber. Records are flushed until the returned guard
/// is dropped, so the caller keeps it alive for the whole run.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&settings.dir)
        .with_context(|| format!("failed to create log directory '{}'", settings.dir.display()))?;

    let appender = tracing_appender::rolling::daily(&settings.dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let directives = filter_directives(std::env::var("RUST_LOG").ok(), &settings.filter);

    tracing_subscriber::registry()
        .with(EnvFilter::new(&directives))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(dir = %settings.dir.display(), filter = %directives, "Logging initialized");
    Ok(guard)
}

/// Pick the first directive string that parses: the environment, then the config.
fn filter_directives(from_env: Option<String>, configured: &str) -> String {
    from_env
        .into_iter()
        .chain(std::iter::once(configured.to_string()))
        .find(|directives| !directives.trim().is_empty() && EnvFilter::try_new(directives).is_ok())
        .unwrap_or_else(|| FALLBACK_FILTER.to_string())
}

/// Log the result of a catalogue fetch
#[macro_export]
macro_rules! log_fetch_result {
    ($operation:expr, $endpoint:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::info!(operation = $operation, endpoint = %$endpoint, "Fetch succeeded"),
            Err(e) => tracing::warn!(operation = $operation, endpoint = %$endpoint, error = %e, "Fetch failed"),
        }
    };
}

/// Log the start of a catalogue fetch with additional context
#[macro_export]
macro_rules! log_fetch_request {
    ($operation:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, $($field)*, "Fetch started");
    };
}
