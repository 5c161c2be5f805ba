//! Logging for the `boruvka` binary.
//!
//! Diagnostics go to `stderr` through `tracing`; `stdout` carries only the
//! rendered result. Records from crates on the `log` facade are forwarded.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Selects the output format: `human` (default) or `json`.
pub const LOG_FORMAT_ENV: &str = "BORUVKA_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Why logging could not be set up.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `BORUVKA_LOG_FORMAT` is set but is not valid UTF-8.
    #[error("`{LOG_FORMAT_ENV}` is not valid UTF-8: {source}")]
    NonUnicodeFormat {
        #[source]
        source: env::VarError,
    },
    /// `BORUVKA_LOG_FORMAT` names a format other than `human` or `json`.
    #[error("`{LOG_FORMAT_ENV}={provided}` is not a log format; use `human` or `json`")]
    UnsupportedFormat { provided: String },
    /// Another global subscriber is already installed.
    #[error("global subscriber already set: {source}")]
    SubscriberInstall {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Output format for log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-field text lines for terminals.
    #[default]
    Human,
    /// One JSON object per line, including the span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    /// Reads [`LOG_FORMAT_ENV`], defaulting to [`LogFormat::Human`] when unset.
    ///
    /// # Errors
    /// Returns [`LoggingError`] for non-UTF-8 or unsupported values.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => {
                Err(LoggingError::NonUnicodeFormat { source })
            }
        }
    }
}

/// Sets up process-wide logging once; later calls return immediately.
///
/// `RUST_LOG` filters events (default `info`) and [`LOG_FORMAT_ENV`] picks the
/// format. If some other subscriber already owns the global slot it is kept
/// and a note goes to `stderr`.
///
/// # Errors
/// Returns [`LoggingError`] when the format variable is invalid.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber(LogFormat::from_env()?) {
        Ok(()) => {}
        Err(LoggingError::SubscriberInstall { source }) => report_existing_subscriber(&source),
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

#[expect(
    clippy::print_stderr,
    reason = "tracing may not be ours to use when another subscriber won"
)]
fn report_existing_subscriber(source: &tracing_subscriber::util::TryInitError) {
    eprintln!("keeping the existing tracing subscriber: {source}");
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    // Best-effort: another logger may already own the `log` slot.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::SubscriberInstall { source })
}
