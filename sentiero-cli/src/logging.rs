//! Logging initialisation for the sentiero CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, so stdout carries
//! only the route report, and bridges the `log` facade into it.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::warn;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "SENTIERO_LOG_FORMAT";

static INITIALISED: OnceLock<LogFormat> = OnceLock::new();

/// Failures that prevent the diagnostics pipeline from starting.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `SENTIERO_LOG_FORMAT` held bytes that are not valid Unicode.
    #[error("`{name}` is not valid Unicode: {source}")]
    InvalidUnicode {
        /// Variable that was read.
        name: &'static str,
        /// Error returned by [`env::var`].
        #[source]
        source: env::VarError,
    },
    /// `SENTIERO_LOG_FORMAT` named a format other than `human` or `json`.
    #[error("log format `{provided}` is not one of `human`, `json`")]
    UnsupportedFormat {
        /// Normalised value that was rejected.
        provided: String,
    },
    /// A global subscriber was already installed.
    #[error("could not install the tracing subscriber: {source}")]
    InstallFailed {
        /// Error reported by the dispatcher.
        #[source]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}

/// Formatting applied to diagnostics on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            rejected => Err(LoggingError::UnsupportedFormat {
                provided: rejected.to_owned(),
            }),
        }
    }
}

/// Reads the requested format from `SENTIERO_LOG_FORMAT`.
///
/// # Errors
/// Returns [`LoggingError`] when the variable is not Unicode or names an
/// unknown format.
pub fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

/// Installs global structured logging once per process.
///
/// The level is controlled with `RUST_LOG` and defaults to `info`. A second
/// call returns the format chosen by the first. A subscriber installed
/// elsewhere is left in place.
///
/// # Errors
/// Returns [`LoggingError`] if `SENTIERO_LOG_FORMAT` is not Unicode or names
/// an unknown format.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INITIALISED.get() {
        return Ok(*format);
    }
    let format = format_from_env()?;
    match install_subscriber(format) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            warn!(error = %source, "structured logging already configured elsewhere");
        }
        Err(err) => return Err(err),
    }
    Ok(*INITIALISED.get_or_init(|| format))
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.compact().boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // `set_global_default` leaves the `log` slot alone, so the bridge is
    // installed here exactly once. Another logger may already own it.
    let _ = LogTracer::init();

    let subscriber = tracing_subscriber::registry().with(env_filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::InstallFailed { source })
}
