//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the level passed in applies. Output
//! goes to stderr so stdout stays free for the model JSON.

use std::io;

use clap::ValueEnum;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use crate::error::UnimodelError;

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()))
}

/// Install the global subscriber, failing if one is already set.
pub fn try_init_tracing(level: LogLevel, json: bool) -> Result<(), UnimodelError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| UnimodelError::Logging(e.to_string()))
}

/// Install the global subscriber. A subscriber that is already installed is
/// left in place.
pub fn init_tracing(level: LogLevel, json: bool) {
    let _ = try_init_tracing(level, json);
}
