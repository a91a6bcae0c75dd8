//! Logging bootstrap for gqldoc output writing.
//!
//! Only available with the `logging` feature. Library consumers should skip
//! this module and install their own subscriber; the writer itself only
//! emits tracing events. The convenience functions here are for the calling
//! application (generator CLI, site plugin host).

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable consulted before falling back to the default level.
const ENV_VAR: &str = "GQLDOC_LOG";

static INIT: Once = Once::new();

/// Verbosity for gqldoc output logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// No logging output.
    Silent,
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Errors, warnings, and info (default).
    #[default]
    Info,
    /// Everything, including per-file write events.
    Debug,
}

impl LogLevel {
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("invalid log level: {}", other)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter())
    }
}

/// Installs a compact global subscriber at the given level.
///
/// `GQLDOC_LOG` overrides `level` when set. Safe to call from multiple
/// threads; only the first call per process takes effect.
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_env_var(ENV_VAR)
            .with_default_directive(level.as_filter().parse().expect("static directive"))
            .from_env_lossy();

        tracing_subscriber::registry()
            .with(filter)
            // Timestamps are left to the consuming application's own logs.
            .with(fmt::layer().compact().with_target(false).without_time())
            .init();
    });
}

/// Installs the global subscriber from `GQLDOC_LOG`, defaulting to info.
///
/// An unparseable value is reported on stderr rather than silently dropped;
/// the subscriber is not installed yet at that point, so `tracing` cannot
/// carry the warning.
pub fn init_logging_from_env() {
    init_logging(level_from(std::env::var(ENV_VAR).ok().as_deref()));
}

fn level_from(value: Option<&str>) -> LogLevel {
    match value {
        None => LogLevel::default(),
        Some(raw) => raw.parse().unwrap_or_else(|error: String| {
            eprintln!("Warning: {ENV_VAR}: {error}; using the default level");
            LogLevel::default()
        }),
    }
}
