//! Process-wide `tracing` subscriber for the dashboard.

use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Env var selecting the output format.
const FORMAT_VAR: &str = "RUST_LOG_FORMAT";

/// Directive used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "info";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One flattened JSON object per event, for the container log collector.
    Json,
    /// Human-readable lines for local runs.
    Plain,
}

impl LogFormat {
    /// JSON when the variable is unset or `json` (any case); plain otherwise.
    pub fn from_var(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None => Self::Json,
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            Some(_) => Self::Plain,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_tracing() {
    let format = LogFormat::from_var(std::env::var(FORMAT_VAR).ok().as_deref());

    let output = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .boxed(),
        LogFormat::Plain => fmt::layer().with_target(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(output)
        .with(env_filter())
        .init();
}
