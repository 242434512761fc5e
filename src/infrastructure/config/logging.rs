//! Tracing subscriber setup.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// `[logging]` section.
///
/// Diagnostics always go to stderr so they never interleave with reports
/// printed on stdout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `warn` or
    /// `empstats=debug`.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Install the global subscriber. `RUST_LOG` wins over `level`.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_str()));
        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

        if self.format == "json" {
            builder.json().init();
        } else {
            builder.init();
        }
    }
}
