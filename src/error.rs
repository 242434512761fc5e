use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::error::StatsError;

/// Problems with the config file, environment overrides or flags.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config field `{field}` must not be empty")]
    MissingField { field: &'static str },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("cannot read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("malformed config file: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    /// The employees endpoint answered with a non-success status.
    #[error("endpoint responded with an error: {status}")]
    Transport { status: StatusCode },

    /// The response body is not the expected `{ "data": [...] }` envelope.
    #[error("unexpected response contents for /employees: {0}")]
    Schema(String),

    /// A record field could not be coerced into the expected shape.
    #[error("record {index}: invalid {field}: {reason}")]
    Parse {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("request to the employees endpoint failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
