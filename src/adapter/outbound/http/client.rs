//! Blocking client for the employees REST API.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, info};

use super::dto::EmployeesResponse;
use crate::domain::employee::RawEmployee;
use crate::error::{Error, Result};
use crate::port::outbound::source::RecordSource;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Employees API client.
///
/// Performs a single `GET {base_url}/employees` per [`RecordSource::fetch`]
/// call, with no retries and the transport's default timeouts.
#[derive(Debug, Clone)]
pub struct EmployeeApiClient {
    client: Client,
    base_url: String,
}

impl EmployeeApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. no TLS
    /// backend is available).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// URL of the employees listing.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/employees", self.base_url)
    }
}

impl RecordSource for EmployeeApiClient {
    fn fetch(&self) -> Result<Vec<RawEmployee>> {
        let url = self.endpoint();
        info!(url = %url, "Fetching employees");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Transport { status });
        }

        let envelope = EmployeesResponse::parse(&response.text()?)?;
        debug!(status = ?envelope.status, "Received employees envelope");

        let employees = envelope.into_employees()?;
        debug!(count = employees.len(), "Fetched employees");

        Ok(employees)
    }
}
