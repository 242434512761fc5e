//! Wire format of the `/employees` response.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::employee::RawEmployee;
use crate::error::{Error, Result};

/// Envelope around the employee list: `{ "status": ..., "data": [...] }`.
#[derive(Debug, Deserialize)]
pub(super) struct EmployeesResponse {
    /// Free-form; some deployments send `"success"`, others a number.
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl EmployeesResponse {
    /// Parse a response body, rejecting anything that is not the envelope.
    pub(super) fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| Error::Schema(format!("body is not a JSON object: {e}")))
    }

    /// Extract the raw records stored under `data`.
    pub(super) fn into_employees(self) -> Result<Vec<RawEmployee>> {
        let data = self
            .data
            .ok_or_else(|| Error::Schema("missing `data` key".to_string()))?;
        serde_json::from_value(data)
            .map_err(|e| Error::Schema(format!("`data` is not a list of objects: {e}")))
    }
}
