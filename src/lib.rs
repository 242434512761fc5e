//! Empstats - descriptive statistics over an employees REST API.
//!
//! Fetches the employee list once, then reports salary and age statistics,
//! the most common first and last names, and a treemap of salaries.
//!
//! # Architecture
//!
//! - **`domain`** - Employee records, statistics primitives, treemap layout
//! - **`port`** - The `RecordSource` seam the engine fetches through
//! - **`adapter`** - CLI (inbound) and HTTP client (outbound)
//! - **`application`** - `EmployeeStatistics`, the lazy fetch-once engine
//! - **`infrastructure`** - Configuration and logging
//!
//! # Example
//!
//! ```no_run
//! use empstats::adapter::outbound::http::client::EmployeeApiClient;
//! use empstats::application::statistics::EmployeeStatistics;
//!
//! fn main() -> empstats::error::Result<()> {
//!     let client = EmployeeApiClient::new("http://dummy.restapiexample.com/api/v1")?;
//!     let stats = EmployeeStatistics::new(client);
//!     println!("{:.2}", stats.mean_salary()?);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
