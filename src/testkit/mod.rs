//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - In-memory [`RecordSource`](crate::port::outbound::source::RecordSource)
//!   doubles: `CountingSource`, `FailingSource`.
//! - [`domain`] - Builders for raw employee records and canned payloads.

pub mod domain;
pub mod source;
