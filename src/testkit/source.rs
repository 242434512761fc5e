//! In-memory [`RecordSource`] implementations for testing.
//!
//! - [`CountingSource`] - Serves a fixed record list and counts fetches.
//! - [`FailingSource`] - Fails every fetch with a scripted error.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use reqwest::StatusCode;

use crate::domain::employee::RawEmployee;
use crate::error::{Error, Result};
use crate::port::outbound::source::RecordSource;

// ---------------------------------------------------------------------------
// CountingSource
// ---------------------------------------------------------------------------

/// Serves a fixed list of records and counts how often it was asked.
pub struct CountingSource {
    records: Vec<RawEmployee>,
    fetch_count: Arc<AtomicU32>,
}

impl CountingSource {
    pub fn new(records: Vec<RawEmployee>) -> Self {
        Self {
            records,
            fetch_count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Number of fetches so far.
    pub fn calls(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Shared handle to the fetch counter, usable after the source has been
    /// moved into an engine.
    pub fn counter(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.fetch_count)
    }
}

impl RecordSource for CountingSource {
    fn fetch(&self) -> Result<Vec<RawEmployee>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

// ---------------------------------------------------------------------------
// FailingSource
// ---------------------------------------------------------------------------

/// Fails every fetch, counting the attempts.
pub struct FailingSource {
    make_error: fn() -> Error,
    fetch_count: AtomicU32,
}

impl FailingSource {
    /// Fail like an endpoint answering `404 Not Found`.
    pub fn not_found() -> Self {
        Self {
            make_error: || Error::Transport {
                status: StatusCode::NOT_FOUND,
            },
            fetch_count: AtomicU32::new(0),
        }
    }

    /// Fail like a response without the `data` key.
    pub fn missing_data() -> Self {
        Self {
            make_error: || Error::Schema("missing `data` key".to_string()),
            fetch_count: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

impl RecordSource for FailingSource {
    fn fetch(&self) -> Result<Vec<RawEmployee>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Err((self.make_error)())
    }
}
