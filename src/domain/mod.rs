//! Employee domain: records, descriptive statistics and treemap geometry.
//!
//! Nothing in here performs I/O.

pub mod employee;
pub mod error;
pub mod stats;
pub mod treemap;
