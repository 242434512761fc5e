//! Employee statistics engine.
//!
//! Wraps a [`RecordSource`] and derives per-field samples and summary
//! statistics from it. The source is consulted lazily: nothing is fetched
//! until the first accessor runs, and the fetched records are then reused
//! for the lifetime of the engine.

use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::domain::employee::{self, EmployeeRecord, RawEmployee, SalaryAgePair};
use crate::domain::error::FieldError;
use crate::domain::stats;
use crate::error::{Error, Result};
use crate::port::outbound::source::RecordSource;

/// Statistics over the employee list served by `S`.
pub struct EmployeeStatistics<S> {
    source: S,
    records: OnceCell<Vec<RawEmployee>>,
}

impl<S: RecordSource> EmployeeStatistics<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            records: OnceCell::new(),
        }
    }

    /// Whether the records have already been fetched.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.records.get().is_some()
    }

    /// The raw records, fetching them on first use.
    ///
    /// A failed fetch is not cached; the next call tries again.
    pub fn raw_records(&self) -> Result<&[RawEmployee]> {
        self.records
            .get_or_try_init(|| {
                let records = self.source.fetch()?;
                debug!(count = records.len(), "Cached employee records");
                Ok::<_, Error>(records)
            })
            .map(Vec::as_slice)
    }

    /// Apply `extract` to every record, failing on the first bad one.
    fn collect<'a, T>(
        &'a self,
        extract: impl Fn(&'a RawEmployee) -> std::result::Result<T, FieldError>,
    ) -> Result<Vec<T>> {
        self.raw_records()?
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                extract(raw).map_err(|e| Error::Parse {
                    index,
                    field: e.field,
                    reason: e.reason,
                })
            })
            .collect()
    }

    /// Every record, fully validated.
    pub fn records(&self) -> Result<Vec<EmployeeRecord>> {
        self.collect(EmployeeRecord::try_from)
    }

    pub fn first_names(&self) -> Result<Vec<String>> {
        self.collect(|raw| raw.first_name().map(str::to_string))
    }

    pub fn last_names(&self) -> Result<Vec<String>> {
        self.collect(|raw| raw.last_name().map(str::to_string))
    }

    pub fn ages(&self) -> Result<Vec<f64>> {
        self.collect(RawEmployee::age)
    }

    pub fn salaries(&self) -> Result<Vec<f64>> {
        self.collect(RawEmployee::salary)
    }

    pub fn mean_age(&self) -> Result<f64> {
        Ok(stats::mean(&self.ages()?)?)
    }

    pub fn median_age(&self) -> Result<f64> {
        Ok(stats::median(&self.ages()?)?)
    }

    pub fn age_variance(&self) -> Result<f64> {
        Ok(stats::population_variance(&self.ages()?)?)
    }

    pub fn mean_salary(&self) -> Result<f64> {
        Ok(stats::mean(&self.salaries()?)?)
    }

    pub fn median_salary(&self) -> Result<f64> {
        Ok(stats::median(&self.salaries()?)?)
    }

    pub fn salary_variance(&self) -> Result<f64> {
        Ok(stats::population_variance(&self.salaries()?)?)
    }

    /// Most common first name; `StatsError::NoUniqueMode` on ties.
    pub fn first_name_mode(&self) -> Result<String> {
        Ok(stats::mode(&self.first_names()?)?)
    }

    /// Most common last name; `StatsError::NoUniqueMode` on ties.
    pub fn last_name_mode(&self) -> Result<String> {
        Ok(stats::mode(&self.last_names()?)?)
    }

    /// Salary/age pairs sorted ascending by salary, ties in input order.
    pub fn salary_age_pairs(&self) -> Result<Vec<SalaryAgePair>> {
        let mut pairs: Vec<SalaryAgePair> =
            self.records()?.iter().map(SalaryAgePair::from).collect();
        employee::sort_by_salary(&mut pairs);
        Ok(pairs)
    }
}
