//! Employee records as served by the employees endpoint.
//!
//! [`RawEmployee`] keeps the JSON object untouched; fields are validated only
//! when a consumer asks for them. [`EmployeeRecord`] is the fully validated
//! view and [`SalaryAgePair`] the derived value used for charting.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::FieldError;

/// JSON key holding the `"First Last"` employee name.
pub const NAME_FIELD: &str = "employee_name";
/// JSON key holding the employee age.
pub const AGE_FIELD: &str = "employee_age";
/// JSON key holding the employee salary.
pub const SALARY_FIELD: &str = "employee_salary";

static FIRST_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)\s").expect("first name pattern is valid"));
// A single trailing newline may follow the last name.
static LAST_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s([A-Za-z]+)\n?$").expect("last name pattern is valid"));

/// One unvalidated employee object from the `data` array.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawEmployee(Map<String, Value>);

impl RawEmployee {
    /// Wrap an already-parsed JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    fn field(&self, key: &'static str) -> Result<&Value, FieldError> {
        self.0
            .get(key)
            .ok_or_else(|| FieldError::new(key, "field is missing"))
    }

    /// The full `"First Last"` name.
    pub fn name(&self) -> Result<&str, FieldError> {
        match self.field(NAME_FIELD)? {
            Value::String(name) => Ok(name),
            other => Err(FieldError::new(
                NAME_FIELD,
                format!("expected a string, got {other}"),
            )),
        }
    }

    /// Leading alphabetic token of the name, e.g. `Tiger` in `Tiger Nixon`.
    pub fn first_name(&self) -> Result<&str, FieldError> {
        let name = self.name()?;
        capture(&FIRST_NAME, name)
            .ok_or_else(|| FieldError::new(NAME_FIELD, format!("no first name in {name:?}")))
    }

    /// Trailing alphabetic token of the name, e.g. `Nixon` in `Tiger Nixon`.
    pub fn last_name(&self) -> Result<&str, FieldError> {
        let name = self.name()?;
        capture(&LAST_NAME, name)
            .ok_or_else(|| FieldError::new(NAME_FIELD, format!("no last name in {name:?}")))
    }

    /// Age coerced to a float.
    pub fn age(&self) -> Result<f64, FieldError> {
        coerce_number(AGE_FIELD, self.field(AGE_FIELD)?)
    }

    /// Salary coerced to a float.
    pub fn salary(&self) -> Result<f64, FieldError> {
        coerce_number(SALARY_FIELD, self.field(SALARY_FIELD)?)
    }
}

fn capture<'a>(pattern: &Regex, haystack: &'a str) -> Option<&'a str> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Accept JSON numbers and numeric strings (the API serves both).
fn coerce_number(field: &'static str, value: &Value) -> Result<f64, FieldError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(FieldError::new(
            field,
            format!("{value} is not a finite number"),
        )),
    }
}

/// Validated employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub name: String,
    pub age: f64,
    pub salary: f64,
}

impl TryFrom<&RawEmployee> for EmployeeRecord {
    type Error = FieldError;

    fn try_from(raw: &RawEmployee) -> Result<Self, Self::Error> {
        Ok(Self {
            name: raw.name()?.to_string(),
            age: raw.age()?,
            salary: raw.salary()?,
        })
    }
}

/// Salary and age of one employee, the unit of the treemap chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryAgePair {
    pub salary: f64,
    pub age: f64,
}

impl From<&EmployeeRecord> for SalaryAgePair {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            salary: record.salary,
            age: record.age,
        }
    }
}

/// Sort pairs ascending by salary. The sort is stable: equal salaries keep
/// their input order.
pub fn sort_by_salary(pairs: &mut [SalaryAgePair]) {
    pairs.sort_by(|a, b| a.salary.total_cmp(&b.salary));
}
