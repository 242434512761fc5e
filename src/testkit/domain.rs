//! Builders for employee records used across tests.

use serde_json::{json, Value};

use crate::domain::employee::RawEmployee;

/// Build a raw record the way the API serves it: every field a string.
pub fn employee(name: &str, age: &str, salary: &str) -> RawEmployee {
    RawEmployee::new(
        json!({
            "employee_name": name,
            "employee_age": age,
            "employee_salary": salary,
        })
        .as_object()
        .cloned()
        .unwrap_or_default(),
    )
}

/// The first record of the public sample dataset.
pub fn tiger_nixon() -> RawEmployee {
    employee("Tiger Nixon", "61", "320800")
}

/// A five-record dataset with a unique first-name mode ("Ashton") and no
/// unique last-name mode.
pub fn sample_employees() -> Vec<RawEmployee> {
    vec![
        tiger_nixon(),
        employee("Garrett Winters", "63", "170750"),
        employee("Ashton Cox", "66", "86000"),
        employee("Cedric Kelly", "22", "433060"),
        employee("Ashton Satou", "33", "162700"),
    ]
}

/// Wrap records in the `{ "status": "success", "data": [...] }` envelope.
pub fn envelope(records: &[RawEmployee]) -> Value {
    let data: Vec<Value> = records
        .iter()
        .map(|r| {
            json!({
                "employee_name": r.name().ok(),
                "employee_age": r.age().ok().map(|a| a.to_string()),
                "employee_salary": r.salary().ok().map(|s| s.to_string()),
            })
        })
        .collect();
    json!({ "status": "success", "data": data })
}
