#![forbid(unsafe_code)]

//! Static demo dataset, keyed by department.

use orgchart::{EmployeeRecord, Result};
use std::collections::BTreeMap;

/// Embedded sample dataset.
pub const EMPLOYEES_JSON: &str = include_str!("../data/employees.json");

/// Parse a department-keyed dataset into record lists.
///
/// `BTreeMap` keeps department iteration order stable for scripted output.
pub fn load_departments(json: &str) -> Result<BTreeMap<String, Vec<EmployeeRecord>>> {
    Ok(serde_json::from_str(json)?)
}
