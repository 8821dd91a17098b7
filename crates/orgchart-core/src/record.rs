#![forbid(unsafe_code)]

//! Flat employee records — the input boundary of the chart core.
//!
//! Records arrive as flat JSON objects using the upstream dataset's column
//! names (`EMPLOYEE_EMPLOYEE_ID`, `EMPLOYEE_LEGAL_NAME`,
//! `EMPLOYEE_REPORTING_TO`). Every field the core does not interpret is kept
//! verbatim in [`EmployeeRecord::attributes`] and passed through to the
//! display layer untouched.

use bitflags::bitflags;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Stable unique identifier for an employee.
///
/// This is the key for all interaction state (expansion, detail panels,
/// search match). Display names are never used as state keys: two employees
/// may share a legal name, ids may not.
///
/// Upstream datasets store the id as a string or a bare number; both
/// deserialize to the same canonical string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Create an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty id (a data-quality condition, not a hard error).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = EmployeeId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or numeric employee id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EmployeeId, E> {
                Ok(EmployeeId::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<EmployeeId, E> {
                Ok(EmployeeId::new(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<EmployeeId, E> {
                Ok(EmployeeId::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// One flat employee record.
///
/// Immutable input to the hierarchy builder. `reporting_to` references
/// another record's `legal_name`; `None` or an empty string means "no
/// manager" and makes the record a root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique key. May be empty in dirty data (flagged, never fatal).
    #[serde(rename = "EMPLOYEE_EMPLOYEE_ID", default)]
    pub employee_id: EmployeeId,

    /// Display name; also the manager-resolution key and the search key.
    #[serde(rename = "EMPLOYEE_LEGAL_NAME", default)]
    pub legal_name: String,

    /// Manager's legal name, if any.
    #[serde(rename = "EMPLOYEE_REPORTING_TO", default)]
    pub reporting_to: Option<String>,

    /// Uninterpreted display attributes (department, title, gender, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl EmployeeRecord {
    /// Create a record with the given id and legal name.
    #[must_use]
    pub fn new(id: impl Into<EmployeeId>, legal_name: impl Into<String>) -> Self {
        Self {
            employee_id: id.into(),
            legal_name: legal_name.into(),
            reporting_to: None,
            attributes: Map::new(),
        }
    }

    /// Set the manager reference.
    #[must_use]
    pub fn reporting_to(mut self, manager: impl Into<String>) -> Self {
        self.reporting_to = Some(manager.into());
        self
    }

    /// Attach a passthrough display attribute.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Manager reference with empty strings normalized away.
    #[must_use]
    pub fn manager_name(&self) -> Option<&str> {
        self.reporting_to.as_deref().filter(|name| !name.is_empty())
    }
}

bitflags! {
    /// Data-quality conditions observed while building the hierarchy.
    ///
    /// All of these are warnings: the node is still built and rendered
    /// where possible.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RecordFlags: u8 {
        /// The record has an empty `employee_id`; it is unreachable through
        /// the id index.
        const MISSING_ID = 1;
        /// The record has an empty `legal_name`; it can never be resolved
        /// as anyone's manager and never matches a search.
        const MISSING_NAME = 1 << 1;
        /// Another earlier record shares this `legal_name`; manager
        /// references to the name resolve to the earlier record.
        const DUPLICATE_NAME = 1 << 2;
        /// `reporting_to` names no known record; the node became a root.
        const UNRESOLVED_MANAGER = 1 << 3;
    }
}
