//! DTOs for the upstream employee directory wire contract.
//!
//! Every upstream response arrives wrapped in a `{status, data}` envelope;
//! the decoder reads `data` (a record, a list, or absent) and ignores
//! `status`. Records decode tolerantly, then map into domain `Employee`
//! values in one pass.

use serde::{Deserialize, Serialize};

use crate::domain::{Employee, NewEmployee};

/// Upstream response wrapper. Absent and `null` data are equivalent.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(super) struct EnvelopeDto<T> {
    #[serde(default)]
    pub(super) data: Option<T>,
}

/// One employee record under the upstream's `employee_`-prefixed keys.
///
/// Only `id` is guaranteed on every response path; the other fields
/// default when omitted.
#[derive(Debug, Deserialize)]
pub(super) struct EmployeeRecordDto {
    pub(super) id: String,
    #[serde(default, rename = "employee_name")]
    pub(super) name: Option<String>,
    #[serde(default, rename = "employee_salary")]
    pub(super) salary: Option<u32>,
    #[serde(default, rename = "employee_age")]
    pub(super) age: Option<u32>,
    #[serde(default, rename = "employee_title")]
    pub(super) title: Option<String>,
    #[serde(default, rename = "employee_email")]
    pub(super) email: Option<String>,
}

impl EmployeeRecordDto {
    /// Map into the domain record, defaulting absent non-id fields.
    pub(super) fn into_domain(self) -> Employee {
        Employee {
            id: self.id,
            name: self.name.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            email: self.email,
        }
    }
}

/// Create request body. The upstream contract has no id or email field,
/// so neither can appear here regardless of the inbound payload.
#[derive(Debug, Serialize)]
pub(super) struct CreateEmployeeDto<'a> {
    name: &'a str,
    salary: u32,
    age: u32,
    title: &'a str,
}

impl<'a> From<&'a NewEmployee> for CreateEmployeeDto<'a> {
    fn from(employee: &'a NewEmployee) -> Self {
        Self {
            name: &employee.name,
            salary: employee.salary,
            age: employee.age,
            title: &employee.title,
        }
    }
}

/// Delete request body, keyed on name.
#[derive(Debug, Serialize)]
pub(super) struct DeleteEmployeeDto<'a> {
    pub(super) name: &'a str,
}
