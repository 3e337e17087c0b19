//! Employee data model.
//!
//! `Employee` doubles as the domain record and the outward shape returned
//! to the embedding routing layer; the two were field-for-field identical
//! upstream of this crate, so a separate outward DTO would only add a copy.
//! `NewEmployee` is the inbound create payload.

use serde::{Deserialize, Serialize};

/// One employee record as observed from the upstream directory.
///
/// The upstream guarantees `id` on every response path. The remaining
/// fields are defaulted when the upstream omits them; `email` stays
/// optional end to end and is skipped from serialised output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque upstream-assigned identifier, immutable once set.
    pub id: String,
    /// Display name, used for search and deletion.
    pub name: String,
    /// Salary; aggregate operations assume it is present on every record.
    pub salary: u32,
    /// Age in years.
    pub age: u32,
    /// Job title.
    pub title: String,
    /// Contact address, when the upstream knows one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Payload for creating an employee.
///
/// Has no `id` field: identifiers are assigned by the upstream, and the
/// create contract must never carry a caller-supplied one. `email` is
/// accepted for shape compatibility with [`Employee`] but the upstream
/// create contract has no email field, so it is never sent on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Display name of the new employee.
    pub name: String,
    /// Salary of the new employee.
    pub salary: u32,
    /// Age in years.
    pub age: u32,
    /// Job title.
    pub title: String,
    /// Contact address; ignored by the upstream create contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
