//! Employee directory facade library.
//!
//! Exposes read (list, get-by-id, name search, salary aggregates), write
//! (create), and delete (by name) operations over an upstream employee
//! directory REST service. The facade owns no record state: every
//! operation round-trips to the upstream. The inbound routing layer that
//! maps these operations onto HTTP endpoints lives in the embedding
//! application.

pub mod domain;
pub mod outbound;

pub use domain::ports::{EmployeeDirectory, EmployeeDirectoryError};
pub use domain::{Employee, EmployeeService, NewEmployee};
