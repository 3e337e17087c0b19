//! Domain entities, ports, and services for the employee facade.
//!
//! Purpose: define the record shapes exposed to callers, the driven port
//! for the upstream directory, and the query/aggregation operations built
//! on top of it. Wire-format concerns stay in the outbound adapters.
//!
//! Public surface:
//! - `Employee` / `NewEmployee` (alias to `employee::*`) — record shapes.
//! - `EmployeeService` (alias to `employee_service::EmployeeService`) —
//!   the facade operations.
//! - `ports` — the upstream directory port and its error taxonomy.

pub mod employee;
pub mod employee_service;
pub mod ports;

pub use self::employee::{Employee, NewEmployee};
pub use self::employee_service::EmployeeService;
