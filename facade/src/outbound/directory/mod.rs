//! Upstream employee directory adapters.
//!
//! This module provides the thin HTTP implementation of the
//! `EmployeeDirectory` port.

mod dto;
mod http_directory;

pub use http_directory::{HttpDirectoryBuildError, HttpEmployeeDirectory};
