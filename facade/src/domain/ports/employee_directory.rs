//! Driven port for the upstream employee directory service.
//!
//! The domain owns the record shapes and the error taxonomy so the query
//! service stays adapter-agnostic. Each call is a single upstream round
//! trip; no retries happen anywhere behind this port.

use async_trait::async_trait;

use crate::domain::{Employee, NewEmployee};

/// Errors surfaced while calling the upstream directory.
///
/// Only 400, 429, and 5xx responses are given stable domain meaning;
/// every other non-2xx status passes through as
/// [`EmployeeDirectoryError::UnexpectedStatus`] with its original status
/// code and body, and callers must handle that case themselves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeDirectoryError {
    /// The upstream rejected the request payload (HTTP 400). The response
    /// body is retained for diagnostics.
    #[error("upstream rejected employee data: {body}")]
    InvalidInput {
        /// Raw response body as sent by the upstream.
        body: String,
    },
    /// The upstream signalled it is handling too many requests (HTTP 429).
    #[error("upstream directory is handling too many requests")]
    RateLimited,
    /// The upstream failed with a server error (HTTP 5xx).
    #[error("upstream directory failed with status {status}")]
    Unavailable {
        /// Exact 5xx status returned by the upstream.
        status: u16,
    },
    /// Any other non-2xx status, passed through unclassified.
    #[error("upstream directory returned unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// Status code returned by the upstream.
        status: u16,
        /// Raw response body as sent by the upstream.
        body: String,
    },
    /// Transport failed before a response was received.
    #[error("directory transport failed: {message}")]
    Transport {
        /// Description of the underlying transport failure.
        message: String,
    },
    /// A successful response body could not be decoded.
    #[error("directory response decode failed: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
}

impl EmployeeDirectoryError {
    /// Construct an [`EmployeeDirectoryError::InvalidInput`].
    pub fn invalid_input(body: impl Into<String>) -> Self {
        Self::InvalidInput { body: body.into() }
    }

    /// Construct an [`EmployeeDirectoryError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Construct an [`EmployeeDirectoryError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Upstream HTTP status associated with this error, where one exists.
    ///
    /// Routing layers switch on this to pick a response code; transport
    /// and decode failures never carried a status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidInput { .. } => Some(400),
            Self::RateLimited => Some(429),
            Self::Unavailable { status } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Port for the upstream employee directory.
///
/// # Examples
///
/// ```rust,ignore
/// use facade::domain::ports::{EmployeeDirectory, FixtureEmployeeDirectory};
///
/// let directory = FixtureEmployeeDirectory;
/// let employees = directory.list_all().await?;
/// assert!(employees.is_empty());
/// # Ok::<(), facade::domain::ports::EmployeeDirectoryError>(())
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Fetch the full employee collection in upstream order.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeDirectoryError>;

    /// Fetch one employee; `None` when the upstream holds no record.
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, EmployeeDirectoryError>;

    /// Create an employee; the upstream assigns the id. `None` when the
    /// upstream acknowledged the request without returning a record.
    async fn create(
        &self,
        employee: &NewEmployee,
    ) -> Result<Option<Employee>, EmployeeDirectoryError>;

    /// Delete records matching `name`; match semantics are upstream-defined.
    async fn delete_by_name(&self, name: &str) -> Result<(), EmployeeDirectoryError>;
}

/// Fixture implementation backed by an empty directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEmployeeDirectory;

#[async_trait]
impl EmployeeDirectory for FixtureEmployeeDirectory {
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeDirectoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Employee>, EmployeeDirectoryError> {
        Ok(None)
    }

    async fn create(
        &self,
        _employee: &NewEmployee,
    ) -> Result<Option<Employee>, EmployeeDirectoryError> {
        Ok(None)
    }

    async fn delete_by_name(&self, _name: &str) -> Result<(), EmployeeDirectoryError> {
        Ok(())
    }
}
