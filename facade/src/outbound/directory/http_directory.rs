//! Reqwest-backed employee directory adapter.
//!
//! This adapter owns transport details only: request construction, HTTP
//! status classification, and JSON decoding into domain records. It
//! performs exactly one round trip per port call and never retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::dto::{CreateEmployeeDto, DeleteEmployeeDto, EmployeeRecordDto, EnvelopeDto};
use crate::domain::ports::{EmployeeDirectory, EmployeeDirectoryError};
use crate::domain::{Employee, NewEmployee};

/// Errors raised while constructing an [`HttpEmployeeDirectory`].
#[derive(Debug, thiserror::Error)]
pub enum HttpDirectoryBuildError {
    /// The base URL cannot carry path segments.
    #[error("directory base URL cannot be extended with the employee path")]
    InvalidBaseUrl,
    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct directory HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Employee directory adapter performing one HTTP round trip per call.
pub struct HttpEmployeeDirectory {
    client: Client,
    collection_url: Url,
}

impl HttpEmployeeDirectory {
    /// Build an adapter for the directory rooted at `base_url`.
    ///
    /// `base_url` points at the upstream API root (for example
    /// `http://localhost:8112/api/v1`); the adapter appends the
    /// `employee` collection path itself. `timeout` bounds every request
    /// end to end and is the only transport policy the adapter owns.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry path segments or
    /// when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, HttpDirectoryBuildError> {
        let collection_url = collection_url(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            collection_url,
        })
    }

    fn record_url(&self, id: &str) -> Result<Url, EmployeeDirectoryError> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                EmployeeDirectoryError::transport("directory URL cannot carry an id segment")
            })?
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl EmployeeDirectory for HttpEmployeeDirectory {
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeDirectoryError> {
        let body = execute(self.client.get(self.collection_url.clone())).await?;
        let envelope: EnvelopeDto<Vec<EmployeeRecordDto>> = decode_envelope(&body)?;
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(EmployeeRecordDto::into_domain)
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, EmployeeDirectoryError> {
        let body = execute(self.client.get(self.record_url(id)?)).await?;
        let envelope: EnvelopeDto<EmployeeRecordDto> = decode_envelope(&body)?;
        Ok(envelope.data.map(EmployeeRecordDto::into_domain))
    }

    async fn create(
        &self,
        employee: &NewEmployee,
    ) -> Result<Option<Employee>, EmployeeDirectoryError> {
        let request = self
            .client
            .post(self.collection_url.clone())
            .json(&CreateEmployeeDto::from(employee));
        let body = execute(request).await?;
        let envelope: EnvelopeDto<EmployeeRecordDto> = decode_envelope(&body)?;
        Ok(envelope.data.map(EmployeeRecordDto::into_domain))
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), EmployeeDirectoryError> {
        let request = self
            .client
            .delete(self.collection_url.clone())
            .json(&DeleteEmployeeDto { name });
        execute(request).await?;
        Ok(())
    }
}

fn collection_url(base_url: Url) -> Result<Url, HttpDirectoryBuildError> {
    let mut url = base_url;
    url.path_segments_mut()
        .map_err(|()| HttpDirectoryBuildError::InvalidBaseUrl)?
        .pop_if_empty()
        .push("employee");
    Ok(url)
}

async fn execute(request: reqwest::RequestBuilder) -> Result<Vec<u8>, EmployeeDirectoryError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(classify_status(status, body.as_ref()));
    }
    Ok(body.into())
}

/// Classify a non-2xx upstream status into the domain error taxonomy.
///
/// Only 400, 429, and 5xx are given stable domain meaning; every other
/// status passes through with its code and body untouched.
fn classify_status(status: StatusCode, body: &[u8]) -> EmployeeDirectoryError {
    match status {
        StatusCode::BAD_REQUEST => EmployeeDirectoryError::invalid_input(text(body)),
        StatusCode::TOO_MANY_REQUESTS => EmployeeDirectoryError::RateLimited,
        _ if status.is_server_error() => EmployeeDirectoryError::Unavailable {
            status: status.as_u16(),
        },
        _ => EmployeeDirectoryError::UnexpectedStatus {
            status: status.as_u16(),
            body: text(body),
        },
    }
}

fn map_transport_error(error: reqwest::Error) -> EmployeeDirectoryError {
    EmployeeDirectoryError::transport(error.to_string())
}

fn decode_envelope<T: DeserializeOwned>(
    body: &[u8],
) -> Result<EnvelopeDto<T>, EmployeeDirectoryError> {
    serde_json::from_slice(body).map_err(|error| {
        EmployeeDirectoryError::decode(format!("invalid directory JSON payload: {error}"))
    })
}

fn text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}
