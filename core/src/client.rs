//! Request builder and response parser for the `/api/<resource>` endpoints.
//!
//! # Design
//! `ApiClient` holds only a `base_url`. `build_list` produces an
//! `HttpRequest`, `parse_list` consumes an `HttpResponse`; a `Transport`
//! does the I/O in between. Records are decoded generically so the same
//! client serves every resource.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Stateless client for the collection endpoints.
///
/// An empty `base_url` produces origin-relative paths (`/api/opiniones`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET <base>/api/<resource>`.
    pub fn build_list(&self, resource: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/{resource}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    /// Decode a collection response. Any 2xx status is accepted.
    pub fn parse_list<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Vec<T>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
