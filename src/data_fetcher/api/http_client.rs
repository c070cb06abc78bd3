//! HTTP client creation and configuration utilities

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, external_api};
use crate::error::AppError;

/// Creates a configured HTTP client with connection pooling and a per-request
/// timeout. Used for the primary backend.
pub fn create_http_client(timeout_seconds: u64) -> Result<Client, AppError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
        .map_err(AppError::ApiFetch)
}

/// Creates the HTTP client for the external provider.
///
/// The provider rejects requests without its identifying header, so the
/// header is installed as a default on the client and rides along with every
/// dispatch.
pub fn create_external_http_client(
    timeout_seconds: u64,
    requested_by: &str,
) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-requested-by"),
        HeaderValue::from_str(requested_by).map_err(|e| {
            AppError::config_error(format!(
                "Invalid {} header value: {e}",
                external_api::REQUESTED_BY_HEADER
            ))
        })?,
    );

    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()
        .map_err(AppError::ApiFetch)
}
