//! Shared HTTP request plumbing.
//!
//! One execution path for every endpoint: send the prepared request, log it,
//! map transport failures and error statuses, and hand the body back. There
//! is deliberately no retry layer here — a failed request is terminal for
//! that attempt and the caller surfaces it to the user.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with the standard timeout configuration.
///
/// # Panics
///
/// Panics only if the TLS backend cannot be initialized, which is fatal to
/// the process anyway.
#[allow(clippy::expect_used)]
#[must_use]
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// HTTP tool function set.
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Perform an HTTP request and return `(status_code, response_text)`.
    ///
    /// Unified processing: send, log, map transport errors, and convert
    /// auth/not-found statuses into structured errors. Other statuses are
    /// returned to the caller, which decides what counts as success.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        endpoint: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {endpoint}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{endpoint}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| ApiError::NetworkError {
            endpoint: endpoint.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        match status_code {
            401 | 403 => {
                log::warn!("[{endpoint}] Unauthorized (HTTP {status_code})");
                Err(ApiError::Unauthorized {
                    endpoint: endpoint.to_string(),
                    raw_message: non_empty(response_text),
                })
            }
            404 => {
                log::warn!("[{endpoint}] Not found");
                Err(ApiError::NotFound {
                    endpoint: endpoint.to_string(),
                    raw_message: non_empty(response_text),
                })
            }
            _ => Ok((status_code, response_text)),
        }
    }

    /// Require a 2xx status, returning the body text.
    pub fn ensure_success(endpoint: &str, status: u16, body: String) -> Result<String> {
        if (200..300).contains(&status) {
            Ok(body)
        } else {
            log::error!("[{endpoint}] Server error (HTTP {status})");
            Err(ApiError::ServerError {
                endpoint: endpoint.to_string(),
                status,
                raw_message: non_empty(body),
            })
        }
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{endpoint}] JSON parse failed: {e}");
            ApiError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

fn non_empty(body: String) -> Option<String> {
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}
