use serde::{Deserialize, Serialize};

/// Unified error type for all Findhelper API operations.
///
/// Each variant includes an `endpoint` field identifying which request produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// The client performs no automatic retry: a failed load or update is terminal
/// for that attempt and the caller decides whether to re-issue it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The bearer token was missing, expired, or rejected (HTTP 401/403).
    Unauthorized {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Original error body from the backend, if available.
        raw_message: Option<String>,
    },

    /// The requested resource does not exist (HTTP 404).
    NotFound {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Original error body from the backend, if available.
        raw_message: Option<String>,
    },

    /// The backend reported a non-success status not covered by a specific variant.
    ServerError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// HTTP status code returned by the backend.
        status: u16,
        /// Original error body from the backend, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the backend's response body.
    ParseError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The token provider could not supply a bearer token.
    TokenError {
        /// Details about the token failure.
        detail: String,
    },
}

impl ApiError {
    /// Whether this error is expected behavior (stale token, missing record)
    /// rather than an infrastructure fault, for log-level selection.
    ///
    /// Returns `true` for `warn`-level errors, `false` for `error`-level.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. } | Self::NotFound { .. } | Self::TokenError { .. }
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::Unauthorized {
                endpoint,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] Unauthorized: {msg}")
                } else {
                    write!(f, "[{endpoint}] Unauthorized")
                }
            }
            Self::NotFound {
                endpoint,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] Not found: {msg}")
                } else {
                    write!(f, "[{endpoint}] Not found")
                }
            }
            Self::ServerError {
                endpoint,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] Server error (HTTP {status}): {msg}")
                } else {
                    write!(f, "[{endpoint}] Server error (HTTP {status})")
                }
            }
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::TokenError { detail } => {
                write!(f, "Token error: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            endpoint: "/api/locations".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[/api/locations] Network error: connection refused"
        );
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            endpoint: "/api/locations".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[/api/locations] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_unauthorized_with_message() {
        let e = ApiError::Unauthorized {
            endpoint: "/service-providers/byUserId/7".to_string(),
            raw_message: Some("token expired".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[/service-providers/byUserId/7] Unauthorized: token expired"
        );
    }

    #[test]
    fn display_unauthorized_without_message() {
        let e = ApiError::Unauthorized {
            endpoint: "/api/locations".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[/api/locations] Unauthorized");
    }

    #[test]
    fn display_not_found() {
        let e = ApiError::NotFound {
            endpoint: "/service-providers/byUserId/99".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[/service-providers/byUserId/99] Not found");
    }

    #[test]
    fn display_server_error() {
        let e = ApiError::ServerError {
            endpoint: "/service-providers/update/7".to_string(),
            status: 500,
            raw_message: Some("boom".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[/service-providers/update/7] Server error (HTTP 500): boom"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = ApiError::ParseError {
            endpoint: "/api/locations".to_string(),
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "[/api/locations] Parse error: bad json");
    }

    #[test]
    fn display_token_error() {
        let e = ApiError::TokenError {
            detail: "keychain locked".to_string(),
        };
        assert_eq!(e.to_string(), "Token error: keychain locked");
    }

    #[test]
    fn expected_variants() {
        assert!(ApiError::Unauthorized {
            endpoint: "e".into(),
            raw_message: None,
        }
        .is_expected());
        assert!(ApiError::NotFound {
            endpoint: "e".into(),
            raw_message: None,
        }
        .is_expected());
        assert!(ApiError::TokenError { detail: "d".into() }.is_expected());
        assert!(!ApiError::NetworkError {
            endpoint: "e".into(),
            detail: "d".into(),
        }
        .is_expected());
        assert!(!ApiError::ServerError {
            endpoint: "e".into(),
            status: 500,
            raw_message: None,
        }
        .is_expected());
    }

    #[test]
    fn serialize_json_tagged() {
        let e = ApiError::ServerError {
            endpoint: "/service-providers/update/1".to_string(),
            status: 502,
            raw_message: None,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"ServerError\""));
        assert!(json.contains("\"status\":502"));
    }

    #[test]
    fn deserialize_json_round_trip() {
        let original = ApiError::Timeout {
            endpoint: "/api/locations".to_string(),
            detail: "elapsed".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), original.to_string());
    }
}
