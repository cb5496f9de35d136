//! Bearer-token supply abstraction.
//!
//! The client never reads ambient storage itself; whoever constructs it
//! injects a [`TokenProvider`]. Platform adapters (OS keychain in the TUI,
//! environment variables in scripts) live with the front-ends.

use async_trait::async_trait;

use crate::error::{ApiError, Result};

/// Supplies the bearer token attached to every backend request.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return the current bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::TokenError`] when no token is available.
    async fn bearer_token(&self) -> Result<String>;
}

/// A fixed token, for tests and one-off scripting.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String> {
        if self.token.is_empty() {
            return Err(ApiError::TokenError {
                detail: "no token configured".to_string(),
            });
        }
        Ok(self.token.clone())
    }
}
