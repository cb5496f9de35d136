//! JWT storage backed by the OS keyring.

use std::sync::Mutex;

use async_trait::async_trait;
use findhelper_api::{ApiError, Result, TokenProvider};
use keyring::Entry;

const SERVICE_NAME: &str = "findhelper-tui";
const TOKEN_KEY: &str = "jwtToken";

/// Reads the signed-in user's JWT from the platform keyring.
///
/// The first successful read is cached for the lifetime of the store so the
/// keyring is not hit on every request.
pub struct KeyringTokenStore {
    cached: Mutex<Option<String>>,
}

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    /// Stores a token, replacing any existing one.
    pub fn save_token(&self, token: &str) -> Result<()> {
        let entry = Self::entry()?;
        entry.set_password(token).map_err(|e| ApiError::TokenError {
            detail: format!("Failed to store token: {e}"),
        })?;
        if let Ok(mut cached) = self.cached.lock() {
            *cached = Some(token.to_string());
        }
        Ok(())
    }

    /// Removes the stored token, if any.
    pub fn clear_token(&self) -> Result<()> {
        let entry = Self::entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {}
            Err(e) => {
                return Err(ApiError::TokenError {
                    detail: format!("Failed to delete token: {e}"),
                });
            }
        }
        if let Ok(mut cached) = self.cached.lock() {
            *cached = None;
        }
        Ok(())
    }

    fn entry() -> Result<Entry> {
        Entry::new(SERVICE_NAME, TOKEN_KEY).map_err(|e| ApiError::TokenError {
            detail: format!("Failed to access keyring: {e}"),
        })
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenProvider for KeyringTokenStore {
    async fn bearer_token(&self) -> Result<String> {
        if let Ok(cached) = self.cached.lock() {
            if let Some(token) = cached.as_ref() {
                return Ok(token.clone());
            }
        }
        let entry = Self::entry()?;
        let token = match entry.get_password() {
            Ok(token) => token,
            Err(keyring::Error::NoEntry) => {
                return Err(ApiError::TokenError {
                    detail: "No token stored. Sign in before editing your profile.".to_string(),
                });
            }
            Err(e) => {
                return Err(ApiError::TokenError {
                    detail: format!("Failed to read token: {e}"),
                });
            }
        };
        if let Ok(mut cached) = self.cached.lock() {
            *cached = Some(token.clone());
        }
        Ok(token)
    }
}
