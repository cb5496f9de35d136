//! # findhelper-api
//!
//! Typed REST bindings for the Findhelper service marketplace backend.
//!
//! The crate covers the service-provider profile surface: fetch a provider
//! record and the serviceable-location list, validate edits client-side, and
//! submit the updated record. Every request carries a bearer token supplied
//! by an injected [`TokenProvider`], so front-ends decide where credentials
//! actually live (OS keychain, environment, test fixture).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use findhelper_api::{FindhelperClient, StaticTokenProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tokens = Arc::new(StaticTokenProvider::new("jwt-from-login"));
//!     let client = FindhelperClient::new("http://localhost:8080", tokens);
//!
//!     // Fetch the record and the location list in one concurrent load.
//!     let (provider, locations) = client.load_form_data("42").await?;
//!     println!("{} {} ({} locations)", provider.fname, provider.lname, locations.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). There is no
//! automatic retry: a failed load or update is terminal for that attempt and
//! the caller decides whether to re-issue it.

mod client;
mod error;
mod http;
mod token;
mod types;
pub mod validate;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client and the credential seam
pub use client::FindhelperClient;
pub use http::create_http_client;
pub use token::{StaticTokenProvider, TokenProvider};

// Re-export types
pub use types::{AvailabilityTime, Location, ServiceProvider, UpdateServiceProviderRequest};
