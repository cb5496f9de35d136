//! Backend layer: configuration, credentials, and async API dispatch.

mod api_service;
mod config;
mod token_store;

pub use api_service::ApiService;
pub use config::AppConfig;
pub use token_store::KeyringTokenStore;
