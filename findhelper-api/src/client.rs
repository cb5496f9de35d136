//! Findhelper backend client.

use std::sync::Arc;

use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::http::{create_http_client, HttpUtils};
use crate::token::TokenProvider;
use crate::types::{Location, ServiceProvider, UpdateServiceProviderRequest};

/// Client for the Findhelper REST backend.
///
/// Holds a connection-pooled HTTP client, the backend base URL, and an
/// injected [`TokenProvider`] that supplies the bearer token attached to
/// every request.
pub struct FindhelperClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl FindhelperClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: create_http_client(),
            base_url,
            tokens,
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    async fn bearer(&self) -> Result<String> {
        self.tokens.bearer_token().await
    }

    /// Execute an authorized GET and parse the JSON body.
    async fn get_json<T>(&self, endpoint: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let token = self.bearer().await?;
        let request = self
            .client
            .get(self.endpoint_url(endpoint))
            .header("Authorization", format!("Bearer {token}"));

        let (status, body) = HttpUtils::execute_request(request, "GET", endpoint).await?;
        let body = HttpUtils::ensure_success(endpoint, status, body)?;
        HttpUtils::parse_json(&body, endpoint)
    }

    /// Fetch a service-provider record by its user id.
    ///
    /// `GET /service-providers/byUserId/{id}`
    pub async fn get_provider_by_user_id(&self, user_id: &str) -> Result<ServiceProvider> {
        self.get_json(&format!("/service-providers/byUserId/{user_id}"))
            .await
    }

    /// Fetch the full list of serviceable locations.
    ///
    /// `GET /api/locations`
    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        self.get_json("/api/locations").await
    }

    /// Fetch the provider record and the location list concurrently.
    ///
    /// Both requests run in parallel and are joined before returning; if
    /// either fails the whole load fails and both results are discarded, so
    /// callers never observe a partially populated form.
    pub async fn load_form_data(
        &self,
        user_id: &str,
    ) -> Result<(ServiceProvider, Vec<Location>)> {
        futures::try_join!(self.get_provider_by_user_id(user_id), self.list_locations())
    }

    /// Submit the full form payload for a provider.
    ///
    /// `PUT /service-providers/update/{id}`. Only the HTTP status is
    /// consumed: 200 means the update was applied, anything else is an error.
    pub async fn update_provider(
        &self,
        user_id: &str,
        request: &UpdateServiceProviderRequest,
    ) -> Result<()> {
        let endpoint = format!("/service-providers/update/{user_id}");
        let token = self.bearer().await?;

        if let Ok(body_json) = serde_json::to_string(request) {
            log::debug!("[{endpoint}] Request Body: {body_json}");
        }

        let builder = self
            .client
            .put(self.endpoint_url(&endpoint))
            .header("Authorization", format!("Bearer {token}"))
            .json(request);

        let (status, body) = HttpUtils::execute_request(builder, "PUT", &endpoint).await?;
        if status == 200 {
            Ok(())
        } else {
            log::error!("[{endpoint}] Update rejected (HTTP {status})");
            Err(ApiError::ServerError {
                endpoint,
                status,
                raw_message: if body.trim().is_empty() { None } else { Some(body) },
            })
        }
    }
}
