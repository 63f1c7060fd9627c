use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::modules::content::application::ports::outgoing::{
    HealthStatus, ResourceApi, ResourceApiError,
};
use crate::modules::content::domain::Resource;

// ============================================================================
// Client Implementation
// ============================================================================

/// Resource API client speaking JSON over HTTP.
///
/// `base_url` points at the API root, e.g. `http://localhost:5000/api`.
#[derive(Clone)]
pub struct HttpResourceApi {
    client: Client,
    base_url: String,
}

impl HttpResourceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn collection_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    fn record_url(&self, resource: Resource, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, resource.path(), id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ResourceApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ResourceApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Value>()
                .await
                .map_err(|e| ResourceApiError::Decode(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &body))
    }
}

/// Maps a non-success response onto the error taxonomy, carrying the
/// `{error}` message when the body has one.
fn map_status_error(status: StatusCode, body: &str) -> ResourceApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    match status {
        StatusCode::NOT_FOUND => ResourceApiError::NotFound(message),
        StatusCode::BAD_REQUEST => ResourceApiError::Validation(message),
        other => ResourceApiError::Status {
            status: other.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl ResourceApi for HttpResourceApi {
    async fn list(&self, resource: Resource) -> Result<Value, ResourceApiError> {
        self.send(self.client.get(self.collection_url(resource)))
            .await
    }

    async fn get(&self, resource: Resource, id: &str) -> Result<Value, ResourceApiError> {
        self.send(self.client.get(self.record_url(resource, id)))
            .await
    }

    async fn create(&self, resource: Resource, body: Value) -> Result<Value, ResourceApiError> {
        self.send(self.client.post(self.collection_url(resource)).json(&body))
            .await
    }

    async fn update(
        &self,
        resource: Resource,
        id: &str,
        body: Value,
    ) -> Result<Value, ResourceApiError> {
        self.send(self.client.put(self.record_url(resource, id)).json(&body))
            .await
    }

    async fn delete(&self, resource: Resource, id: &str) -> Result<Value, ResourceApiError> {
        self.send(self.client.delete(self.record_url(resource, id)))
            .await
    }

    async fn fetch_profile(&self) -> Result<Value, ResourceApiError> {
        self.send(self.client.get(self.collection_url(Resource::Profile)))
            .await
    }

    async fn save_profile(&self, body: Value) -> Result<Value, ResourceApiError> {
        self.send(
            self.client
                .post(self.collection_url(Resource::Profile))
                .json(&body),
        )
        .await
    }

    async fn health(&self) -> Result<HealthStatus, ResourceApiError> {
        let body = self
            .send(self.client.get(format!("{}/health", self.base_url)))
            .await?;
        serde_json::from_value(body).map_err(|e| ResourceApiError::Decode(e.to_string()))
    }
}
