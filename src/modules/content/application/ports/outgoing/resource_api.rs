// src/modules/content/application/ports/outgoing/resource_api.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::content::domain::Resource;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
// Transport and Status are both "persistence failed" for the sync layer.
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResourceApiError {
    /// The request never completed (connection refused, DNS, reset).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Reachable, but answered with a non-success status.
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
// Bodies are raw JSON documents; decoding into entities is the
// caller's job so the port stays object-safe.
//

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// `GET /api/<resource>`, newest first.
    async fn list(&self, resource: Resource) -> Result<Value, ResourceApiError>;

    /// `GET /api/<resource>/:id`
    async fn get(&self, resource: Resource, id: &str) -> Result<Value, ResourceApiError>;

    /// `POST /api/<resource>`; returns the stored record with its `_id`.
    async fn create(&self, resource: Resource, body: Value) -> Result<Value, ResourceApiError>;

    /// `PUT /api/<resource>/:id`
    async fn update(
        &self,
        resource: Resource,
        id: &str,
        body: Value,
    ) -> Result<Value, ResourceApiError>;

    /// `DELETE /api/<resource>/:id`; returns `{message, <record>}`.
    async fn delete(&self, resource: Resource, id: &str) -> Result<Value, ResourceApiError>;

    /// `GET /api/profile`; `NotFound` when no profile exists yet.
    async fn fetch_profile(&self) -> Result<Value, ResourceApiError>;

    /// `POST /api/profile`; creates or replaces the singleton.
    async fn save_profile(&self, body: Value) -> Result<Value, ResourceApiError>;

    /// `GET /api/health`
    async fn health(&self) -> Result<HealthStatus, ResourceApiError>;
}
