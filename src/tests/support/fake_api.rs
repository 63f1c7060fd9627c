use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::modules::content::application::ports::outgoing::{
    HealthStatus, ResourceApi, ResourceApiError,
};
use crate::modules::content::domain::Resource;

/// In-process Resource API with the same contract as the HTTP one.
///
/// Created records get `server-1`, `server-2`, ... in creation order.
/// Listing returns newest first.
#[derive(Default)]
pub struct FakeResourceApi {
    inner: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    offline: bool,
    failing: HashSet<Resource>,
    panic_on: Option<Resource>,
    collections: HashMap<Resource, Vec<Value>>,
    profile: Option<Value>,
    next_id: u64,
    calls: Vec<String>,
}

enum Gate {
    Open,
    Panic,
    Refuse(ResourceApiError),
}

impl FakeResourceApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        let api = Self::default();
        api.set_online(false);
        api
    }

    pub fn set_online(&self, online: bool) {
        self.inner.lock().unwrap().offline = !online;
    }

    /// Every call for `resource` answers 500.
    pub fn fail(&self, resource: Resource) {
        self.inner.lock().unwrap().failing.insert(resource);
    }

    /// Every call for `resource` panics, which aborts the task running it.
    pub fn panic_on(&self, resource: Resource) {
        self.inner.lock().unwrap().panic_on = Some(resource);
    }

    /// Seeds records in newest-first order as the server would list them.
    pub fn seed(&self, resource: Resource, records: Vec<Value>) {
        self.inner
            .lock()
            .unwrap()
            .collections
            .insert(resource, records);
    }

    pub fn seed_profile(&self, profile: Value) {
        self.inner.lock().unwrap().profile = Some(profile);
    }

    pub fn stored(&self, resource: Resource) -> Vec<Value> {
        self.inner
            .lock()
            .unwrap()
            .collections
            .get(&resource)
            .cloned()
            .unwrap_or_default()
    }

    pub fn stored_profile(&self) -> Option<Value> {
        self.inner.lock().unwrap().profile.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn enter(&self, call: String, resource: Resource) -> Gate {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(call);
        if state.panic_on == Some(resource) {
            return Gate::Panic;
        }
        if state.offline {
            return Gate::Refuse(ResourceApiError::Transport("connection refused".to_string()));
        }
        if state.failing.contains(&resource) {
            return Gate::Refuse(ResourceApiError::Status {
                status: 500,
                message: format!("{} unavailable", resource),
            });
        }
        Gate::Open
    }

    fn guard(&self, call: String, resource: Resource) -> Result<(), ResourceApiError> {
        // The lock is released before panicking so later calls still work.
        match self.enter(call, resource) {
            Gate::Open => Ok(()),
            Gate::Panic => panic!("fake api asked to panic on {}", resource),
            Gate::Refuse(e) => Err(e),
        }
    }

    fn not_found(resource: Resource) -> ResourceApiError {
        ResourceApiError::NotFound(format!("{} record not found", resource))
    }
}

#[async_trait]
impl ResourceApi for FakeResourceApi {
    async fn list(&self, resource: Resource) -> Result<Value, ResourceApiError> {
        self.guard(format!("GET /{}", resource), resource)?;
        Ok(Value::Array(self.stored(resource)))
    }

    async fn get(&self, resource: Resource, id: &str) -> Result<Value, ResourceApiError> {
        self.guard(format!("GET /{}/{}", resource, id), resource)?;
        self.stored(resource)
            .into_iter()
            .find(|r| r["_id"] == id)
            .ok_or_else(|| Self::not_found(resource))
    }

    async fn create(&self, resource: Resource, body: Value) -> Result<Value, ResourceApiError> {
        self.guard(format!("POST /{}", resource), resource)?;
        let mut state = self.inner.lock().unwrap();
        state.next_id += 1;

        let mut record = body;
        if let Some(fields) = record.as_object_mut() {
            fields.remove("id");
            fields.insert("_id".to_string(), json!(format!("server-{}", state.next_id)));
            fields.insert("createdAt".to_string(), json!("2024-06-01T08:30:00Z"));
            fields.insert("updatedAt".to_string(), json!("2024-06-01T08:30:00Z"));
        }
        state
            .collections
            .entry(resource)
            .or_default()
            .insert(0, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        resource: Resource,
        id: &str,
        body: Value,
    ) -> Result<Value, ResourceApiError> {
        self.guard(format!("PUT /{}/{}", resource, id), resource)?;
        let mut state = self.inner.lock().unwrap();
        let record = state
            .collections
            .entry(resource)
            .or_default()
            .iter_mut()
            .find(|r| r["_id"] == id)
            .ok_or_else(|| Self::not_found(resource))?;

        if let (Some(target), Some(changes)) = (record.as_object_mut(), body.as_object()) {
            for (field, value) in changes {
                target.insert(field.clone(), value.clone());
            }
            target.insert("updatedAt".to_string(), json!("2024-06-02T09:00:00Z"));
        }
        Ok(record.clone())
    }

    async fn delete(&self, resource: Resource, id: &str) -> Result<Value, ResourceApiError> {
        self.guard(format!("DELETE /{}/{}", resource, id), resource)?;
        let mut state = self.inner.lock().unwrap();
        let records = state.collections.entry(resource).or_default();
        let idx = records
            .iter()
            .position(|r| r["_id"] == id)
            .ok_or_else(|| Self::not_found(resource))?;
        let removed = records.remove(idx);
        Ok(json!({ "message": "Deleted", "record": removed }))
    }

    async fn fetch_profile(&self) -> Result<Value, ResourceApiError> {
        self.guard("GET /profile".to_string(), Resource::Profile)?;
        self.stored_profile()
            .ok_or_else(|| ResourceApiError::NotFound("Profile not found".to_string()))
    }

    async fn save_profile(&self, body: Value) -> Result<Value, ResourceApiError> {
        self.guard("POST /profile".to_string(), Resource::Profile)?;
        self.inner.lock().unwrap().profile = Some(body.clone());
        Ok(body)
    }

    async fn health(&self) -> Result<HealthStatus, ResourceApiError> {
        let offline = self.inner.lock().unwrap().offline;
        if offline {
            return Err(ResourceApiError::Transport("connection refused".to_string()));
        }
        Ok(HealthStatus {
            status: "ok".to_string(),
            timestamp: None,
        })
    }
}
