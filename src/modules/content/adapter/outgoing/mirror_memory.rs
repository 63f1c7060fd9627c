use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::modules::content::application::ports::outgoing::{MirrorError, MirrorStore};

/// Mirror living only for the process; cloned handles share entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMirrorStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryMirrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, MirrorError> {
        self.entries
            .lock()
            .map_err(|_| MirrorError::Unavailable("mirror lock poisoned".to_string()))
    }
}

impl MirrorStore for InMemoryMirrorStore {
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), MirrorError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), MirrorError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
