use std::collections::BTreeMap;

use serde::Serialize;

use crate::modules::content::domain::Resource;

/// Where a collection's state came from during `load()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadSource {
    /// Decoded from the Resource API response.
    Remote,
    /// Decoded from the local mirror after the fetch failed.
    Mirror,
    /// Neither was usable; the collection kept its default.
    Default,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    sources: BTreeMap<Resource, LoadSource>,
}

impl LoadReport {
    pub fn record(&mut self, resource: Resource, source: LoadSource) {
        self.sources.insert(resource, source);
    }

    pub fn source(&self, resource: Resource) -> Option<LoadSource> {
        self.sources.get(&resource).copied()
    }

    pub fn is_fully_remote(&self) -> bool {
        !self.sources.is_empty() && self.sources.values().all(|s| *s == LoadSource::Remote)
    }

    pub fn count(&self, source: LoadSource) -> usize {
        self.sources.values().filter(|s| **s == source).count()
    }
}
