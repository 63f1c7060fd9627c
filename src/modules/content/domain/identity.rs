use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Record identity
// ──────────────────────────────────────────────────────────
// A record carries up to two identifiers:
// - `_id`: assigned by the Resource API when a create succeeds
// - `id`:  millisecond timestamp assigned locally when a create fails
//
// A record created online only has `_id`, one created offline only has
// `id`. Lookups must check both.
//

/// Identity and server timestamps, flattened into every list entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub authoritative_id: Option<String>,

    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub fallback_id: Option<i64>,

    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    pub fn authoritative(id: impl Into<String>) -> Self {
        Self {
            authoritative_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn fallback(id: i64) -> Self {
        Self {
            fallback_id: Some(id),
            ..Self::default()
        }
    }

    /// Preferred key for addressing this record; the authoritative id wins.
    pub fn key(&self) -> Option<RecordKey> {
        self.authoritative_id
            .clone()
            .map(RecordKey::Authoritative)
            .or(self.fallback_id.map(RecordKey::Fallback))
    }

    /// Dual-key match: true when either identity field equals `key`.
    pub fn matches(&self, key: &RecordKey) -> bool {
        let by_authoritative = match (&self.authoritative_id, key) {
            (Some(own), RecordKey::Authoritative(target)) => own == target,
            _ => false,
        };
        let by_fallback = match (self.fallback_id, key) {
            (Some(own), RecordKey::Fallback(target)) => own == *target,
            _ => false,
        };
        by_authoritative || by_fallback
    }

    /// Whether the Resource API has confirmed this record.
    pub fn is_synced(&self) -> bool {
        self.authoritative_id.is_some()
    }
}

/// Value used to address a single record, locally and in `/api/<resource>/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Fallback(i64),
    Authoritative(String),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Authoritative(id) => write!(f, "{}", id),
            RecordKey::Fallback(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        RecordKey::Authoritative(value.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(value: String) -> Self {
        RecordKey::Authoritative(value)
    }
}

impl From<i64> for RecordKey {
    fn from(value: i64) -> Self {
        RecordKey::Fallback(value)
    }
}
