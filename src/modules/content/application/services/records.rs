//! Dual-key lookups over one collection.

use std::collections::BTreeSet;

use crate::modules::content::domain::{ContentEntity, RecordKey};

pub fn position<T: ContentEntity>(records: &[T], key: &RecordKey) -> Option<usize> {
    records.iter().position(|r| r.meta().matches(key))
}

pub fn find_mut<'a, T: ContentEntity>(records: &'a mut [T], key: &RecordKey) -> Option<&'a mut T> {
    records.iter_mut().find(|r| r.meta().matches(key))
}

pub fn take<T: ContentEntity>(records: &mut Vec<T>, key: &RecordKey) -> Option<T> {
    position(records, key).map(|idx| records.remove(idx))
}

/// Fallback ids currently held.
pub fn fallback_ids<T: ContentEntity>(records: &[T]) -> BTreeSet<i64> {
    records.iter().filter_map(|r| r.meta().fallback_id).collect()
}
