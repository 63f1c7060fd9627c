use std::collections::BTreeSet;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Hands out millisecond-timestamp ids for records the Resource API did
/// not accept. Ids are strictly increasing for the lifetime of the
/// generator, even when two are requested within the same millisecond.
#[derive(Debug, Default)]
pub struct FallbackIdGenerator {
    last: AtomicI64,
}

impl FallbackIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> i64 {
        self.next_above(i64::MIN)
    }

    /// Next id that is also strictly greater than `floor`.
    pub fn next_above(&self, floor: i64) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now
                .max(last.saturating_add(1))
                .max(floor.saturating_add(1));
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }

    /// Next id not present in `taken`. Above every taken id while there is
    /// room; once `i64::MAX` is taken, the nearest free id at or below the
    /// clock.
    pub fn next_unused(&self, taken: &BTreeSet<i64>) -> i64 {
        match taken.last() {
            Some(&i64::MAX) => {}
            Some(&max) => return self.next_above(max),
            None => return self.next(),
        }

        let mut candidate = Utc::now().timestamp_millis();
        while taken.contains(&candidate) {
            candidate = candidate.wrapping_sub(1);
        }
        candidate
    }
}
