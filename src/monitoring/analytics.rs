//! Lightweight in-process analytics.
//!
//! Explicitly constructed in `main` and handed to handlers through
//! `AppState`; nothing here is a process-global. Events are counted
//! per kind and a bounded ring of recent events is kept for the
//! `/api/analytics` snapshot. Best-effort only: no persistence, counts
//! reset on restart.

use std::collections::{BTreeMap, VecDeque};

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// How many recent events the ring retains.
const RECENT_CAPACITY: usize = 256;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub kind: String,
    pub detail: String,
    /// Unix seconds.
    pub at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub counts: BTreeMap<String, u64>,
    pub recent: Vec<EventRecord>,
}

#[derive(Default)]
pub struct Analytics {
    counts: DashMap<String, u64>,
    recent: Mutex<VecDeque<EventRecord>>,
}

impl Analytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event. `kind` buckets the counter; `detail` is free text.
    pub fn record(&self, kind: &str, detail: impl Into<String>) {
        *self.counts.entry(kind.to_string()).or_insert(0) += 1;

        let record = EventRecord {
            id: Uuid::new_v4(),
            kind: kind.to_string(),
            detail: detail.into(),
            at: OffsetDateTime::now_utc().unix_timestamp(),
        };
        let mut recent = self.recent.lock();
        if recent.len() == RECENT_CAPACITY {
            recent.pop_front();
        }
        recent.push_back(record);
    }

    pub fn count(&self, kind: &str) -> u64 {
        self.counts.get(kind).map(|c| *c).unwrap_or(0)
    }

    /// Snapshot for the diagnostics endpoint, newest events last.
    pub fn summary(&self) -> AnalyticsSummary {
        let counts = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        let recent = self.recent.lock().iter().cloned().collect();
        AnalyticsSummary { counts, recent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_kind() {
        let analytics = Analytics::new();
        analytics.record("frame_navigate", "home -> game");
        analytics.record("frame_navigate", "game -> jackpot");
        analytics.record("frame_fallback", "share");
        assert_eq!(analytics.count("frame_navigate"), 2);
        assert_eq!(analytics.count("frame_fallback"), 1);
        assert_eq!(analytics.count("missing"), 0);
    }

    #[test]
    fn recent_ring_is_bounded() {
        let analytics = Analytics::new();
        for i in 0..(RECENT_CAPACITY + 10) {
            analytics.record("tick", format!("event {i}"));
        }
        let summary = analytics.summary();
        assert_eq!(summary.recent.len(), RECENT_CAPACITY);
        // Oldest entries were evicted.
        assert_eq!(summary.recent[0].detail, "event 10");
        assert_eq!(summary.counts["tick"], (RECENT_CAPACITY + 10) as u64);
    }
}
