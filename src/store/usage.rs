//! Per-tool usage counters stored under `toolUsage`.
//!
//! The stored object is flat: one numeric entry per tool name plus a
//! `lastUsed` timestamp, e.g. `{"json-formatter": 3, "lastUsed": "..."}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct UsageRecord {
    #[serde(rename = "lastUsed", default, skip_serializing_if = "Option::is_none")]
    pub(crate) last_used: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub(crate) counts: BTreeMap<String, u64>,
}

impl UsageRecord {
    pub(crate) fn record(&mut self, tool: &str, at: DateTime<Utc>) {
        *self.counts.entry(tool.to_string()).or_insert(0) += 1;
        self.last_used = Some(at);
    }

    /// Tools ordered by count descending, ties broken by name, truncated to `limit`
    pub(crate) fn most_used(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(limit);
        entries
    }

    pub(crate) fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn record_increments_and_stamps() {
        let mut usage = UsageRecord::default();
        usage.record("bmi-calculator", at("2026-01-01T00:00:00Z"));
        usage.record("bmi-calculator", at("2026-01-02T00:00:00Z"));
        assert_eq!(usage.counts["bmi-calculator"], 2);
        assert_eq!(usage.last_used, Some(at("2026-01-02T00:00:00Z")));
        assert_eq!(usage.total(), 2);
    }

    #[test]
    fn most_used_sorts_by_count_then_name() {
        let mut usage = UsageRecord::default();
        let now = at("2026-01-01T00:00:00Z");
        for tool in ["b", "a", "c", "c", "d", "e", "f", "f", "f"] {
            usage.record(tool, now);
        }
        let top = usage.most_used(5);
        assert_eq!(top, vec![("f", 3), ("c", 2), ("a", 1), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn serializes_flat_with_last_used_key() {
        let mut usage = UsageRecord::default();
        usage.record("qr-generator", at("2026-03-04T05:06:07Z"));
        let value = serde_json::to_value(&usage).unwrap();
        assert_eq!(value["qr-generator"], 1);
        assert_eq!(value["lastUsed"], "2026-03-04T05:06:07Z");
    }

    #[test]
    fn reads_page_shaped_record() {
        let raw = r#"{"password-generator":4,"lastUsed":"2025-12-31T23:59:59.123Z","json-formatter":1}"#;
        let usage: UsageRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(usage.counts.len(), 2);
        assert_eq!(usage.counts["password-generator"], 4);
        assert!(usage.last_used.is_some());
        assert!(!usage.counts.contains_key("lastUsed"));
    }
}
