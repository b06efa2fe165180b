use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::URL_HISTORY_LIMIT;

/// One shortened URL, in the field layout the page stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UrlRecord {
    pub(crate) long_url: String,
    pub(crate) short_url: String,
    pub(crate) date: DateTime<Utc>,
}

/// Shortened URLs, newest first, never longer than `URL_HISTORY_LIMIT`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct UrlHistory(Vec<UrlRecord>);

impl UrlHistory {
    pub(crate) fn push(&mut self, record: UrlRecord) {
        self.0.insert(0, record);
        self.0.truncate(URL_HISTORY_LIMIT);
    }

    pub(crate) fn records(&self) -> &[UrlRecord] {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: usize) -> UrlRecord {
        UrlRecord {
            long_url: format!("https://example.com/{n}"),
            short_url: format!("https://short.ly/{n:06}"),
            date: "2026-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn push_puts_newest_first() {
        let mut history = UrlHistory::default();
        history.push(record(1));
        history.push(record(2));
        assert_eq!(history.records()[0], record(2));
        assert_eq!(history.records()[1], record(1));
    }

    #[test]
    fn push_evicts_oldest_beyond_limit() {
        let mut history = UrlHistory::default();
        for n in 0..URL_HISTORY_LIMIT + 3 {
            history.push(record(n));
        }
        assert_eq!(history.records().len(), URL_HISTORY_LIMIT);
        assert_eq!(history.records()[0], record(URL_HISTORY_LIMIT + 2));
        // records 0, 1 and 2 were the oldest and are gone
        assert_eq!(history.records()[URL_HISTORY_LIMIT - 1], record(3));
    }

    #[test]
    fn reads_page_shaped_array() {
        let raw = r#"[{"longUrl":"https://a.example/x","shortUrl":"https://short.ly/abc123","date":"2025-05-01T10:00:00.000Z"}]"#;
        let history: UrlHistory = serde_json::from_str(raw).unwrap();
        assert_eq!(history.records().len(), 1);
        assert_eq!(history.records()[0].short_url, "https://short.ly/abc123");
    }
}
