//! Persistent key-value store
//!
//! A single SQLite table of string keys to string values, mirroring the
//! browser localStorage record the tools were designed around. Structured
//! values (usage counters, URL history) are stored as JSON text.

pub(crate) mod history;
pub(crate) mod theme;
pub(crate) mod usage;

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::consts::{THEME_KEY, URL_HISTORY_KEY, USAGE_KEY};
use crate::error::AppError;

pub(crate) use history::{UrlHistory, UrlRecord};
pub(crate) use theme::Theme;
pub(crate) use usage::UsageRecord;

pub(crate) struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open (creating if needed) the store at `path`
    pub(crate) fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        tracing::debug!(path = %path.display(), "opening storage");
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=1000;")?;
        Self::init(conn)
    }

    /// Store that lives only for this process
    pub(crate) fn in_memory() -> Result<Self, AppError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, AppError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS storage (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    pub(crate) fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub(crate) fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.conn.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub(crate) fn remove(&self, key: &str) -> Result<(), AppError> {
        self.conn
            .execute("DELETE FROM storage WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Read a JSON value; a missing or unreadable entry yields the default
    fn get_json<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, AppError> {
        let Some(raw) = self.get(key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable stored value");
                Ok(T::default())
            }
        }
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    pub(crate) fn theme(&self) -> Result<Theme, AppError> {
        let stored = self.get(THEME_KEY)?;
        Ok(stored.as_deref().and_then(Theme::parse).unwrap_or_default())
    }

    pub(crate) fn set_theme(&self, theme: Theme) -> Result<(), AppError> {
        self.set(THEME_KEY, theme.as_str())
    }

    pub(crate) fn usage(&self) -> Result<UsageRecord, AppError> {
        self.get_json(USAGE_KEY)
    }

    /// Count one use of `tool` and stamp the last-used time
    pub(crate) fn track_usage(&self, tool: &str) -> Result<UsageRecord, AppError> {
        let mut usage = self.usage()?;
        usage.record(tool, Utc::now());
        self.set_json(USAGE_KEY, &usage)?;
        tracing::debug!(tool, total = usage.total(), "tracked tool usage");
        Ok(usage)
    }

    pub(crate) fn url_history(&self) -> Result<UrlHistory, AppError> {
        self.get_json(URL_HISTORY_KEY)
    }

    pub(crate) fn push_url_history(&self, record: UrlRecord) -> Result<UrlHistory, AppError> {
        let mut history = self.url_history()?;
        history.push(record);
        self.set_json(URL_HISTORY_KEY, &history)?;
        Ok(history)
    }

    pub(crate) fn clear_url_history(&self) -> Result<(), AppError> {
        self.remove(URL_HISTORY_KEY)
    }
}

/// Default store location.
///
/// `AIOTOOLS_HOME` overrides everything; otherwise the platform's local data
/// directory, falling back to `~/.aiotools`.
pub(crate) fn default_storage_path() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("AIOTOOLS_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(home).join("storage.db"));
    }
    if let Some(data_dir) = dirs::data_local_dir() {
        return Some(data_dir.join("aiotools").join("storage.db"));
    }
    let home = dirs::home_dir()?;
    Some(home.join(".aiotools").join("storage.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_remove_roundtrip() {
        let store = Storage::in_memory().unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn theme_defaults_to_light_and_persists() {
        let store = Storage::in_memory().unwrap();
        assert_eq!(store.theme().unwrap(), Theme::Light);
        store.set_theme(Theme::Dark).unwrap();
        assert_eq!(store.theme().unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn unknown_theme_string_falls_back_to_light() {
        let store = Storage::in_memory().unwrap();
        store.set(THEME_KEY, "neon").unwrap();
        assert_eq!(store.theme().unwrap(), Theme::Light);
    }

    #[test]
    fn track_usage_accumulates() {
        let store = Storage::in_memory().unwrap();
        store.track_usage("word-counter").unwrap();
        let usage = store.track_usage("word-counter").unwrap();
        assert_eq!(usage.counts["word-counter"], 2);
        assert_eq!(store.usage().unwrap().counts["word-counter"], 2);
    }

    #[test]
    fn corrupt_usage_is_treated_as_empty() {
        let store = Storage::in_memory().unwrap();
        store.set(USAGE_KEY, "{not json").unwrap();
        assert_eq!(store.usage().unwrap(), UsageRecord::default());
        let usage = store.track_usage("bmi-calculator").unwrap();
        assert_eq!(usage.counts["bmi-calculator"], 1);
    }

    #[test]
    fn url_history_persists_and_clears() {
        let store = Storage::in_memory().unwrap();
        store
            .push_url_history(UrlRecord {
                long_url: "https://example.com/a/very/long/path".to_string(),
                short_url: "https://short.ly/abc123".to_string(),
                date: Utc::now(),
            })
            .unwrap();
        assert_eq!(store.url_history().unwrap().records().len(), 1);
        store.clear_url_history().unwrap();
        assert!(store.url_history().unwrap().is_empty());
    }

    #[test]
    fn open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.db");
        {
            let store = Storage::open(&path).unwrap();
            store.set_theme(Theme::Dark).unwrap();
        }
        let reopened = Storage::open(&path).unwrap();
        assert_eq!(reopened.theme().unwrap(), Theme::Dark);
    }
}
