//! The comics.json document: read whole, change in memory, write whole

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::model::Comic;
use crate::error::FatalError;

/// Contents of comics.json
///
/// Existing entries and stamps stay raw JSON, so fields written by other
/// tools or by hand survive a rewrite.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ComicStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited: Option<Value>,
    #[serde(default)]
    pub comics: Vec<Value>,
    /// Top-level keys this tool doesn't know about, written back untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
    #[serde(skip)]
    existed: bool,
}

/// How a new entry is combined with entries already in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddMode {
    /// Always push, even when the id is already present
    Append,
    /// Overwrite the first entry with the same id, or push if there is none
    Replace,
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

/// RFC 3339 with milliseconds and a `Z` suffix
fn stamp(now: DateTime<Utc>) -> Value {
    Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl ComicStore {
    /// Read the store at `path`, or start an empty one if the file doesn't exist
    pub fn open(path: &Path) -> Result<Self, FatalError> {
        if !path.exists() {
            debug!(path = %path.display(), "store not found, starting a new one");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| FatalError::StoreRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut store: Self =
            serde_json::from_str(&content).map_err(|source| FatalError::StoreParse {
                path: path.to_path_buf(),
                source,
            })?;
        store.existed = true;

        debug!(path = %path.display(), comics = store.comics.len(), "loaded store");
        Ok(store)
    }

    /// True when the store was loaded from an existing file
    pub fn existed(&self) -> bool {
        self.existed
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.comics.iter().any(|c| entry_id(c) == Some(id))
    }

    /// Add `comic` and stamp the store. Returns true if an entry was replaced.
    pub fn add(&mut self, comic: &Comic, mode: AddMode, now: DateTime<Utc>) -> Result<bool> {
        let entry = serde_json::to_value(comic).context("Failed to serialize comic")?;

        let replaced = match mode {
            AddMode::Replace => {
                match self
                    .comics
                    .iter_mut()
                    .find(|c| entry_id(c) == Some(comic.id.as_str()))
                {
                    Some(existing) => {
                        *existing = entry;
                        true
                    }
                    None => {
                        self.comics.push(entry);
                        false
                    }
                }
            }
            AddMode::Append => {
                self.comics.push(entry);
                false
            }
        };

        if self.existed {
            self.edited = Some(stamp(now));
        } else {
            self.created = Some(stamp(now));
        }

        Ok(replaced)
    }

    /// Overwrite `path` with the whole store
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize comics")?;

        fs::write(path, json).map_err(|source| FatalError::StoreWrite {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), comics = self.comics.len(), "wrote store");
        Ok(())
    }
}
