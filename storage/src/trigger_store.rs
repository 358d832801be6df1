//! Trigger store: trigger → response mapping persisted as a flat JSON object.
//!
//! The whole mapping lives in memory and is rewritten to disk after every mutation. Writes go to
//! `<path>.tmp` first and are renamed over the target, so a crash mid-write never leaves a
//! truncated file behind. Access from several processes is not coordinated; the last writer wins.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

use crate::error::StorageError;
use crate::models::{TriggerEntry, TriggerMap};

/// Default location of the trigger file, relative to the working directory.
pub const DEFAULT_TRIGGERS_PATH: &str = "database/automessage.json";

type Result<T> = std::result::Result<T, StorageError>;

/// Lower-cases trigger text; used for both storage keys and lookups.
fn normalize_trigger(text: &str) -> String {
    text.to_lowercase()
}

/// In-memory trigger mapping backed by a JSON file.
#[derive(Debug)]
pub struct TriggerStore {
    path: PathBuf,
    triggers: TriggerMap,
}

impl TriggerStore {
    /// Opens the store at `path`, creating an empty trigger file (and its directory) if none exists.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            triggers: TriggerMap::new(),
        };
        store.triggers = store.load().await?;
        info!(entries = store.triggers.len(), "Trigger store opened");
        Ok(store)
    }

    /// Reads the persisted mapping. A missing file is initialized to `{}` on disk first.
    pub async fn load(&self) -> Result<TriggerMap> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Trigger file missing, creating empty one");
                let empty = TriggerMap::new();
                self.save(&empty).await?;
                return Ok(empty);
            }
            Err(source) => return Err(io_error(&self.path, source)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrites the persisted state with `triggers`.
    pub async fn save(&self, triggers: &TriggerMap) -> Result<()> {
        let bytes = to_pretty_json(triggers).map_err(StorageError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| io_error(parent, source))?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &bytes)
            .await
            .map_err(|source| io_error(&tmp_path, source))?;
        if let Err(source) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(io_error(&self.path, source));
        }

        debug!(path = %self.path.display(), entries = triggers.len(), "Triggers saved");
        Ok(())
    }

    /// Sets (or overwrites) the response for `trigger` and persists the mapping.
    ///
    /// If persisting fails the in-memory mapping is put back the way it was.
    #[instrument(skip(self, response))]
    pub async fn set(&mut self, trigger: &str, response: &str) -> Result<()> {
        let key = normalize_trigger(trigger);
        let previous = self.triggers.insert(key.clone(), response.to_string());

        if let Err(e) = self.save(&self.triggers).await {
            warn!(error = %e, trigger = %key, "Save failed, reverting set");
            match previous {
                Some(old) => {
                    self.triggers.insert(key, old);
                }
                None => {
                    self.triggers.shift_remove(&key);
                }
            }
            return Err(e);
        }

        info!(trigger = %key, overwritten = previous.is_some(), "Trigger set");
        Ok(())
    }

    /// Removes `trigger` and persists the mapping; returns the removed response.
    ///
    /// Returns [`StorageError::NotFound`] without touching the file when the trigger is absent.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, trigger: &str) -> Result<String> {
        let key = normalize_trigger(trigger);
        let Some((index, key, response)) = self.triggers.shift_remove_full(&key) else {
            debug!(trigger = %key, "Trigger not found");
            return Err(StorageError::NotFound(key));
        };

        if let Err(e) = self.save(&self.triggers).await {
            warn!(error = %e, trigger = %key, "Save failed, reverting remove");
            self.triggers.shift_insert(index, key, response);
            return Err(e);
        }

        info!(trigger = %key, "Trigger removed");
        Ok(response)
    }

    /// Looks up the response for `text` by exact match on its lower-cased form.
    pub fn get(&self, text: &str) -> Option<&str> {
        self.triggers
            .get(&normalize_trigger(text))
            .map(String::as_str)
    }

    /// All entries in insertion order.
    pub fn list(&self) -> Vec<TriggerEntry> {
        self.triggers
            .iter()
            .map(|(trigger, response)| TriggerEntry::new(trigger.as_str(), response.as_str()))
            .collect()
    }

    pub fn triggers(&self) -> &TriggerMap {
        &self.triggers
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Pretty JSON with 4-space indentation.
fn to_pretty_json(triggers: &TriggerMap) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    triggers.serialize(&mut ser)?;
    Ok(buf)
}
