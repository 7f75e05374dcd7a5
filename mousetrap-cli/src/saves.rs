//! Named collection of saved games, stored as one JSON object
//!
//! ```json
//! { "lunch break": { "game_type": "singleplayer", ... } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use mousetrap_core::GameRecord;

/// Default save file name
pub const DEFAULT_SAVE_FILE: &str = "saves.json";

/// Saved games keyed by user-chosen name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveStore {
    games: BTreeMap<String, GameRecord>,
}

impl SaveStore {
    /// Load the collection. A missing, empty or unreadable file gives an
    /// empty collection.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_str(&content) {
            Ok(store) => Ok(store),
            Err(e) => {
                tracing::warn!("Ignoring corrupt save file {}: {}", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    /// Write the whole collection, pretty-printed
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {} saves to {}", self.games.len(), path.display());
        Ok(())
    }

    /// Add or replace a save. Names must not be blank.
    pub fn insert(&mut self, name: &str, record: GameRecord) -> Result<()> {
        if name.trim().is_empty() {
            bail!("Save name must not be blank");
        }
        self.games.insert(name.to_string(), record);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&GameRecord> {
        self.games.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<GameRecord> {
        self.games.remove(name)
    }

    /// Save names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.games.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
