//! Final-score scoreboard
//!
//! Tracks {name, score} entries sorted descending. Persistence goes through
//! an injected [`ScoreStore`] so the simulation core never performs storage
//! I/O itself; name prompting and display belong to UI collaborators.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// A single scoreboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u64,
}

/// Star rating shown next to an entry
pub fn stars(score: u64) -> &'static str {
    match score {
        15000.. => "★★★",
        10000.. => "★★",
        5000.. => "★",
        _ => "",
    }
}

/// Storage backend for the scoreboard
pub trait ScoreStore {
    fn load(&self) -> Vec<ScoreEntry>;
    fn save(&mut self, entries: &[ScoreEntry]);
}

/// The scoreboard, backed by an injected store
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
    store: Box<dyn ScoreStore>,
}

impl Scoreboard {
    /// Load the board from the given store
    pub fn with_store(store: Box<dyn ScoreStore>) -> Self {
        let mut entries = store.load();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Self { entries, store }
    }

    /// Record a finished run and persist; returns the 1-indexed rank.
    /// Blank names fall back to "anonymous".
    pub fn record(&mut self, name: &str, score: u64) -> usize {
        let name = name.trim();
        let name = if name.is_empty() { "anonymous" } else { name };
        let entry = ScoreEntry {
            name: name.to_string(),
            score,
        };

        // Insert below any existing entry with an equal or better score
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.store.save(&self.entries);
        pos + 1
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

/// JSON file store
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Vec<ScoreEntry> {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<Vec<ScoreEntry>>(&json) {
                Ok(entries) => {
                    log::info!("loaded {} scores from {}", entries.len(), self.path.display());
                    entries
                }
                Err(_) => {
                    log::warn!("corrupt scoreboard at {}, starting fresh", self.path.display());
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        }
    }

    fn save(&mut self, entries: &[ScoreEntry]) {
        match serde_json::to_string(entries) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    log::warn!("failed to save scoreboard: {e}");
                } else {
                    log::info!("scoreboard saved ({} entries)", entries.len());
                }
            }
            Err(e) => log::warn!("failed to encode scoreboard: {e}"),
        }
    }
}

/// In-memory store; scores live only as long as the process
#[derive(Default)]
pub struct MemoryStore {
    entries: Vec<ScoreEntry>,
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Vec<ScoreEntry> {
        self.entries.clone()
    }

    fn save(&mut self, entries: &[ScoreEntry]) {
        self.entries = entries.to_vec();
    }
}
