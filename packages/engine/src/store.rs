//! Key-value persistence for the word list and the flashcard high score.
//!
//! The storage medium is an injected [`KeyValueStore`] capability with
//! atomic single-key set semantics. Every write fully replaces the value
//! under its key; there is no merge and no partial update.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::types::{default_word_list, SightWord};

/// Storage slot holding the word list as a JSON array of strings.
pub const WORDS_KEY: &str = "sightWords";

/// Storage slot holding the flashcard high score as a plain integer.
pub const HIGH_SCORE_KEY: &str = "flashcardHighScore";

/// Storage module error type.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable string-keyed storage with atomic whole-value writes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

// ============================================================
// MemoryStore - in-memory backend (tests, previews)
// ============================================================

/// In-memory [`KeyValueStore`]. The storage analog of an in-memory database:
/// used by unit tests and anywhere durability is not wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================
// WordStore - the sight-word list slot
// ============================================================

/// Persistence of the sight-word list with default seeding.
///
/// The stored list is never empty after first access: when the slot is
/// absent, [`WordStore::load`] writes the built-in default list and returns
/// it. Seeding happens once; a list the parent has edited down is never
/// silently re-seeded.
pub struct WordStore<S> {
    store: Arc<S>,
}

impl<S> Clone for WordStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> WordStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the persisted list, seeding the default list on first access.
    pub fn load(&self) -> StoreResult<Vec<SightWord>> {
        match self.store.get(WORDS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                let defaults = default_word_list();
                self.save(&defaults)?;
                Ok(defaults)
            }
        }
    }

    /// Adds a word after normalization. Empty-after-normalization input and
    /// duplicates are no-ops; either way the current list comes back.
    pub fn add(&self, raw: &str) -> StoreResult<Vec<SightWord>> {
        let mut words = self.load()?;
        let Some(word) = SightWord::new(raw) else {
            return Ok(words);
        };
        if !words.contains(&word) {
            words.push(word);
            self.save(&words)?;
        }
        Ok(words)
    }

    /// Removes an exact match. Removing a non-member leaves the list
    /// unchanged; the result is persisted either way.
    pub fn remove(&self, word: &str) -> StoreResult<Vec<SightWord>> {
        let mut words = self.load()?;
        words.retain(|w| w.as_str() != word);
        self.save(&words)?;
        Ok(words)
    }

    /// Overwrites the slot with the built-in default list unconditionally.
    pub fn reset(&self) -> StoreResult<Vec<SightWord>> {
        let defaults = default_word_list();
        self.save(&defaults)?;
        Ok(defaults)
    }

    fn save(&self, words: &[SightWord]) -> StoreResult<()> {
        let raw = serde_json::to_string(words)?;
        self.store.set(WORDS_KEY, &raw)
    }
}

// ============================================================
// ProgressStore - the flashcard high score slot
// ============================================================

/// Persistence of the flashcard high score. Monotonically non-decreasing:
/// [`ProgressStore::record`] only writes when the new score beats the
/// stored one.
pub struct ProgressStore<S> {
    store: Arc<S>,
}

impl<S> Clone for ProgressStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The stored high score; 0 when absent or unparseable.
    pub fn high_score(&self) -> StoreResult<u32> {
        Ok(self
            .store
            .get(HIGH_SCORE_KEY)?
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0))
    }

    /// Records a score, keeping the maximum ever observed. Returns the high
    /// score after the update.
    pub fn record(&self, score: u32) -> StoreResult<u32> {
        let best = self.high_score()?;
        if score > best {
            self.store.set(HIGH_SCORE_KEY, &score.to_string())?;
            Ok(score)
        } else {
            Ok(best)
        }
    }
}
