//! Word types and the built-in content sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The canonical word list a fresh install starts with. Early-reader sight
/// words; parents extend or trim the list from the settings editor.
pub const DEFAULT_SIGHT_WORDS: &[&str] = &[
    "the", "and", "a", "to", "said", "in", "he", "i", "of", "it", "was", "you", "they", "on",
    "she", "is", "for", "at", "his", "with", "up", "look", "we", "go", "see", "not", "can",
    "little", "down", "big",
];

/// The fixed sentence sequence for the reading activity. Not persisted and
/// not user-editable; built from the default sight words plus simple nouns.
pub const SENTENCES: &[&str] = &[
    "The cat is big.",
    "I can see the dog.",
    "We go up and down.",
    "She said it was little.",
    "Look at the big red ball!",
    "He is with his dad.",
    "Can you see it?",
    "They go to the park.",
    "It is for you and me.",
    "Look, we can go up!",
];

/// A single sight word: trimmed, lowercase, never empty.
///
/// Construction through [`SightWord::new`] is the only way to obtain one, so
/// every value in a word list already carries the normalized form and set
/// membership tests are plain equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SightWord(String);

impl SightWord {
    /// Normalizes raw input (trim + lowercase). Returns `None` when nothing
    /// is left after normalization.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SightWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SightWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The default word list as owned values, in canonical order.
pub fn default_word_list() -> Vec<SightWord> {
    DEFAULT_SIGHT_WORDS
        .iter()
        .filter_map(|raw| SightWord::new(raw))
        .collect()
}
