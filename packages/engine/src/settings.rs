//! Parent settings: CRUD over the word list with a confirm gate on reset.

use crate::store::{KeyValueStore, StoreResult, WordStore};
use crate::types::SightWord;

pub struct SettingsEditor<S> {
    store: WordStore<S>,
    words: Vec<SightWord>,
    confirming_reset: bool,
}

impl<S: KeyValueStore> SettingsEditor<S> {
    pub fn new(store: WordStore<S>) -> StoreResult<Self> {
        let words = store.load()?;
        Ok(Self {
            store,
            words,
            confirming_reset: false,
        })
    }

    /// The current list, in display order.
    pub fn words(&self) -> &[SightWord] {
        &self.words
    }

    /// Adds a word; invalid input (empty or duplicate) is silently ignored.
    pub fn add_word(&mut self, raw: &str) -> StoreResult<()> {
        self.words = self.store.add(raw)?;
        Ok(())
    }

    pub fn remove_word(&mut self, word: &str) -> StoreResult<()> {
        self.words = self.store.remove(word)?;
        Ok(())
    }

    /// Opens the "Are you sure?" gate. Nothing is written yet.
    pub fn request_reset(&mut self) {
        self.confirming_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirming_reset = false;
    }

    /// Restores the default list. Only acts while the gate is open.
    pub fn confirm_reset(&mut self) -> StoreResult<()> {
        if !self.confirming_reset {
            return Ok(());
        }
        self.words = self.store.reset()?;
        self.confirming_reset = false;
        Ok(())
    }

    pub fn is_confirming_reset(&self) -> bool {
        self.confirming_reset
    }
}
