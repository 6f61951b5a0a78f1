//! Activity routing and speech sequencing.
//!
//! The router owns the shared store and the speech gateway. Each activity
//! gets a fresh engine when entered and loses it on switch, so sessions are
//! ephemeral exactly like the component-mount lifecycle they model. All
//! speech flows through one path: synthesize, play, then release the
//! engine's speaking lock exactly once, success or not.

use std::sync::Arc;

use sightwords_engine::{
    FlashcardEngine, KeyValueStore, ProgressStore, SentenceEngine, SettingsEditor, SpeechError,
    SpeechGateway, SpeechRequest, StoreResult, WordStore, WritingEngine,
};
use sightwords_speech::GeminiSpeech;

use crate::config::Config;
use crate::file_store::FileStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Home,
    Flashcards,
    Writing,
    Sentences,
}

pub struct App<S, G> {
    store: Arc<S>,
    gateway: G,
    activity: Activity,
    flashcards: Option<FlashcardEngine<S>>,
    writing: Option<WritingEngine>,
    sentences: Option<SentenceEngine>,
    settings: Option<SettingsEditor<S>>,
}

impl App<FileStore, GeminiSpeech> {
    /// Production wiring: file-backed storage plus the Gemini gateway.
    pub fn from_config(config: &Config) -> Self {
        App::new(
            Arc::new(FileStore::new(config.data_file.clone())),
            GeminiSpeech::new(config.api_key.clone()),
        )
    }
}

impl<S: KeyValueStore, G: SpeechGateway> App<S, G> {
    pub fn new(store: Arc<S>, gateway: G) -> Self {
        Self {
            store,
            gateway,
            activity: Activity::Home,
            flashcards: None,
            writing: None,
            sentences: None,
            settings: None,
        }
    }

    /// Switches activity. The previous session is dropped; the new one reads
    /// the word list fresh from the store.
    pub fn open(&mut self, activity: Activity) -> StoreResult<()> {
        self.flashcards = None;
        self.writing = None;
        self.sentences = None;

        match activity {
            Activity::Home => {}
            Activity::Flashcards => {
                self.flashcards = Some(FlashcardEngine::new(
                    self.word_store(),
                    self.progress_store(),
                )?);
            }
            Activity::Writing => {
                self.writing = Some(WritingEngine::new(self.word_store().load()?));
            }
            Activity::Sentences => {
                let words = self.word_store().load()?;
                self.sentences = Some(SentenceEngine::new(&words));
            }
        }
        self.activity = activity;
        Ok(())
    }

    /// Opens the parent settings overlay on top of whatever is active.
    pub fn open_settings(&mut self) -> StoreResult<()> {
        self.settings = Some(SettingsEditor::new(self.word_store())?);
        Ok(())
    }

    pub fn close_settings(&mut self) {
        self.settings = None;
    }

    // ========== Flashcards ==========

    pub fn flashcard_mark_correct(&mut self) -> StoreResult<()> {
        if let Some(engine) = self.flashcards.as_mut() {
            engine.mark_correct()?;
        }
        Ok(())
    }

    /// "I don't know it": speaks the word, then releases the engine's
    /// speaking lock whether or not audio came out.
    pub fn flashcard_mark_incorrect(&mut self) {
        if let Some(engine) = self.flashcards.as_mut() {
            if let Some(request) = engine.mark_incorrect() {
                Self::speak(&self.gateway, &request);
                engine.speech_finished();
            }
        }
    }

    pub fn flashcard_advance(&mut self) {
        if let Some(engine) = self.flashcards.as_mut() {
            engine.advance();
        }
    }

    /// "Play Again".
    pub fn flashcard_reset(&mut self) -> StoreResult<()> {
        if let Some(engine) = self.flashcards.as_mut() {
            engine.reset()?;
        }
        Ok(())
    }

    // ========== Sentences ==========

    pub fn sentence_request_help(&mut self) {
        if let Some(engine) = self.sentences.as_mut() {
            if let Some(request) = engine.request_help() {
                Self::speak(&self.gateway, &request);
                engine.speech_finished();
            }
        }
    }

    pub fn sentence_mark_correct(&mut self) {
        if let Some(engine) = self.sentences.as_mut() {
            engine.mark_correct();
        }
    }

    pub fn sentence_next(&mut self) {
        if let Some(engine) = self.sentences.as_mut() {
            engine.next_sentence();
        }
    }

    // ========== Writing ==========

    pub fn writing_next(&mut self) {
        if let Some(engine) = self.writing.as_mut() {
            engine.next();
        }
    }

    pub fn writing_prev(&mut self) {
        if let Some(engine) = self.writing.as_mut() {
            engine.prev();
        }
    }

    pub fn writing_hear_instructions(&mut self) {
        if let Some(engine) = self.writing.as_mut() {
            if let Some(request) = engine.request_instructions() {
                Self::speak(&self.gateway, &request);
                engine.speech_finished();
            }
        }
    }

    // ========== Accessors ==========

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn flashcards(&self) -> Option<&FlashcardEngine<S>> {
        self.flashcards.as_ref()
    }

    pub fn sentences(&self) -> Option<&SentenceEngine> {
        self.sentences.as_ref()
    }

    pub fn writing(&self) -> Option<&WritingEngine> {
        self.writing.as_ref()
    }

    pub fn settings(&self) -> Option<&SettingsEditor<S>> {
        self.settings.as_ref()
    }

    pub fn settings_mut(&mut self) -> Option<&mut SettingsEditor<S>> {
        self.settings.as_mut()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn word_store(&self) -> WordStore<S> {
        WordStore::new(Arc::clone(&self.store))
    }

    fn progress_store(&self) -> ProgressStore<S> {
        ProgressStore::new(Arc::clone(&self.store))
    }

    /// Degrades to silence on any speech failure; nothing here is fatal and
    /// nothing is retried.
    fn speak(gateway: &G, request: &SpeechRequest) {
        match gateway
            .synthesize(&request.text)
            .and_then(|clip| gateway.play(clip))
        {
            Ok(()) => {}
            Err(SpeechError::Unavailable) => {
                log::warn!("speech is not configured; continuing without audio");
            }
            Err(err) => {
                log::warn!("speech failed for {:?}: {err}", request.text);
            }
        }
    }
}
