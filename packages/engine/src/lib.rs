//! # sightwords-engine - sight-word activity core
//!
//! Pure state machines and persistence contracts behind the sight-word
//! learning activities. No I/O lives here: storage and speech are injected
//! capabilities, so every engine is unit-testable with fakes.
//!
//! ## Module structure
//!
//! - [`types`] - `SightWord`, the built-in default word list, the sentence set
//! - [`store`] - `KeyValueStore` capability, `WordStore`, `ProgressStore`
//! - [`speech`] - `SpeechGateway` capability contract (`AudioClip`, errors)
//! - [`flashcard`] - shuffled-round flashcard state machine with scoring
//! - [`sentence`] - fixed sentence cycle with sight-word highlighting
//! - [`writing`] - bidirectional cursor for copy practice
//! - [`settings`] - parent-facing word list editor over `WordStore`

pub mod flashcard;
pub mod sentence;
pub mod settings;
pub mod speech;
pub mod store;
pub mod types;
pub mod writing;

pub use flashcard::{FlashcardEngine, FlashcardPhase};
pub use sentence::{Segment, SentenceEngine};
pub use settings::SettingsEditor;
pub use speech::{AudioClip, SpeechError, SpeechGateway, SpeechRequest, SpeechResult};
pub use store::{
    KeyValueStore, MemoryStore, ProgressStore, StoreError, StoreResult, WordStore,
    HIGH_SCORE_KEY, WORDS_KEY,
};
pub use types::{default_word_list, SightWord, DEFAULT_SIGHT_WORDS, SENTENCES};
pub use writing::WritingEngine;
