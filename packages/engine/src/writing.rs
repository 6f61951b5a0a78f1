//! Copy-practice cursor over the word list.

use crate::speech::SpeechRequest;
use crate::types::SightWord;

pub struct WritingEngine {
    words: Vec<SightWord>,
    index: usize,
    speaking: bool,
}

impl WritingEngine {
    pub fn new(words: Vec<SightWord>) -> Self {
        Self {
            words,
            index: 0,
            speaking: false,
        }
    }

    pub fn current_word(&self) -> Option<&SightWord> {
        self.words.get(self.index)
    }

    /// Moves forward, wrapping past the end. No-op on an empty list.
    pub fn next(&mut self) {
        if !self.words.is_empty() {
            self.index = (self.index + 1) % self.words.len();
        }
    }

    /// Moves backward, wrapping before the start. No-op on an empty list.
    pub fn prev(&mut self) {
        if !self.words.is_empty() {
            self.index = (self.index + self.words.len() - 1) % self.words.len();
        }
    }

    /// "Hear Instructions": the spoken copy-practice prompt for the current
    /// word. Rejected while already speaking.
    pub fn request_instructions(&mut self) -> Option<SpeechRequest> {
        if self.speaking {
            return None;
        }
        let word = self.current_word()?;
        let request = SpeechRequest::new(format!(
            "Let's practice writing the word: {word}. Try to copy it!"
        ));
        self.speaking = true;
        Some(request)
    }

    pub fn speech_finished(&mut self) {
        self.speaking = false;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }
}
