//! Sentence reading state machine.
//!
//! Cycles through the fixed sentence set, highlighting the sight words the
//! child already knows. "I can read it" only counts when the sentence was
//! attempted without hearing it first.

use std::collections::HashSet;

use crate::speech::SpeechRequest;
use crate::types::{SightWord, SENTENCES};

/// One rendered piece of a sentence: either a run of delimiters or a token,
/// flagged when the token is a known sight word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_sight_word: bool,
}

pub struct SentenceEngine {
    sentences: Vec<String>,
    word_set: HashSet<SightWord>,
    index: usize,
    score: u32,
    help_requested: bool,
    speaking: bool,
}

impl SentenceEngine {
    /// A session over the built-in sentence set, highlighting against the
    /// given word list.
    pub fn new(words: &[SightWord]) -> Self {
        Self::with_sentences(SENTENCES.iter().map(|s| s.to_string()).collect(), words)
    }

    /// A session over a caller-supplied sentence sequence (tests).
    pub fn with_sentences(sentences: Vec<String>, words: &[SightWord]) -> Self {
        Self {
            sentences,
            word_set: words.iter().cloned().collect(),
            index: 0,
            score: 0,
            help_requested: false,
            speaking: false,
        }
    }

    pub fn current_sentence(&self) -> Option<&str> {
        self.sentences.get(self.index).map(String::as_str)
    }

    /// "I need help": speaks the full sentence and flags it, which disables
    /// scoring until the next sentence. Rejected while already speaking.
    pub fn request_help(&mut self) -> Option<SpeechRequest> {
        if self.speaking {
            return None;
        }
        let sentence = self.current_sentence()?.to_string();
        self.help_requested = true;
        self.speaking = true;
        Some(SpeechRequest::new(sentence))
    }

    /// Releases the speaking lock; the help flag stays set for the current
    /// sentence.
    pub fn speech_finished(&mut self) {
        self.speaking = false;
    }

    /// "I can read it": only counts when the sentence was attempted without
    /// help. Returns whether the action was accepted.
    pub fn mark_correct(&mut self) -> bool {
        if self.speaking || self.help_requested {
            return false;
        }
        if self.sentences.is_empty() {
            return false;
        }
        self.score += 1;
        self.advance();
        true
    }

    /// Always available: clears the help flag and wraps past the end.
    pub fn next_sentence(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.help_requested = false;
        if !self.sentences.is_empty() {
            self.index = (self.index + 1) % self.sentences.len();
        }
    }

    /// The current sentence split into segments, preserving delimiter runs.
    /// Tokens are compared lowercased against the word set.
    pub fn segments(&self) -> Vec<Segment> {
        let Some(sentence) = self.current_sentence() else {
            return Vec::new();
        };
        split_keeping_delimiters(sentence)
            .into_iter()
            .map(|text| {
                let is_sight_word = SightWord::new(&text)
                    .map_or(false, |word| self.word_set.contains(&word));
                Segment {
                    text,
                    is_sight_word,
                }
            })
            .collect()
    }

    // ========== Accessors ==========

    pub fn sentence_index(&self) -> usize {
        self.index
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '.' | ',' | '!' | '?')
}

/// Splits into alternating token and delimiter runs, dropping nothing.
fn split_keeping_delimiters(text: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_is_delim: Option<bool> = None;

    for c in text.chars() {
        let is_delim = is_delimiter(c);
        if current_is_delim != Some(is_delim) && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        current.push(c);
        current_is_delim = Some(is_delim);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
