//! Flashcard round state machine.
//!
//! One round is a full pass through a shuffled copy of the word list. The
//! child answers each word once; a wrong answer plays the word aloud and
//! waits for an explicit "Next". Score and the persisted high score track
//! correct-on-first-attempt answers.

use std::collections::HashSet;

use rand::Rng;

use crate::speech::SpeechRequest;
use crate::store::{KeyValueStore, ProgressStore, StoreResult, WordStore};
use crate::types::SightWord;

/// Where a round currently stands.
///
/// `Playing ⇄ HelpRequested` while the round runs; a finished round lands in
/// `RoundComplete`, or `PerfectRound` when every word was answered correctly
/// on first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardPhase {
    Playing,
    HelpRequested,
    RoundComplete,
    PerfectRound,
}

pub struct FlashcardEngine<S> {
    words_store: WordStore<S>,
    progress: ProgressStore<S>,
    words: Vec<SightWord>,
    index: usize,
    answered: HashSet<SightWord>,
    score: u32,
    high_score: u32,
    speaking: bool,
    phase: FlashcardPhase,
}

impl<S: KeyValueStore> FlashcardEngine<S> {
    /// Starts a fresh round: loads the word list, shuffles it, reads the
    /// persisted high score.
    pub fn new(words_store: WordStore<S>, progress: ProgressStore<S>) -> StoreResult<Self> {
        Self::with_rng(words_store, progress, &mut rand::thread_rng())
    }

    /// As [`FlashcardEngine::new`] with a caller-supplied RNG, so tests can
    /// pin the shuffle.
    pub fn with_rng<R: Rng + ?Sized>(
        words_store: WordStore<S>,
        progress: ProgressStore<S>,
        rng: &mut R,
    ) -> StoreResult<Self> {
        let mut engine = Self {
            words_store,
            progress,
            words: Vec::new(),
            index: 0,
            answered: HashSet::new(),
            score: 0,
            high_score: 0,
            speaking: false,
            phase: FlashcardPhase::Playing,
        };
        engine.load_round(rng)?;
        Ok(engine)
    }

    /// "Play Again": re-reads the word list, reshuffles, zeroes the score
    /// and carries the persisted high score into the new round.
    pub fn reset(&mut self) -> StoreResult<()> {
        self.load_round(&mut rand::thread_rng())
    }

    /// As [`FlashcardEngine::reset`] with a caller-supplied RNG.
    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StoreResult<()> {
        self.load_round(rng)
    }

    fn load_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StoreResult<()> {
        use rand::seq::SliceRandom;

        let mut words = self.words_store.load()?;
        words.shuffle(rng);

        self.words = words;
        self.index = 0;
        self.answered.clear();
        self.score = 0;
        self.speaking = false;
        // A list emptied from the settings editor leaves nothing to play.
        self.phase = if self.words.is_empty() {
            FlashcardPhase::RoundComplete
        } else {
            FlashcardPhase::Playing
        };
        self.high_score = self.progress.high_score()?;
        Ok(())
    }

    /// "I know it". Valid only while `Playing` and not speaking. Increments
    /// the score, updates the persisted high score when beaten, and advances.
    /// Returns whether the action was accepted.
    pub fn mark_correct(&mut self) -> StoreResult<bool> {
        if self.speaking || self.phase != FlashcardPhase::Playing {
            return Ok(false);
        }
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.progress.record(self.score)?;
        }
        self.advance_inner();
        Ok(true)
    }

    /// "I don't know it". Valid only while `Playing` and not speaking.
    /// Enters `HelpRequested`, takes the speaking lock, and hands back the
    /// word to speak. The round stays put until an explicit [`advance`].
    ///
    /// [`advance`]: FlashcardEngine::advance
    pub fn mark_incorrect(&mut self) -> Option<SpeechRequest> {
        if self.speaking || self.phase != FlashcardPhase::Playing {
            return None;
        }
        let word = self.words.get(self.index)?.clone();
        self.phase = FlashcardPhase::HelpRequested;
        self.speaking = true;
        Some(SpeechRequest::new(word.as_str()))
    }

    /// Releases the speaking lock. Called exactly once per speech request,
    /// whether synthesis and playback succeeded or not.
    pub fn speech_finished(&mut self) {
        self.speaking = false;
    }

    /// The explicit "Next" after help: marks the current word answered and
    /// moves on. Valid only from `HelpRequested` and not while speaking;
    /// [`mark_correct`] advances implicitly through the same path.
    ///
    /// [`mark_correct`]: FlashcardEngine::mark_correct
    pub fn advance(&mut self) {
        if self.speaking || self.phase != FlashcardPhase::HelpRequested {
            return;
        }
        self.advance_inner();
    }

    /// Marks the current word answered and selects the first unanswered word
    /// scanning forward cyclically. Ends the round when every word has been
    /// answered.
    fn advance_inner(&mut self) {
        let Some(current) = self.words.get(self.index).cloned() else {
            return;
        };
        self.answered.insert(current);
        self.phase = FlashcardPhase::Playing;

        let len = self.words.len();
        if self.answered.len() == len {
            self.phase = if self.score as usize == len {
                FlashcardPhase::PerfectRound
            } else {
                FlashcardPhase::RoundComplete
            };
            return;
        }

        // Bounded scan: at most one full lap, so a single remaining
        // unanswered word cannot spin the loop forever.
        let mut next = (self.index + 1) % len;
        for _ in 0..len {
            if !self.answered.contains(&self.words[next]) {
                break;
            }
            next = (next + 1) % len;
        }
        self.index = next;
    }

    // ========== Accessors ==========

    pub fn phase(&self) -> FlashcardPhase {
        self.phase
    }

    pub fn current_word(&self) -> Option<&SightWord> {
        self.words.get(self.index)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    pub fn is_round_over(&self) -> bool {
        matches!(
            self.phase,
            FlashcardPhase::RoundComplete | FlashcardPhase::PerfectRound
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::store::{MemoryStore, WORDS_KEY};

    fn seeded_engine(words: &[&str], seed: u64) -> FlashcardEngine<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let list: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        store
            .set(WORDS_KEY, &serde_json::to_string(&list).unwrap())
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        FlashcardEngine::with_rng(
            WordStore::new(Arc::clone(&store)),
            ProgressStore::new(store),
            &mut rng,
        )
        .expect("failed to start round")
    }

    #[test]
    fn test_shuffle_visits_every_word_exactly_once() {
        let mut engine = seeded_engine(&["one", "two", "three", "four", "five"], 7);
        let mut seen: Vec<String> = Vec::new();
        while !engine.is_round_over() {
            let word = engine.current_word().unwrap().as_str().to_string();
            assert!(!seen.contains(&word), "word repeated within a round");
            seen.push(word);
            engine.mark_correct().unwrap();
        }
        let mut sorted = seen.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, ["five", "four", "one", "three", "two"]);
    }

    #[test]
    fn test_perfect_round_after_all_correct() {
        let mut engine = seeded_engine(&["up", "down", "look"], 1);
        for _ in 0..3 {
            assert!(engine.mark_correct().unwrap());
        }
        assert_eq!(engine.score(), 3);
        assert_eq!(engine.answered_count(), 3);
        assert!(engine.is_round_over());
        assert_eq!(engine.phase(), FlashcardPhase::PerfectRound);
    }

    #[test]
    fn test_imperfect_round_ends_in_round_complete() {
        let mut engine = seeded_engine(&["up", "down"], 1);
        assert!(engine.mark_correct().unwrap());

        let request = engine.mark_incorrect().expect("help should be granted");
        assert_eq!(request.text, engine.current_word().unwrap().as_str());
        assert_eq!(engine.phase(), FlashcardPhase::HelpRequested);
        engine.speech_finished();
        engine.advance();

        assert!(engine.is_round_over());
        assert_eq!(engine.phase(), FlashcardPhase::RoundComplete);
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn test_actions_rejected_while_speaking() {
        let mut engine = seeded_engine(&["up", "down", "look"], 3);
        engine.mark_incorrect().expect("help should be granted");

        // Speech still in progress: nothing moves.
        assert!(!engine.mark_correct().unwrap());
        assert!(engine.mark_incorrect().is_none());
        let before = engine.current_word().cloned();
        engine.advance();
        assert_eq!(engine.current_word().cloned(), before);
        assert_eq!(engine.phase(), FlashcardPhase::HelpRequested);

        engine.speech_finished();
        engine.advance();
        assert_eq!(engine.phase(), FlashcardPhase::Playing);
        assert_eq!(engine.answered_count(), 1);
    }

    #[test]
    fn test_help_requested_does_not_score() {
        let mut engine = seeded_engine(&["up", "down"], 9);
        engine.mark_incorrect().expect("help should be granted");
        engine.speech_finished();

        // markCorrect is Playing-only; in HelpRequested the only way out is
        // the explicit advance.
        assert!(!engine.mark_correct().unwrap());
        assert_eq!(engine.score(), 0);
        engine.advance();
        assert_eq!(engine.answered_count(), 1);
    }

    #[test]
    fn test_advance_skips_answered_words() {
        let mut engine = seeded_engine(&["a", "b", "c", "d"], 11);
        let mut order = Vec::new();
        while !engine.is_round_over() {
            order.push(engine.current_word().unwrap().clone());
            engine.mark_incorrect().unwrap();
            engine.speech_finished();
            engine.advance();
        }
        // Every word selected exactly once, including the last remaining one.
        let unique: HashSet<_> = order.iter().cloned().collect();
        assert_eq!(unique.len(), 4);
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn test_single_word_round_terminates() {
        let mut engine = seeded_engine(&["only"], 5);
        assert!(engine.mark_correct().unwrap());
        assert_eq!(engine.phase(), FlashcardPhase::PerfectRound);
        // Further actions are no-ops once the round is over.
        assert!(!engine.mark_correct().unwrap());
        assert!(engine.mark_incorrect().is_none());
    }

    #[test]
    fn test_emptied_word_list_starts_complete() {
        let mut engine = seeded_engine(&[], 0);
        assert!(engine.is_round_over());
        assert!(!engine.mark_correct().unwrap());
        assert!(engine.current_word().is_none());
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_high_score_persists_across_resets() {
        let mut engine = seeded_engine(&["up", "down"], 2);
        engine.mark_correct().unwrap();
        engine.mark_correct().unwrap();
        assert_eq!(engine.high_score(), 2);

        engine.reset().unwrap();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.high_score(), 2, "high score survives Play Again");

        // A worse round does not lower it.
        engine.mark_incorrect().unwrap();
        engine.speech_finished();
        engine.advance();
        engine.mark_correct().unwrap();
        assert_eq!(engine.high_score(), 2);
    }

    #[test]
    fn test_high_score_written_mid_round() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(WORDS_KEY, &serde_json::to_string(&["up", "down"]).unwrap())
            .unwrap();
        let progress = ProgressStore::new(Arc::clone(&store));
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut engine = FlashcardEngine::with_rng(
            WordStore::new(Arc::clone(&store)),
            progress.clone(),
            &mut rng,
        )
        .unwrap();

        engine.mark_correct().unwrap();
        // Persisted as soon as the score changed, not at round end.
        assert_eq!(progress.high_score().unwrap(), 1);
    }
}
