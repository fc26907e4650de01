//! Core types for the dictation trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A word from the read-only corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    /// Frequency rank, 1 = most frequent.
    pub rank: u32,
    /// Raw frequency count from the corpus source, informational only.
    #[serde(default)]
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
}

impl WordEntry {
    /// Create an entry without an example sentence.
    pub fn new(word: impl Into<String>, rank: u32) -> Self {
        Self {
            word: word.into(),
            rank,
            count: 0,
            sentence: None,
        }
    }

    /// Attach an example sentence.
    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = Some(sentence.into());
        self
    }

    /// The example sentence, if present and not blank.
    pub fn sentence_text(&self) -> Option<&str> {
        self.sentence
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// Text the learner has to type: the sentence when there is one, else the word.
    pub fn prompt(&self) -> &str {
        self.sentence_text().unwrap_or(&self.word)
    }
}

/// Per-word performance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecord {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    pub correct_count: u32,
    pub skip_count: u32,
    pub last_answered: DateTime<Utc>,
}

impl LearningRecord {
    /// First attempt at a word.
    pub fn first_attempt(
        word: impl Into<String>,
        sentence: Option<String>,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            word: word.into(),
            sentence,
            correct_count: u32::from(was_correct),
            skip_count: u32::from(!was_correct),
            last_answered: now,
        }
    }

    /// Apply another attempt. Counters only ever grow.
    pub fn record_attempt(&mut self, sentence: Option<String>, was_correct: bool, now: DateTime<Utc>) {
        if was_correct {
            self.correct_count = self.correct_count.saturating_add(1);
        } else {
            self.skip_count = self.skip_count.saturating_add(1);
        }
        if sentence.is_some() {
            self.sentence = sentence;
        }
        self.last_answered = now;
    }

    /// Whether the word has been answered correctly often enough to retire it.
    pub fn is_mastered(&self, threshold: u32) -> bool {
        self.correct_count >= threshold
    }
}

/// Options controlling which words go into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Only consider entries with `rank <= rank_limit`. `None` disables the filter.
    pub rank_limit: Option<u32>,
    pub max_questions: usize,
    pub mastery_threshold: u32,
    pub require_sentence: bool,
    /// Also retire words skipped `mastery_threshold` times or more.
    pub exclude_repeated_skips: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            rank_limit: Some(1000),
            max_questions: 10,
            mastery_threshold: 2,
            require_sentence: true,
            exclude_repeated_skips: false,
        }
    }
}
