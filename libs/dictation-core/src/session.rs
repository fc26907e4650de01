//! Practice session controller.
//!
//! A session only starts once both the corpus and the record store have been
//! supplied. Answers go through the record store, and a reset invalidates the
//! running queue until the next [`Session::start`].

use crate::error::{DictationError, Result};
use crate::selector::select_session;
use crate::store::{KeyValueStore, RecordStore};
use crate::types::{LearningRecord, SelectorConfig, WordEntry};
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for corpus and/or records.
    Loading,
    /// Both inputs present, no queue yet.
    Ready,
    Active,
    /// The queue was reset out from under the caller.
    Invalidated,
}

pub struct Session<S> {
    config: SelectorConfig,
    corpus: Option<Vec<WordEntry>>,
    store: Option<RecordStore<S>>,
    queue: Vec<WordEntry>,
    current_index: usize,
    started: bool,
    invalidated: bool,
    rng: ChaCha8Rng,
}

impl<S: KeyValueStore> Session<S> {
    /// New session. A fixed `seed` makes selection reproducible.
    pub fn new(config: SelectorConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            corpus: None,
            store: None,
            queue: Vec::new(),
            current_index: 0,
            started: false,
            invalidated: false,
            rng,
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Change selection options; takes effect on the next start.
    pub fn set_config(&mut self, config: SelectorConfig) {
        self.config = config;
    }

    pub fn set_corpus(&mut self, corpus: Vec<WordEntry>) {
        tracing::debug!(words = corpus.len(), "corpus ready");
        self.corpus = Some(corpus);
    }

    pub fn attach_store(&mut self, store: RecordStore<S>) {
        tracing::debug!(records = store.len(), "record store ready");
        self.store = Some(store);
    }

    pub fn corpus(&self) -> &[WordEntry] {
        self.corpus.as_deref().unwrap_or_default()
    }

    pub fn store(&self) -> Option<&RecordStore<S>> {
        self.store.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.corpus.is_some() && self.store.is_some()
    }

    pub fn status(&self) -> SessionStatus {
        if self.invalidated {
            SessionStatus::Invalidated
        } else if !self.is_ready() {
            SessionStatus::Loading
        } else if !self.started {
            SessionStatus::Ready
        } else {
            SessionStatus::Active
        }
    }

    /// Select a fresh batch of questions. Returns how many were queued;
    /// zero means everything in range is mastered.
    pub fn start(&mut self) -> Result<usize> {
        let (Some(corpus), Some(store)) = (self.corpus.as_ref(), self.store.as_ref()) else {
            return Err(DictationError::NotReady(
                "corpus and learning records must both be loaded",
            ));
        };

        self.queue = select_session(corpus, store.records(), &self.config, &mut self.rng);
        self.current_index = 0;
        self.started = true;
        self.invalidated = false;
        tracing::info!(questions = self.queue.len(), "session started");
        Ok(self.queue.len())
    }

    /// The question currently being asked.
    pub fn current(&self) -> Option<&WordEntry> {
        if self.invalidated {
            return None;
        }
        self.queue.get(self.current_index)
    }

    /// Zero-based position of the current question.
    pub fn position(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// True once every queued question has been answered.
    pub fn is_complete(&self) -> bool {
        !self.invalidated && self.current_index >= self.queue.len()
    }

    /// Record the outcome of the current question and move to the next one.
    pub fn answer(&mut self, was_correct: bool, now: DateTime<Utc>) -> Result<LearningRecord> {
        if self.invalidated {
            return Err(DictationError::Invalidated);
        }
        let entry = self
            .queue
            .get(self.current_index)
            .ok_or(DictationError::NotReady("no question is pending"))?;
        let store = self
            .store
            .as_mut()
            .ok_or(DictationError::NotReady("learning records not loaded"))?;

        let record = store.upsert(&entry.word, entry.sentence_text(), was_correct, now);
        tracing::debug!(
            word = %record.word,
            was_correct,
            correct = record.correct_count,
            skipped = record.skip_count,
            "answer recorded"
        );
        self.current_index += 1;
        Ok(record)
    }

    /// Clear all history and drop the running queue.
    pub fn reset(&mut self) {
        if let Some(store) = self.store.as_mut() {
            store.reset();
        }
        self.queue.clear();
        self.current_index = 0;
        self.started = false;
        self.invalidated = true;
        tracing::info!("learning history reset");
    }
}
