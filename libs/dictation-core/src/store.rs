//! Learning record store backed by a key-value persistence layer.

use crate::error::Result;
use crate::snapshot::{self, ExportFormat};
use crate::types::LearningRecord;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

/// Key under which the serialized record list is persisted.
pub const STORAGE_KEY: &str = "dictation-history";

/// Minimal string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a raw value under [`STORAGE_KEY`].
    pub fn with_history(value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(STORAGE_KEY.to_string(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One record per word, written through to the key-value store on every change.
#[derive(Debug)]
pub struct RecordStore<S> {
    kv: S,
    records: BTreeMap<String, LearningRecord>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Load persisted history. Missing, unreadable or malformed history is
    /// treated as empty.
    pub fn load(kv: S) -> Self {
        let records = match kv.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<LearningRecord>>(&raw) {
                Ok(list) => index_by_word(list),
                Err(e) => {
                    tracing::warn!(error = %e, "stored history is malformed, starting empty");
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored history, starting empty");
                BTreeMap::new()
            }
        };
        tracing::debug!(count = records.len(), "loaded learning records");
        Self { kv, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&LearningRecord> {
        self.records.get(word)
    }

    /// Records ordered by word.
    pub fn records(&self) -> impl Iterator<Item = &LearningRecord> {
        self.records.values()
    }

    pub fn to_vec(&self) -> Vec<LearningRecord> {
        self.records.values().cloned().collect()
    }

    /// Access the underlying key-value store.
    pub fn backend(&self) -> &S {
        &self.kv
    }

    /// Record one completed question and persist the whole store.
    pub fn upsert(
        &mut self,
        word: &str,
        sentence: Option<&str>,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> LearningRecord {
        let sentence = sentence.map(str::to_string);
        let record = match self.records.get_mut(word) {
            Some(existing) => {
                existing.record_attempt(sentence, was_correct, now);
                existing.clone()
            }
            None => {
                let created = LearningRecord::first_attempt(word, sentence, was_correct, now);
                self.records.insert(word.to_string(), created.clone());
                created
            }
        };
        self.persist();
        record
    }

    /// Drop every record and erase the persisted history.
    pub fn reset(&mut self) {
        self.records.clear();
        if let Err(e) = self.kv.remove(STORAGE_KEY) {
            tracing::warn!(error = %e, "failed to erase stored history");
        }
    }

    pub fn export_snapshot(&self, format: ExportFormat) -> Result<String> {
        snapshot::export(&self.to_vec(), format)
    }

    /// Replace the whole store with a JSON snapshot. On error nothing changes.
    pub fn import_snapshot(&mut self, data: &str) -> Result<usize> {
        let list = snapshot::parse_json(data)?;
        self.records = index_by_word(list);
        self.persist();
        Ok(self.records.len())
    }

    fn persist(&mut self) {
        let serialized = match snapshot::to_json_compact(&self.to_vec()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize history");
                return;
            }
        };
        if let Err(e) = self.kv.set(STORAGE_KEY, &serialized) {
            tracing::warn!(error = %e, "failed to persist history");
        }
    }
}

fn index_by_word(list: Vec<LearningRecord>) -> BTreeMap<String, LearningRecord> {
    list.into_iter().map(|r| (r.word.clone(), r)).collect()
}
