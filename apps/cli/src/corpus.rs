//! Word corpus loading.

use dictation_core::WordEntry;
use std::path::Path;

/// Read a JSON array of word entries.
///
/// A missing or malformed file is logged and yields an empty corpus, which
/// surfaces to the learner as "no questions available".
pub fn load_corpus(path: &Path) -> Vec<WordEntry> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to read corpus");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<WordEntry>>(&raw) {
        Ok(entries) => {
            tracing::info!(path = %path.display(), words = entries.len(), "corpus loaded");
            entries
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "corpus is not a list of words");
            Vec::new()
        }
    }
}
