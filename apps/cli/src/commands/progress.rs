//! Learning history and progress report.

use anyhow::Result;
use dictation_core::{recent, summarize, KeyValueStore, RecordStore, View};
use std::io::Write;

pub fn show_progress<S: KeyValueStore, W: Write>(
    store: &RecordStore<S>,
    total_words: usize,
    view: View,
    out: &mut W,
) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "No learning history yet.")?;
    } else {
        writeln!(out, "Learning history:")?;
        for record in recent(store.records(), view) {
            writeln!(
                out,
                "  {}: correct {} / skipped {}  (last {})",
                record.word,
                record.correct_count,
                record.skip_count,
                record.last_answered.format("%Y-%m-%d %H:%M")
            )?;
            if let Some(sentence) = &record.sentence {
                writeln!(out, "      {sentence}")?;
            }
        }
    }

    let summary = summarize(store.records(), total_words);
    writeln!(out)?;
    writeln!(
        out,
        "Learned words: {} / {} ({}%)",
        summary.learned_words, summary.total_words, summary.percent
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dictation_core::MemoryStore;

    #[test]
    fn prints_newest_first_with_summary() {
        let mut store = RecordStore::load(MemoryStore::new());
        store.upsert(
            "cat",
            Some("The cat sleeps."),
            true,
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        );
        store.upsert("dog", None, false, Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap());

        let mut out: Vec<u8> = Vec::new();
        show_progress(&store, 4, View::Latest, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let dog = text.find("dog:").unwrap();
        let cat = text.find("cat:").unwrap();
        assert!(dog < cat);
        assert!(text.contains("The cat sleeps."));
        assert!(text.contains("Learned words: 1 / 4 (25%)"));
    }

    #[test]
    fn empty_history() {
        let store = RecordStore::load(MemoryStore::new());
        let mut out: Vec<u8> = Vec::new();
        show_progress(&store, 0, View::All, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No learning history yet."));
        assert!(text.contains("Learned words: 0 / 0 (0%)"));
    }
}
