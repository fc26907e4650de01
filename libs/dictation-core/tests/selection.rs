//! End-to-end selection scenarios against a record store.

use chrono::{TimeZone, Utc};
use dictation_core::{
    select_session, LearningRecord, MemoryStore, RecordStore, SelectorConfig, WordEntry,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn corpus() -> Vec<WordEntry> {
    vec![
        WordEntry::new("cat", 1).with_sentence("The cat sleeps."),
        WordEntry::new("dog", 2).with_sentence("The dog barks."),
    ]
}

fn config() -> SelectorConfig {
    SelectorConfig {
        rank_limit: Some(10),
        max_questions: 2,
        mastery_threshold: 2,
        require_sentence: true,
        exclude_repeated_skips: false,
    }
}

#[test]
fn fresh_history_selects_whole_corpus() {
    let store = RecordStore::load(MemoryStore::new());
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let mut selected: Vec<String> = select_session(&corpus(), store.records(), &config(), &mut rng)
        .into_iter()
        .map(|e| e.word)
        .collect();
    selected.sort();

    assert_eq!(selected, vec!["cat".to_string(), "dog".to_string()]);
}

#[test]
fn mastered_word_is_left_out() {
    let history = vec![LearningRecord {
        word: "cat".to_string(),
        sentence: Some("The cat sleeps.".to_string()),
        correct_count: 2,
        skip_count: 0,
        last_answered: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
    }];
    let store = RecordStore::load(MemoryStore::with_history(
        serde_json::to_string(&history).unwrap(),
    ));
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let selected = select_session(&corpus(), store.records(), &config(), &mut rng);

    assert_eq!(selected, vec![WordEntry::new("dog", 2).with_sentence("The dog barks.")]);
}

#[test]
fn never_exceeds_max_and_never_repeats() {
    let corpus: Vec<WordEntry> = (1..=200)
        .map(|i| WordEntry::new(format!("word{i}"), i).with_sentence(format!("Use word{i}.")))
        .collect();
    let config = SelectorConfig {
        rank_limit: None,
        max_questions: 25,
        ..config()
    };

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let selected = select_session(&corpus, std::iter::empty::<&LearningRecord>(), &config, &mut rng);
        assert_eq!(selected.len(), 25);

        let mut words: Vec<&str> = selected.iter().map(|e| e.word.as_str()).collect();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), 25);
    }
}
