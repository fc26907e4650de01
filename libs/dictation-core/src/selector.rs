//! Question selection.
//!
//! Filters the corpus by rank and sentence availability, drops mastered
//! words, shuffles what is left and truncates to the session size.

use crate::types::{LearningRecord, SelectorConfig, WordEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Pick the next batch of words to quiz.
///
/// An empty result means there is nothing left to practice.
pub fn select_session<'r, R>(
    corpus: &[WordEntry],
    records: impl IntoIterator<Item = &'r LearningRecord>,
    config: &SelectorConfig,
    rng: &mut R,
) -> Vec<WordEntry>
where
    R: Rng + ?Sized,
{
    let history: HashMap<&str, &LearningRecord> = records
        .into_iter()
        .map(|r| (r.word.as_str(), r))
        .collect();

    let mut seen = HashSet::new();
    let mut eligible: Vec<&WordEntry> = corpus
        .iter()
        .filter(|entry| in_scope(entry, config))
        .filter(|entry| !is_retired(history.get(entry.word.as_str()).copied(), config))
        .filter(|entry| seen.insert(entry.word.as_str()))
        .collect();

    let available = eligible.len();
    eligible.shuffle(rng);
    eligible.truncate(config.max_questions);

    tracing::debug!(
        corpus = corpus.len(),
        available,
        selected = eligible.len(),
        "selected session"
    );

    eligible.into_iter().cloned().collect()
}

/// Rank and sentence filters.
fn in_scope(entry: &WordEntry, config: &SelectorConfig) -> bool {
    if let Some(limit) = config.rank_limit {
        if entry.rank > limit {
            return false;
        }
    }
    !config.require_sentence || entry.sentence_text().is_some()
}

fn is_retired(record: Option<&LearningRecord>, config: &SelectorConfig) -> bool {
    match record {
        Some(r) => {
            r.is_mastered(config.mastery_threshold)
                || (config.exclude_repeated_skips && r.skip_count >= config.mastery_threshold)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn corpus() -> Vec<WordEntry> {
        vec![
            WordEntry::new("cat", 1).with_sentence("The cat sleeps."),
            WordEntry::new("dog", 2).with_sentence("The dog barks."),
            WordEntry::new("book", 3),
            WordEntry::new("milk", 40).with_sentence("I drink milk."),
            WordEntry::new("react", 500).with_sentence("React is a library."),
        ]
    }

    fn record(word: &str, correct: u32, skipped: u32) -> LearningRecord {
        LearningRecord {
            word: word.to_string(),
            sentence: None,
            correct_count: correct,
            skip_count: skipped,
            last_answered: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn no_history() -> Vec<LearningRecord> {
        Vec::new()
    }

    fn words(entries: &[WordEntry]) -> Vec<&str> {
        let mut out: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        out.sort_unstable();
        out
    }

    fn config() -> SelectorConfig {
        SelectorConfig {
            rank_limit: Some(100),
            max_questions: 10,
            mastery_threshold: 2,
            require_sentence: true,
            exclude_repeated_skips: false,
        }
    }

    #[test]
    fn filters_rank_and_missing_sentence() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let selected = select_session(&corpus(), &no_history(), &config(), &mut rng);
        assert_eq!(words(&selected), vec!["cat", "dog", "milk"]);
    }

    #[test]
    fn no_rank_limit_and_no_sentence_requirement() {
        let config = SelectorConfig {
            rank_limit: None,
            require_sentence: false,
            ..config()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let selected = select_session(&corpus(), &no_history(), &config, &mut rng);
        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn mastered_words_are_excluded() {
        let records = vec![record("cat", 2, 0), record("dog", 1, 5)];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let selected = select_session(&corpus(), &records, &config(), &mut rng);
        assert_eq!(words(&selected), vec!["dog", "milk"]);
    }

    #[test]
    fn repeated_skips_excluded_when_enabled() {
        let records = vec![record("dog", 0, 2)];
        let config = SelectorConfig {
            exclude_repeated_skips: true,
            ..config()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let selected = select_session(&corpus(), &records, &config, &mut rng);
        assert_eq!(words(&selected), vec!["cat", "milk"]);
    }

    #[test]
    fn truncates_to_max_questions() {
        let config = SelectorConfig {
            max_questions: 2,
            ..config()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let selected = select_session(&corpus(), &no_history(), &config, &mut rng);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn duplicate_corpus_words_selected_once() {
        let mut corpus = corpus();
        corpus.push(WordEntry::new("cat", 1).with_sentence("Another cat."));
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let selected = select_session(&corpus, &no_history(), &config(), &mut rng);
        assert_eq!(words(&selected), vec!["cat", "dog", "milk"]);
    }

    #[test]
    fn same_seed_same_order() {
        let corpus: Vec<WordEntry> = (1..=50)
            .map(|i| WordEntry::new(format!("w{i}"), i).with_sentence(format!("Sentence {i}.")))
            .collect();
        let first = select_session(&corpus, &no_history(), &config(), &mut ChaCha8Rng::seed_from_u64(42));
        let second = select_session(&corpus, &no_history(), &config(), &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_when_everything_mastered() {
        let records = vec![record("cat", 3, 0), record("dog", 2, 0), record("milk", 9, 0)];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(select_session(&corpus(), &records, &config(), &mut rng).is_empty());
    }
}
