//! Learning progress summaries.

use crate::types::LearningRecord;

/// Number of records shown in the latest-history view.
pub const LATEST_LIMIT: usize = 10;

/// Which slice of the history to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Latest,
    All,
}

/// Records ordered by most recent answer first, limited by `view`.
pub fn recent<'a>(
    records: impl IntoIterator<Item = &'a LearningRecord>,
    view: View,
) -> Vec<&'a LearningRecord> {
    let mut sorted: Vec<&LearningRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| b.last_answered.cmp(&a.last_answered));
    if view == View::Latest {
        sorted.truncate(LATEST_LIMIT);
    }
    sorted
}

/// How many corpus words have been answered correctly at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub learned_words: usize,
    pub total_words: usize,
    /// Rounded to the nearest whole percent.
    pub percent: u32,
}

pub fn summarize<'a>(
    records: impl IntoIterator<Item = &'a LearningRecord>,
    total_words: usize,
) -> ProgressSummary {
    let learned_words = records
        .into_iter()
        .filter(|r| r.correct_count >= 1)
        .count();
    let percent = if total_words == 0 {
        0
    } else {
        (learned_words as f64 / total_words as f64 * 100.0).round() as u32
    };

    ProgressSummary {
        learned_words,
        total_words,
        percent,
    }
}
