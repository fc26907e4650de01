//! Answer matching for dictation prompts.
//!
//! A typed answer counts as correct when it equals the prompt after
//! [`normalize`] is applied to both sides.

/// Punctuation ignored when comparing answers.
const IGNORED_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// Lowercase, drop `. , ! ?`, and trim surrounding whitespace.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !IGNORED_PUNCTUATION.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whether `typed` matches `prompt` under [`normalize`].
pub fn is_match(typed: &str, prompt: &str) -> bool {
    normalize(typed) == normalize(prompt)
}

/// Result of comparing a typed answer to the prompt.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub is_correct: bool,
    /// Similarity score between 0.0 and 1.0, used for "almost" feedback.
    pub similarity: f64,
    pub typed_normalized: String,
    pub prompt_normalized: String,
}

/// Compare a typed answer to the prompt.
pub fn compare_answer(typed: &str, prompt: &str) -> MatchResult {
    let typed_normalized = normalize(typed);
    let prompt_normalized = normalize(prompt);
    let is_correct = typed_normalized == prompt_normalized;
    let similarity = if is_correct {
        1.0
    } else {
        normalized_similarity(&typed_normalized, &prompt_normalized)
    };

    MatchResult {
        is_correct,
        similarity,
        typed_normalized,
        prompt_normalized,
    }
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity in `0.0..=1.0` derived from the Levenshtein distance.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (levenshtein_distance(a, b) as f64 / max_len as f64)
}

/// How a question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Skipped,
}

impl Outcome {
    pub fn was_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Lifecycle of a single question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PromptState {
    #[default]
    Idle,
    Presenting { prompt: String },
    Resolved { prompt: String, outcome: Outcome },
}

/// Drives one question from presentation to resolution.
///
/// Resolution fires at most once per presented prompt: after the first
/// matching input (or a skip) every further call returns `None` until the
/// next [`PromptTracker::present`].
#[derive(Debug, Clone, Default)]
pub struct PromptTracker {
    state: PromptState,
}

impl PromptTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PromptState {
        &self.state
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, PromptState::Resolved { .. })
    }

    /// Start a new question, discarding whatever state came before.
    pub fn present(&mut self, prompt: impl Into<String>) {
        self.state = PromptState::Presenting {
            prompt: prompt.into(),
        };
    }

    /// Feed the learner's current input.
    pub fn input(&mut self, typed: &str) -> Option<Outcome> {
        let matched = match &self.state {
            PromptState::Presenting { prompt } => is_match(typed, prompt),
            _ => return None,
        };
        matched.then(|| self.resolve(Outcome::Correct))
    }

    /// Give up on the current question.
    pub fn skip(&mut self) -> Option<Outcome> {
        match self.state {
            PromptState::Presenting { .. } => Some(self.resolve(Outcome::Skipped)),
            _ => None,
        }
    }

    fn resolve(&mut self, outcome: Outcome) -> Outcome {
        if let PromptState::Presenting { prompt } = std::mem::take(&mut self.state) {
            self.state = PromptState::Resolved { prompt, outcome };
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_strips_case_and_punctuation() {
        assert_eq!(normalize("Cat."), normalize("cat"));
        assert_eq!(normalize(" Cat "), normalize("cat"));
        assert_eq!(normalize("Hello, world!?"), "hello world");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace_and_other_punctuation() {
        assert_eq!(normalize("it's  fine"), "it's  fine");
        assert_ne!(normalize("it's fine"), normalize("its fine"));
    }

    #[test]
    fn test_is_match_symmetric() {
        assert!(is_match("the cat sleeps", "The cat sleeps."));
        assert!(is_match("The cat sleeps.", "the cat sleeps"));
        assert!(!is_match("the cat sleep", "The cat sleeps."));
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_compare_answer_reports_similarity() {
        let result = compare_answer("the cat sleep", "The cat sleeps.");
        assert!(!result.is_correct);
        assert!(result.similarity > 0.9);
        assert_eq!(result.prompt_normalized, "the cat sleeps");

        let exact = compare_answer("THE CAT SLEEPS", "The cat sleeps.");
        assert!(exact.is_correct);
        assert_eq!(exact.similarity, 1.0);
    }

    #[test]
    fn test_tracker_resolves_once() {
        let mut tracker = PromptTracker::new();
        assert_eq!(tracker.input("cat"), None);

        tracker.present("Cat.");
        assert_eq!(tracker.input("ca"), None);
        assert_eq!(tracker.input("cat"), Some(Outcome::Correct));
        assert!(tracker.is_resolved());

        assert_eq!(tracker.input("cat"), None);
        assert_eq!(tracker.skip(), None);
    }

    #[test]
    fn test_tracker_skip_then_next_prompt() {
        let mut tracker = PromptTracker::new();
        tracker.present("dog");
        assert_eq!(tracker.skip(), Some(Outcome::Skipped));
        assert_eq!(
            tracker.state(),
            &PromptState::Resolved {
                prompt: "dog".to_string(),
                outcome: Outcome::Skipped,
            }
        );

        tracker.present("bird");
        assert!(!tracker.is_resolved());
        assert_eq!(tracker.input("Bird!"), Some(Outcome::Correct));
    }
}
