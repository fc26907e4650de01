//! Core dictation trainer library shared by every front end.
//!
//! Provides:
//! - Learning record store over a pluggable key-value backend
//! - Question selection (rank filter, mastery exclusion, seeded shuffle)
//! - Answer normalization and the per-question state machine
//! - JSON/CSV history snapshots and progress summaries
//! - Session controller tying corpus, records and selection together

pub mod error;
pub mod matching;
pub mod progress;
pub mod selector;
pub mod session;
pub mod snapshot;
pub mod speech;
pub mod store;
pub mod types;

pub use error::{DictationError, Result};
pub use matching::{compare_answer, is_match, normalize, MatchResult, Outcome, PromptState, PromptTracker};
pub use progress::{recent, summarize, ProgressSummary, View};
pub use selector::select_session;
pub use session::{Session, SessionStatus};
pub use snapshot::ExportFormat;
pub use speech::{NullSpeaker, Speaker, DEFAULT_LANG};
pub use store::{KeyValueStore, MemoryStore, RecordStore, STORAGE_KEY};
pub use types::{LearningRecord, SelectorConfig, WordEntry};
