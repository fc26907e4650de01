//! Subcommand implementations.

pub mod history;
pub mod practice;
pub mod progress;

pub use history::{export_history, import_history, reset_history};
pub use practice::{run_practice, PracticeOptions, PracticeReport};
pub use progress::show_progress;
